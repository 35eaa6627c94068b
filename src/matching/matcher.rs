use super::patterns::{Pattern, IDENTIFIER_BOUNDARY};
use regex::Regex;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::trace;

/// Counts occurrences of a pattern in a block of text
pub trait PatternMatching: Send + Sync {
    /// Number of non-overlapping matches of `pattern` in `text`
    fn count_matches(&self, pattern: &Pattern, text: &str) -> usize;
}

/// Regex-backed matcher with a cache of compiled expressions.
///
/// Literal patterns are counted with a plain substring search. Regex
/// patterns go through the `regex` crate; a trailing identifier boundary
/// lookahead is applied as a check on the character after each match, since
/// the engine has no lookaround. Patterns that fail to compile count zero.
#[derive(Default)]
pub struct PatternMatcher {
    compiled: RwLock<HashMap<String, Option<CompiledRegex>>>,
}

#[derive(Clone)]
struct CompiledRegex {
    regex: Regex,
    identifier_boundary: bool,
}

impl PatternMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    fn compile(&self, source: &str) -> Option<CompiledRegex> {
        if let Ok(cache) = self.compiled.read() {
            if let Some(entry) = cache.get(source) {
                return entry.clone();
            }
        }

        let (body, identifier_boundary) = match source.strip_suffix(IDENTIFIER_BOUNDARY) {
            Some(body) => (body, true),
            None => (source, false),
        };
        let compiled = match Regex::new(body) {
            Ok(regex) => Some(CompiledRegex {
                regex,
                identifier_boundary,
            }),
            Err(e) => {
                trace!("Ignoring invalid pattern {:?}: {}", source, e);
                None
            }
        };

        if let Ok(mut cache) = self.compiled.write() {
            cache.insert(source.to_string(), compiled.clone());
        }
        compiled
    }
}

impl PatternMatching for PatternMatcher {
    fn count_matches(&self, pattern: &Pattern, text: &str) -> usize {
        match pattern {
            Pattern::Literal(literal) => count_literal(literal, text),
            Pattern::Regex(source) => match self.compile(source) {
                Some(compiled) => compiled.count(text),
                None => 0,
            },
        }
    }
}

impl CompiledRegex {
    fn count(&self, text: &str) -> usize {
        self.regex
            .find_iter(text)
            .filter(|m| {
                !self.identifier_boundary
                    || !text[m.end()..]
                        .chars()
                        .next()
                        .is_some_and(|c| c.is_ascii_alphanumeric())
            })
            .count()
    }
}

/// Greedy non-overlapping substring count; an empty literal never matches
pub fn count_literal(literal: &str, text: &str) -> usize {
    if literal.is_empty() {
        return 0;
    }
    text.matches(literal).count()
}

/// Count `raw` in `text`, classifying it with [`Pattern::parse`]
pub fn count_matches(raw: &str, text: &str) -> usize {
    PatternMatcher::new().count_matches(&Pattern::parse(raw), text)
}
