//! Candidate spellings of an asset reference, per asset type.

use super::camel_case::to_camel_case;
use crate::asset::AssetType;

/// Leading character that marks a pattern as a regular expression
pub const REGEX_SENTINEL: char = '\\';

/// Trailing negative lookahead that stops a symbol from matching a prefix of
/// a longer identifier
pub const IDENTIFIER_BOUNDARY: &str = "(?![A-Za-z0-9])";

/// A single textual pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Plain substring
    Literal(String),
    /// Regular expression source
    Regex(String),
}

impl Pattern {
    /// Classify a raw pattern string: anything starting with a backslash is
    /// a regular expression, everything else a literal.
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with(REGEX_SENTINEL) {
            Pattern::Regex(raw.to_string())
        } else {
            Pattern::Literal(raw.to_string())
        }
    }

    /// Dot-access symbol such as `.primaryColor`, anchored on the right
    pub fn symbol(identifier: &str) -> Self {
        Pattern::Regex(format!(
            "{}.{}{}",
            REGEX_SENTINEL,
            regex::escape(identifier),
            IDENTIFIER_BOUNDARY
        ))
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Pattern::Literal(text.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Pattern::Literal(s) | Pattern::Regex(s) => s,
        }
    }

    pub fn is_regex(&self) -> bool {
        matches!(self, Pattern::Regex(_))
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the ordered pattern list for an asset.
///
/// `asset_name` is the raw (dot-stripped) name; the symbol form is derived
/// from its camelCase identifier.
pub fn search_patterns(asset_type: AssetType, asset_name: &str) -> Vec<Pattern> {
    let symbol = to_camel_case(asset_name);
    let quoted = format!("\"{}\"", asset_name);

    let mut patterns = Vec::new();
    if asset_type != AssetType::Data && !symbol.is_empty() {
        patterns.push(Pattern::symbol(&symbol));
    }

    let literals: Vec<String> = match asset_type {
        AssetType::Image => vec![
            // UIKit
            format!("UIImage(named: {})", quoted),
            format!("UIImage(named:{})", quoted),
            format!("[UIImage imageNamed:{}]", quoted),
            format!("imageNamed:{}", quoted),
            // SwiftUI
            format!("Image({})", quoted),
            "Image(\"".to_string(),
            // AppKit
            format!("NSImage(named: {})", quoted),
            format!("NSImage(named:{})", quoted),
            // Bare string lookups
            quoted.clone(),
            format!("named: {}", quoted),
            // Storyboard / XIB
            format!("image={}", quoted),
            format!("image = {}", quoted),
        ],
        AssetType::Color => vec![
            // UIKit
            format!("UIColor(named: {})", quoted),
            format!("UIColor(named:{})", quoted),
            format!("[UIColor colorNamed:{}]", quoted),
            format!("colorNamed:{}", quoted),
            // SwiftUI
            format!("Color({})", quoted),
            "Color(\"".to_string(),
            // AppKit
            format!("NSColor(named: {})", quoted),
            format!("NSColor(named:{})", quoted),
            // Bare string lookups
            quoted.clone(),
            format!("named: {}", quoted),
            // Storyboard / XIB
            format!("color={}", quoted),
            format!("color = {}", quoted),
            format!("backgroundColor={}", quoted),
            format!("backgroundColor = {}", quoted),
            format!("textColor={}", quoted),
            format!("textColor = {}", quoted),
            format!("tintColor={}", quoted),
            format!("tintColor = {}", quoted),
        ],
        AssetType::Data => vec![quoted.clone()],
    };

    patterns.extend(literals.into_iter().map(Pattern::Literal));
    patterns
}
