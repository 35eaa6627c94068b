//! Reference pattern construction and counting

mod camel_case;
mod matcher;
mod patterns;

pub use camel_case::to_camel_case;
pub use matcher::{count_literal, count_matches, PatternMatcher, PatternMatching};
pub use patterns::{search_patterns, Pattern, IDENTIFIER_BOUNDARY, REGEX_SENTINEL};
