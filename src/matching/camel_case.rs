/// Convert an asset name into the identifier generated asset symbols use.
///
/// Names that already contain an uppercase letter and no separators are
/// treated as camelCase and only get their first character lowercased.
/// Everything else is split on spaces, hyphens and underscores; the first
/// word is lowercased and the rest are capitalized.
pub fn to_camel_case(name: &str) -> String {
    let has_uppercase = name.chars().any(char::is_uppercase);
    let has_separator = name.contains([' ', '-', '_']);

    if has_uppercase && !has_separator {
        return lowercase_first(name);
    }

    name.replace(['-', '_'], " ")
        .split_whitespace()
        .enumerate()
        .map(|(index, word)| {
            if index == 0 {
                word.to_lowercase()
            } else {
                capitalize(word)
            }
        })
        .collect()
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
