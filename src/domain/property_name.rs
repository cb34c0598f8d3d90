//! Sanitization of property labels into alias identifiers.

/// Words that may not be used verbatim as an alias.
///
/// Rust strict and reserved keywords. Weak keywords such as `union` are
/// valid identifiers and are not listed.
const RESERVED_WORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Returns true if `word` is a reserved word.
pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(&word)
}

/// Converts a human-readable property label into an alias identifier.
///
/// - Converts to lowercase
/// - Replaces every character outside `[a-z0-9_]` with an underscore
/// - Prefixes an underscore if the result starts with a digit or is a
///   reserved word
///
/// The function is idempotent: sanitizing an alias returns it unchanged.
///
/// # Examples
///
/// ```
/// use anytype::domain::sanitize_property_name;
///
/// assert_eq!(sanitize_property_name("Release Year"), "release_year");
/// assert_eq!(sanitize_property_name("2nd Author"), "_2nd_author");
/// assert_eq!(sanitize_property_name("Type"), "_type");
/// ```
pub fn sanitize_property_name(label: &str) -> String {
    let sanitized: String = label
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let starts_with_digit = sanitized.starts_with(|c: char| c.is_ascii_digit());
    if starts_with_digit || is_reserved_word(&sanitized) {
        return format!("_{sanitized}");
    }

    sanitized
}
