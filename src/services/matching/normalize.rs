use std::sync::OnceLock;

use regex::Regex;

fn separators() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s-]+").expect("separator pattern is valid"))
}

/// Lower-cases a name. This is the only normalization applied before
/// comparison; punctuation and accents are kept.
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
}

/// Splits an already-normalized name into words on runs of whitespace and
/// hyphens. Leading and trailing separators produce no empty words.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    separators()
        .split(normalized)
        .filter(|w| !w.is_empty())
        .collect()
}
