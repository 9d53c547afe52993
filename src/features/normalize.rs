//! Canonical spelling of Base32 text for display and comparison.
//!
//! This folding is independent of the decode table in `core::alphabet`: the
//! decode table defines what the wire format accepts, this one only decides
//! when two spellings are the same.

/// Folds one character to its canonical spelling.
///
/// `=`, `O` and `o` become `0`; `L`, `I`, `l` and `i` become `1`; anything
/// else is lowercased. Characters outside the alphabet pass through
/// lowercased, so callers validate first when that matters.
pub fn normalize_char(c: char) -> char {
    match c {
        '=' | 'O' | 'o' => '0',
        'L' | 'I' | 'l' | 'i' => '1',
        _ => c.to_ascii_lowercase(),
    }
}

/// Folds every character of `s`, keeping its length.
pub fn normalize(s: &str) -> String {
    s.chars().map(normalize_char).collect()
}
