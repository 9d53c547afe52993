//! Synonym-aware comparison of Base32 text.
//!
//! Two strings are equal when their normalized forms are identical, and are
//! ordered by the character codes of their normalized forms. Every character
//! must belong to the alphabet; an invalid character is an error rather than
//! a "not equal" answer.

use crate::core::alphabet;
use crate::encoders::algorithms::DecodeError;
use crate::features::normalize::normalize;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Checks that every character of `s` is in the decode table.
pub fn validate(s: &str) -> Result<(), DecodeError> {
    match s.chars().enumerate().find(|&(_, c)| !alphabet::is_symbol_char(c)) {
        Some((position, c)) => Err(DecodeError::invalid_character(c, position, s)),
        None => Ok(()),
    }
}

/// Whether every character of `s` is a Base32 symbol, synonym or pad.
pub fn is_valid(s: &str) -> bool {
    validate(s).is_ok()
}

/// Orders two Base32 strings by their normalized forms.
pub fn compare(a: &str, b: &str) -> Result<Ordering, DecodeError> {
    validate(a)?;
    validate(b)?;
    Ok(normalize(a).cmp(&normalize(b)))
}

/// Whether `a` and `b` spell the same Base32 text.
pub fn equal(a: &str, b: &str) -> Result<bool, DecodeError> {
    compare(a, b).map(|o| o == Ordering::Equal)
}

/// Whether `a` sorts before `b` once both are normalized.
pub fn less_than(a: &str, b: &str) -> Result<bool, DecodeError> {
    compare(a, b).map(|o| o == Ordering::Less)
}

/// An owned, validated Base32 string.
///
/// Keeps the spelling it was created with for display, but compares and
/// hashes by normalized form, so `"0O1l"` and `"00ll"` are the same key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CrockfordStr {
    raw: String,
    normalized: String,
}

impl CrockfordStr {
    /// Validates `s` and wraps it.
    pub fn new(s: impl Into<String>) -> Result<Self, DecodeError> {
        let raw = s.into();
        validate(&raw)?;
        let normalized = normalize(&raw);
        Ok(CrockfordStr { raw, normalized })
    }

    /// Encodes `data`; the result is already canonical.
    pub fn encode(data: &[u8]) -> Self {
        let raw = crate::encode(data);
        CrockfordStr {
            normalized: raw.clone(),
            raw,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The canonical spelling.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Decodes the text back into bytes.
    ///
    /// Validation has already ruled out invalid characters, so the only
    /// possible failure is a lone trailing symbol.
    pub fn decode(&self) -> Result<Vec<u8>, DecodeError> {
        crate::decode(&self.raw)
    }
}

impl PartialEq for CrockfordStr {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for CrockfordStr {}

impl PartialOrd for CrockfordStr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CrockfordStr {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalized.cmp(&other.normalized)
    }
}

impl Hash for CrockfordStr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

impl FromStr for CrockfordStr {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CrockfordStr::new(s)
    }
}

impl TryFrom<String> for CrockfordStr {
    type Error = DecodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        CrockfordStr::new(s)
    }
}

impl From<CrockfordStr> for String {
    fn from(s: CrockfordStr) -> Self {
        s.raw
    }
}

impl AsRef<str> for CrockfordStr {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for CrockfordStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
