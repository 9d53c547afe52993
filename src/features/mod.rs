//! Text-level features that sit beside the codec.
//!
//! Normalization and comparison work on whole strings rather than streams.

pub mod compare;
pub mod normalize;

pub use compare::{CrockfordStr, compare, equal, is_valid, less_than, validate};
pub use normalize::{normalize, normalize_char};
