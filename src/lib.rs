//! Crockford Base32 encoding with lazy async streaming.
//!
//! Bytes are packed five at a time into eight symbols from the alphabet
//! `0123456789abcdefghjkmnpqrstvwxyz`. Decoding is case-insensitive and reads
//! `O`/`o` as zero and `I`/`i`/`L`/`l` as one.
//!
//! # Example
//!
//! ```
//! let encoded = crockford::encode(b"hello world");
//! assert_eq!(encoded, "d1jprv3f41vpywkccg");
//! assert_eq!(crockford::decode("D1JPRV3F41VPYWKCCG").unwrap(), b"hello world");
//! assert!(crockford::equal("0O1l", "0011").unwrap());
//! ```
//!
//! For sources that arrive over time, [`encode_stream`] and [`decode_stream`]
//! wrap any `tokio::io::AsyncRead` and yield one chunk at a time.

pub mod core;
pub mod encoders;
pub mod features;
pub mod prelude;

pub use crate::core::alphabet;
pub use crate::core::config::{DecodeSettings, EncodeSettings, LogSettings, Settings};
pub use encoders::algorithms::chunked::{decoded_len, encoded_len};
pub use encoders::algorithms::{DecodeError, StreamError};
pub use encoders::streaming::{DecodeStream, EncodeStream, decode_stream, encode_stream};
pub use features::{
    CrockfordStr, compare, equal, is_valid, less_than, normalize, normalize_char, validate,
};

use futures::executor::block_on_stream;

/// Encodes bytes as Crockford Base32 text.
///
/// Drives an [`EncodeStream`] over the buffer to exhaustion.
pub fn encode(data: &[u8]) -> String {
    // Reading from a slice never fails or suspends
    block_on_stream(EncodeStream::new(data)).flatten().collect()
}

/// Decodes Crockford Base32 text into bytes.
///
/// Fails on the first character outside the alphabet, or when the text ends
/// in a lone symbol.
pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    encoders::algorithms::chunked::decode_chunked(encoded)
}
