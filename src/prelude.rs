//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use crockford::prelude::*;
//!
//! let text = encode(b"Hello");
//! assert_eq!(decode(&text).unwrap(), b"Hello");
//! ```

pub use crate::{
    // Text comparison
    CrockfordStr,

    DecodeError,
    // Streaming
    DecodeStream,
    EncodeStream,
    StreamError,

    compare,
    // Core encoding/decoding
    decode,
    decode_stream,
    encode,
    encode_stream,
    equal,
    is_valid,
    less_than,
    normalize,
};
