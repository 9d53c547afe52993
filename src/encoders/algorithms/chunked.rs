//! The 5-byte / 8-symbol chunk codec.
//!
//! A full byte chunk is 40 bits, which splits evenly into eight 5-bit
//! symbols. A short trailing chunk is zero-padded on encode and `=`-padded on
//! decode, and only the meaningful prefix of the output is kept. Both
//! directions are pure functions that append to a caller-owned buffer, so the
//! streaming adapters and the whole-buffer helpers share them unchanged.

use crate::core::alphabet::{self, PAD};

pub use super::errors::DecodeError;

/// Raw bytes consumed per encode step.
pub const BYTES_PER_CHUNK: usize = 5;

/// Symbols consumed per decode step.
pub const SYMBOLS_PER_CHUNK: usize = 8;

/// Number of symbols produced for `bytes` raw bytes.
///
/// For a single chunk this is one of 2, 4, 5, 7 or 8.
pub const fn encoded_len(bytes: usize) -> usize {
    (bytes * 8).div_ceil(5)
}

/// Number of bytes carried by `symbols` symbols.
///
/// Returns `None` when the trailing group is a lone symbol, which no encoder
/// ever produces.
pub const fn decoded_len(symbols: usize) -> Option<usize> {
    if symbols % SYMBOLS_PER_CHUNK == 1 {
        return None;
    }
    Some(symbols / SYMBOLS_PER_CHUNK * BYTES_PER_CHUNK + (symbols % SYMBOLS_PER_CHUNK) * 5 / 8)
}

/// Encodes one chunk of 1 to 5 bytes, appending its symbols to `out`.
pub fn encode_chunk(chunk: &[u8], out: &mut String) {
    debug_assert!(
        !chunk.is_empty() && chunk.len() <= BYTES_PER_CHUNK,
        "byte chunk of {} bytes",
        chunk.len()
    );
    let len = chunk.len().min(BYTES_PER_CHUNK);

    // Low 40 bits of a big-endian u64, zero-padded on the right
    let mut word = [0u8; 8];
    word[3..3 + len].copy_from_slice(&chunk[..len]);
    let value = u64::from_be_bytes(word);

    for i in 0..encoded_len(len) {
        let shift = 35 - 5 * i as u32;
        let group = ((value >> shift) & 0x1F) as u8;
        out.push(alphabet::encode_symbol(group) as char);
    }
}

/// Decodes one chunk of up to 8 symbols, appending its bytes to `out`.
///
/// `position` is the offset of the chunk's first symbol in the whole input
/// and is only used for error reporting. Nothing is appended on error.
pub fn decode_chunk(symbols: &[u8], position: usize, out: &mut Vec<u8>) -> Result<(), DecodeError> {
    debug_assert!(symbols.len() <= SYMBOLS_PER_CHUNK);

    let len = symbols.len().min(SYMBOLS_PER_CHUNK);

    // Every symbol is checked before the length, so a lone invalid symbol
    // is an invalid character and not a malformed chunk
    let mut value = 0u64;
    for i in 0..SYMBOLS_PER_CHUNK {
        let symbol = symbols.get(i).copied().unwrap_or(PAD);
        let group = alphabet::decode_symbol(symbol)
            .ok_or_else(|| DecodeError::invalid_byte(symbol, position + i))?;
        value = (value << 5) | u64::from(group);
    }

    let out_len = decoded_len(len).ok_or(DecodeError::MalformedChunk { position })?;

    let word = value.to_be_bytes();
    out.extend_from_slice(&word[3..3 + out_len]);
    Ok(())
}

/// Encodes a whole buffer chunk by chunk.
pub fn encode_chunked(data: &[u8]) -> String {
    let mut result = String::with_capacity(encoded_len(data.len()));
    for chunk in data.chunks(BYTES_PER_CHUNK) {
        encode_chunk(chunk, &mut result);
    }
    result
}

/// Decodes a whole string chunk by chunk.
///
/// Errors carry the offending character's position in `encoded`, counted in
/// characters, together with the input for context.
pub fn decode_chunked(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    let bytes = encoded.as_bytes();
    let mut result = Vec::with_capacity(bytes.len() * 5 / 8);

    for (index, chunk) in bytes.chunks(SYMBOLS_PER_CHUNK).enumerate() {
        let offset = index * SYMBOLS_PER_CHUNK;
        decode_chunk(chunk, offset, &mut result).map_err(|e| match e {
            DecodeError::InvalidCharacter { position, .. } => {
                // Byte offset back to the character it falls in
                let start = (0..=position)
                    .rev()
                    .find(|&i| encoded.is_char_boundary(i))
                    .unwrap_or(0);
                let c = encoded[start..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                let char_position = encoded[..start].chars().count();
                DecodeError::invalid_character(c, char_position, encoded)
            }
            DecodeError::MalformedChunk { .. } => DecodeError::MalformedChunk {
                position: encoded.chars().count() - 1,
            },
        })?;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_one(chunk: &[u8]) -> String {
        let mut out = String::new();
        encode_chunk(chunk, &mut out);
        out
    }

    fn decode_one(symbols: &str) -> Result<Vec<u8>, DecodeError> {
        let mut out = Vec::new();
        decode_chunk(symbols.as_bytes(), 0, &mut out).map(|_| out)
    }

    #[test]
    fn test_encoded_lengths_per_chunk() {
        let lengths: Vec<usize> = (1..=5).map(encoded_len).collect();
        assert_eq!(lengths, vec![2, 4, 5, 7, 8]);
        assert_eq!(encoded_len(0), 0);
        assert_eq!(encoded_len(11), 18);
    }

    #[test]
    fn test_decoded_lengths_per_chunk() {
        let lengths: Vec<Option<usize>> = (0..=8).map(decoded_len).collect();
        assert_eq!(
            lengths,
            vec![Some(0), None, Some(1), Some(1), Some(2), Some(3), Some(3), Some(4), Some(5)]
        );
        assert_eq!(decoded_len(18), Some(11));
        assert_eq!(decoded_len(17), None);
    }

    #[test]
    fn test_encode_chunk_prefixes() {
        assert_eq!(encode_one(b"f"), "cr");
        assert_eq!(encode_one(b"fo"), "csqg");
        assert_eq!(encode_one(b"foo"), "csqpy");
        assert_eq!(encode_one(b"foob"), "csqpyrg");
        assert_eq!(encode_one(b"fooba"), "csqpyrk1");
        assert_eq!(encode_one(&[0xFF; 5]), "zzzzzzzz");
        assert_eq!(encode_one(&[0x00]), "00");
    }

    #[test]
    fn test_encode_chunk_appends() {
        let mut out = String::from("xx");
        encode_chunk(b"fo", &mut out);
        assert_eq!(out, "xxcsqg");
    }

    #[test]
    fn test_decode_chunk_prefixes() {
        assert_eq!(decode_one("cr").unwrap(), b"f");
        assert_eq!(decode_one("csqg").unwrap(), b"fo");
        assert_eq!(decode_one("csqpy").unwrap(), b"foo");
        assert_eq!(decode_one("csqpyrg").unwrap(), b"foob");
        assert_eq!(decode_one("csqpyrk1").unwrap(), b"fooba");
        assert_eq!(decode_one("ZZZZZZZZ").unwrap(), vec![0xFF; 5]);
    }

    #[test]
    fn test_decode_chunk_folds_synonyms() {
        assert_eq!(decode_one("CSQPYRKL").unwrap(), b"fooba");
        assert_eq!(decode_one("csqpyrki").unwrap(), b"fooba");
        assert_eq!(decode_one("oO").unwrap(), vec![0]);
    }

    #[test]
    fn test_decode_chunk_accepts_explicit_padding() {
        assert_eq!(decode_one("cr======").unwrap(), b"f\0\0\0\0");
        assert_eq!(decode_one("cr").unwrap(), b"f");
    }

    #[test]
    fn test_decode_chunk_single_symbol_is_malformed() {
        let mut out = Vec::new();
        let err = decode_chunk(b"c", 40, &mut out).unwrap_err();
        assert_eq!(err, DecodeError::MalformedChunk { position: 40 });
        assert!(out.is_empty());
    }

    #[test]
    fn test_decode_chunk_single_invalid_symbol() {
        let mut out = Vec::new();
        let err = decode_chunk(b"u", 8, &mut out).unwrap_err();
        assert_eq!(err, DecodeError::invalid_byte(b'u', 8));
        assert!(out.is_empty());
    }

    #[test]
    fn test_decode_chunk_reports_absolute_position() {
        let mut out = vec![1, 2, 3];
        let err = decode_chunk(b"csqUyrk1", 16, &mut out).unwrap_err();
        assert_eq!(err, DecodeError::invalid_byte(b'U', 19));
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn test_whole_buffer_helpers() {
        assert_eq!(encode_chunked(b""), "");
        assert_eq!(encode_chunked(b"foobar"), "csqpyrk1e8");
        assert_eq!(decode_chunked("csqpyrk1e8").unwrap(), b"foobar");
        assert_eq!(decode_chunked("").unwrap(), b"");
    }

    #[test]
    fn test_decode_chunked_error_positions_are_in_characters() {
        match decode_chunked("ab ü").unwrap_err() {
            DecodeError::InvalidCharacter {
                char, position, input, ..
            } => {
                assert_eq!(char, ' ');
                assert_eq!(position, 2);
                assert_eq!(input.as_deref(), Some("ab ü"));
            }
            other => panic!("unexpected {:?}", other),
        }

        match decode_chunked("abcdefghü").unwrap_err() {
            DecodeError::InvalidCharacter { char, position, .. } => {
                assert_eq!(char, 'ü');
                assert_eq!(position, 8);
            }
            other => panic!("unexpected {:?}", other),
        }

        assert_eq!(
            decode_chunked("csqpyrk1c").unwrap_err(),
            DecodeError::MalformedChunk { position: 8 }
        );

        match decode_chunked("abcdefghu").unwrap_err() {
            DecodeError::InvalidCharacter { char, position, .. } => {
                assert_eq!(char, 'u');
                assert_eq!(position, 8);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
