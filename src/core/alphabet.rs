//! The Crockford Base32 alphabet.
//!
//! Two constant tables built at compile time: one maps 5-bit values to the
//! canonical lowercase symbols, the other maps every possible input byte to
//! a 5-bit value or marks it invalid. The decode table folds case and the
//! visual synonyms `O`/`o` (zero) and `I`/`i`/`L`/`l` (one), and reads the
//! pad character `=` as zero.

/// Number of symbols in the alphabet.
pub const BASE: usize = 32;

/// Bits carried by one symbol.
pub const BITS_PER_SYMBOL: u32 = 5;

/// Pad character used to fill a short trailing symbol chunk.
pub const PAD: u8 = b'=';

/// Canonical symbols, indexed by value.
pub const SYMBOLS: &[u8; BASE] = b"0123456789abcdefghjkmnpqrstvwxyz";

const INVALID: u8 = 0xFF;

static DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];

    let mut value = 0;
    while value < BASE {
        let symbol = SYMBOLS[value];
        table[symbol as usize] = value as u8;
        table[symbol.to_ascii_uppercase() as usize] = value as u8;
        value += 1;
    }

    table[b'O' as usize] = 0;
    table[b'o' as usize] = 0;
    table[b'I' as usize] = 1;
    table[b'i' as usize] = 1;
    table[b'L' as usize] = 1;
    table[b'l' as usize] = 1;
    table[PAD as usize] = 0;

    table
}

/// Returns the canonical symbol for a 5-bit value.
///
/// Only the low five bits of `value` are used, so every input maps to a symbol.
#[inline]
pub fn encode_symbol(value: u8) -> u8 {
    SYMBOLS[(value & 0x1F) as usize]
}

/// Returns the 5-bit value of an input byte, or `None` if the byte is not
/// part of the decode table.
#[inline]
pub fn decode_symbol(byte: u8) -> Option<u8> {
    match DECODE_TABLE[byte as usize] {
        INVALID => None,
        value => Some(value),
    }
}

#[inline]
pub fn is_symbol(byte: u8) -> bool {
    decode_symbol(byte).is_some()
}

/// Character-level membership test, for text that may contain non-ASCII.
#[inline]
pub fn is_symbol_char(c: char) -> bool {
    c.is_ascii() && is_symbol(c as u8)
}
