//! # Bit/Character Conversion
//!
//! Shared by the encoder and the decoder. Every payload character is a single
//! byte (codepoint 0–255) written most-significant bit first, and the payload
//! ends with one all-zero byte.

use super::error::StegoError;

/// The all-zero block that marks the end of a payload.
pub const TERMINATOR: u8 = 0;

/// Split a character code into its 8 bits, most significant first.
pub fn char_to_bits(code: u8) -> [bool; 8] {
    let mut bits = [false; 8];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = (code >> (7 - i)) & 1 == 1;
    }
    bits
}

/// Reassemble 8 bits (most significant first) into a character code.
pub fn bits_to_char(bits: &[bool; 8]) -> u8 {
    bits.iter()
        .fold(0u8, |code, &bit| (code << 1) | u8::from(bit))
}

/// Number of bits needed to embed `char_count` characters plus the terminator.
pub fn payload_len(char_count: usize) -> usize {
    8 * (char_count + 1)
}

/// Flatten `text` into the bit sequence that gets embedded.
///
/// Fails with [`StegoError::InvalidCharacter`] on the first character whose
/// codepoint does not fit in one byte.
pub fn payload_bits(text: &str) -> Result<Vec<bool>, StegoError> {
    let mut bits = Vec::with_capacity(payload_len(text.chars().count()));

    for (position, character) in text.chars().enumerate() {
        let code = u8::try_from(u32::from(character))
            .map_err(|_| StegoError::InvalidCharacter { character, position })?;
        bits.extend_from_slice(&char_to_bits(code));
    }
    bits.extend_from_slice(&char_to_bits(TERMINATOR));

    Ok(bits)
}
