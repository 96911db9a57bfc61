//! # LSB Steganography Implementation
//!
//! Implements text embedding and extraction using Least Significant Bit (LSB) steganography.
//!
//! ## Algorithm
//!
//! The text is hidden in the least significant bit of the **blue** channel only, one bit
//! per pixel. Red, green and alpha are never touched.
//!
//! ### Encoding Process
//! 1. Convert every character to its 8-bit code (MSB first) and append an all-zero
//!    terminator byte
//! 2. Refuse the text if the image has fewer pixels than payload bits
//! 3. Walk the pixels in row-major order, replacing the blue LSB with the next bit
//! 4. Leave every pixel after the last payload bit untouched
//!
//! ### Decoding Process
//! 1. Walk the pixels in the same order, collecting blue LSBs
//! 2. Every 8 bits form a character code; a zero code ends the text
//! 3. Running out of pixels before the terminator means there is no payload
//!
//! ### Capacity
//! An image can store `(width * height) / 8 - 1` characters: one bit per pixel,
//! minus one byte for the terminator.
//!
//! Example: An 800x600 image can store 59 999 characters.
//!
//! ### Known limitation
//! A literal NUL character is indistinguishable from the terminator, so text
//! containing one is cut short when decoded.

use image::ImageFormat;
use log::debug;
use std::io::Cursor;

use super::bits::{bits_to_char, payload_bits, TERMINATOR};
use super::error::StegoError;
use super::pixels::{scan_order, PixelBuffer, BLUE};

/// Maximum number of characters an image of the given size can carry.
pub fn capacity(width: u32, height: u32) -> usize {
    let pixels = width as usize * height as usize;
    (pixels / 8).saturating_sub(1)
}

/// Hide `text` in the blue-channel LSBs of `image`.
///
/// All-or-nothing: on error the image is left exactly as it was.
///
/// # Errors
/// - [`StegoError::InvalidCharacter`] if a character is outside 0–255
/// - [`StegoError::PayloadTooLarge`] if the image has fewer pixels than payload bits
///
/// # Example
/// ```
/// use image::RgbaImage;
/// use stegochat::processing::steganography::{decode, encode};
///
/// let mut img = RgbaImage::new(16, 16);
/// encode(&mut img, "hello").unwrap();
/// assert_eq!(decode(&img).unwrap(), "hello");
/// ```
pub fn encode<P: PixelBuffer + ?Sized>(image: &mut P, text: &str) -> Result<(), StegoError> {
    let bits = payload_bits(text)?;

    let available_bits = image.pixel_count();
    if bits.len() > available_bits {
        return Err(StegoError::PayloadTooLarge {
            required_bits: bits.len(),
            available_bits,
        });
    }

    for ((x, y), bit) in scan_order(image.width(), image.height()).zip(bits.iter()) {
        let mut pixel = image.rgba(x, y);
        pixel[BLUE] = (pixel[BLUE] & 0xFE) | u8::from(*bit);
        image.set_rgba(x, y, pixel);
    }

    debug!(
        "Embedded {} bits into {}x{} image",
        bits.len(),
        image.width(),
        image.height()
    );

    Ok(())
}

/// Progress of the decoder's scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scanning,
    Done,
}

/// Accumulates blue LSBs into characters until the terminator shows up.
struct Unveiler {
    state: ScanState,
    pending: [bool; 8],
    filled: usize,
    text: String,
}

impl Unveiler {
    fn new() -> Self {
        Self {
            state: ScanState::Scanning,
            pending: [false; 8],
            filled: 0,
            text: String::new(),
        }
    }

    fn push_bit(&mut self, bit: bool) -> ScanState {
        self.pending[self.filled] = bit;
        self.filled += 1;

        if self.filled == 8 {
            self.filled = 0;
            match bits_to_char(&self.pending) {
                TERMINATOR => self.state = ScanState::Done,
                code => self.text.push(char::from(code)),
            }
        }

        self.state
    }
}

/// Recover text previously hidden with [`encode`].
///
/// Scanning stops at the first terminator. The image is never modified.
///
/// # Errors
/// - [`StegoError::NoPayloadFound`] if every pixel was read without meeting a terminator
pub fn decode<P: PixelBuffer + ?Sized>(image: &P) -> Result<String, StegoError> {
    let mut unveiler = Unveiler::new();

    for (x, y) in scan_order(image.width(), image.height()) {
        let bit = image.rgba(x, y)[BLUE] & 1 == 1;
        if unveiler.push_bit(bit) == ScanState::Done {
            debug!(
                "Found terminator after {} characters",
                unveiler.text.chars().count()
            );
            return Ok(unveiler.text);
        }
    }

    Err(StegoError::NoPayloadFound)
}

/// Embed text into an encoded image (any format the `image` crate reads).
///
/// # Returns
/// - `Ok(Vec<u8>)`: PNG image bytes with embedded text
/// - `Err`: the image could not be decoded, the text does not fit or contains
///   wide characters, or PNG serialization failed
///
/// # Example
/// ```ignore
/// let image_data = std::fs::read("input.jpg")?;
/// let carrier = embed_text_bytes(&image_data, "Secret message")?;
/// std::fs::write("output.png", carrier)?;
/// ```
pub fn embed_text_bytes(image_bytes: &[u8], text: &str) -> Result<Vec<u8>, StegoError> {
    let mut img = image::load_from_memory(image_bytes)
        .map_err(StegoError::ImageDecode)?
        .to_rgba8();

    encode(&mut img, text)?;

    // PNG keeps every pixel value intact, lossy formats would wipe the payload
    let mut output_bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut output_bytes), ImageFormat::Png)
        .map_err(StegoError::ImageEncode)?;

    Ok(output_bytes)
}

/// Extract text that was embedded with [`embed_text_bytes`].
pub fn extract_text_bytes(image_bytes: &[u8]) -> Result<String, StegoError> {
    let img = image::load_from_memory(image_bytes)
        .map_err(StegoError::ImageDecode)?
        .to_rgba8();

    decode(&img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::bits::payload_len;
    use image::{Rgba, RgbaImage};

    /// Every pixel has distinct channel values and blue LSB set to 1,
    /// so an untouched image never decodes.
    fn noisy_image(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            let i = (x * 7 + y * 13) as u8;
            Rgba([i, i.wrapping_add(1), i | 1, 200])
        })
    }

    #[test]
    fn test_round_trip() {
        let mut img = noisy_image(20, 10);
        encode(&mut img, "Hello, World!").unwrap();
        assert_eq!(decode(&img).unwrap(), "Hello, World!");
    }

    #[test]
    fn test_exact_fit_on_4x4() {
        let mut img = noisy_image(4, 4);
        encode(&mut img, "A").unwrap();
        assert_eq!(decode(&img).unwrap(), "A");
    }

    #[test]
    fn test_too_large_on_4x4() {
        let mut img = noisy_image(4, 4);
        let before = img.clone();

        match encode(&mut img, "AB") {
            Err(StegoError::PayloadTooLarge {
                required_bits,
                available_bits,
            }) => {
                assert_eq!(required_bits, 24);
                assert_eq!(available_bits, 16);
            }
            other => panic!("expected PayloadTooLarge, got {:?}", other),
        }
        assert_eq!(img, before);
    }

    #[test]
    fn test_invalid_character_leaves_image_untouched() {
        let mut img = noisy_image(32, 32);
        let before = img.clone();

        let result = encode(&mut img, "snow ☃");
        assert!(matches!(
            result,
            Err(StegoError::InvalidCharacter { character: '☃', position: 5 })
        ));
        assert_eq!(img, before);
    }

    #[test]
    fn test_empty_text_writes_single_terminator() {
        let mut img = noisy_image(4, 4);
        encode(&mut img, "").unwrap();

        for (i, (x, y)) in scan_order(4, 4).enumerate() {
            let blue_lsb = img.rgba(x, y)[BLUE] & 1;
            let expected = if i < 8 { 0 } else { 1 };
            assert_eq!(blue_lsb, expected, "pixel #{} at ({}, {})", i, x, y);
        }
        assert_eq!(decode(&img).unwrap(), "");
    }

    #[test]
    fn test_only_blue_lsb_of_payload_pixels_change() {
        let mut img = noisy_image(10, 10);
        let before = img.clone();
        let text = "abc";
        encode(&mut img, text).unwrap();

        let payload = payload_len(text.len());
        for (i, (x, y)) in scan_order(10, 10).enumerate() {
            let old = before.rgba(x, y);
            let new = img.rgba(x, y);
            assert_eq!(old[0], new[0]);
            assert_eq!(old[1], new[1]);
            assert_eq!(old[3], new[3]);
            assert_eq!(old[BLUE] & 0xFE, new[BLUE] & 0xFE);
            if i >= payload {
                assert_eq!(old, new, "pixel #{} is past the payload", i);
            }
        }
    }

    #[test]
    fn test_no_terminator_is_reported() {
        let img = noisy_image(8, 8);
        assert!(matches!(decode(&img), Err(StegoError::NoPayloadFound)));
    }

    #[test]
    fn test_image_smaller_than_a_byte_has_no_payload() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        assert!(matches!(decode(&img), Err(StegoError::NoPayloadFound)));
    }

    #[test]
    fn test_decoding_stops_at_first_terminator() {
        let mut img = noisy_image(16, 16);
        encode(&mut img, "second message").unwrap();
        encode(&mut img, "hi").unwrap();
        // "hi" plus terminator overwrote the first 24 pixels only
        assert_eq!(decode(&img).unwrap(), "hi");
    }

    #[test]
    fn test_latin1_round_trip() {
        let mut img = noisy_image(16, 16);
        encode(&mut img, "café ÿ").unwrap();
        assert_eq!(decode(&img).unwrap(), "café ÿ");
    }

    #[test]
    fn test_nul_character_truncates_text() {
        let mut img = noisy_image(16, 16);
        encode(&mut img, "ab\0cd").unwrap();
        assert_eq!(decode(&img).unwrap(), "ab");
    }

    #[test]
    fn test_capacity() {
        assert_eq!(capacity(4, 4), 1);
        assert_eq!(capacity(800, 600), 59_999);
        assert_eq!(capacity(2, 2), 0);
        assert_eq!(capacity(0, 0), 0);
    }

    #[test]
    fn test_text_at_capacity_fits() {
        let mut img = noisy_image(9, 7);
        let text = "x".repeat(capacity(9, 7));
        encode(&mut img, &text).unwrap();
        assert_eq!(decode(&img).unwrap(), text);

        let too_long = "x".repeat(capacity(9, 7) + 1);
        assert!(encode(&mut img, &too_long).is_err());
    }

    #[test]
    fn test_bytes_round_trip_through_png() {
        let img = noisy_image(12, 12);
        let mut png = Vec::new();
        img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .unwrap();

        let carrier = embed_text_bytes(&png, "over the wire").unwrap();
        assert_eq!(extract_text_bytes(&carrier).unwrap(), "over the wire");
    }

    #[test]
    fn test_bytes_rejects_garbage() {
        let result = embed_text_bytes(b"definitely not an image", "x");
        assert!(matches!(result, Err(StegoError::ImageDecode(_))));

        let result = extract_text_bytes(b"");
        assert!(matches!(result, Err(StegoError::ImageDecode(_))));
    }
}
