use thiserror::Error;

/// Errors raised while hiding text in, or recovering text from, an image.
#[derive(Error, Debug)]
pub enum StegoError {
    /// The text plus its terminator needs more pixels than the image has
    #[error(
        "Image too small for this text: need {required_bits} bits but only have {available_bits} bits available"
    )]
    PayloadTooLarge {
        required_bits: usize,
        available_bits: usize,
    },

    /// A character outside the single-byte range (codepoint > 255)
    #[error("Character {character:?} at position {position} is not a single-byte character")]
    InvalidCharacter { character: char, position: usize },

    /// The whole image was scanned without meeting a terminator
    #[error("No embedded text found in image")]
    NoPayloadFound,

    /// The uploaded bytes are not an image the decoder understands
    #[error("Failed to decode image: {0}")]
    ImageDecode(#[source] image::ImageError),

    /// Writing the carrier image back out as PNG failed
    #[error("Failed to encode image: {0}")]
    ImageEncode(#[source] image::ImageError),
}
