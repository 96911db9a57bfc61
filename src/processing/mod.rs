//! # Image Processing and Steganography
//!
//! This module hides text in images and gets it back out, using LSB
//! (Least Significant Bit) steganography on the blue channel.
//!
//! - [`bits`]: character/bit conversion and payload flattening
//! - [`pixels`]: the [`PixelBuffer`] abstraction and scan order
//! - [`steganography`]: the encoder, the decoder and their byte-level wrappers
//! - [`error`]: the [`StegoError`] kinds

pub mod bits;
pub mod error;
pub mod pixels;
pub mod steganography;

// Re-export main functions for convenience
pub use error::StegoError;
pub use pixels::PixelBuffer;
pub use steganography::{capacity, decode, embed_text_bytes, encode, extract_text_bytes};
