//! # StegoChat
//!
//! Hide short text messages in images and read them back.
//!
//! - [`processing`]: the LSB steganography codec
//! - [`storage`]: uniquely named storage for produced images
//! - [`web`]: the HTTP service exposing `/embed` and `/extract`
//! - [`common`]: configuration
//! - [`utils`]: logging setup

pub mod common;
pub mod processing;
pub mod storage;
pub mod utils;
pub mod web;

pub use processing::StegoError;
