//! # Output Storage
//!
//! Keeps produced carrier images on disk under unique names. The codec knows
//! nothing about this module.

pub mod naming;
pub mod store;

pub use naming::{IdGenerator, UuidGenerator};
pub use store::{ImageStore, StorageError, StoredImage};
