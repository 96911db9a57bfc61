//! # Output Naming
//!
//! Every stored image gets a fresh identifier from an [`IdGenerator`]. The
//! default is a random UUID, so concurrent requests never compete for a name.

use uuid::Uuid;

/// Source of unique identifiers for stored images.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random (v4) UUIDs in their hyphenated form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// File name for the image stored under `id`.
pub fn image_file_name(id: &str) -> String {
    format!("image-{}.png", id)
}
