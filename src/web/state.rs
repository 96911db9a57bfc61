use crate::storage::ImageStore;

/// Shared, read-only state handed to every handler.
pub struct AppState {
    pub store: ImageStore,
}

impl AppState {
    pub fn new(store: ImageStore) -> Self {
        Self { store }
    }
}
