//! # HTTP Service
//!
//! Axum front end for the codec: multipart uploads in, JSON out.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use routes::router;
pub use state::AppState;
