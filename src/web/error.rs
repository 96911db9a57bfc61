//! # API Errors
//!
//! Failures inside a handler are collected as [`ApiError`] and turned into a
//! JSON body of the form `{"message": ..., "error": ...}`, where `message`
//! names the operation that failed and `error` gives the detail.

use axum::extract::multipart::MultipartError;
use axum::extract::multipart::MultipartRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, warn};
use serde::Serialize;
use thiserror::Error;

use crate::processing::StegoError;
use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The request is not a `multipart/form-data` upload
    #[error("Invalid upload: {0}")]
    Rejection(#[from] MultipartRejection),

    #[error("Failed to read multipart data: {0}")]
    Multipart(#[from] MultipartError),

    #[error("No image provided")]
    MissingImage,

    #[error("No text provided")]
    MissingText,

    #[error(transparent)]
    Stego(#[from] StegoError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Processing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Rejection(e) => e.status(),
            ApiError::Multipart(e) => e.status(),
            ApiError::MissingImage | ApiError::MissingText => StatusCode::BAD_REQUEST,
            ApiError::Stego(StegoError::ImageDecode(_)) => StatusCode::BAD_REQUEST,
            ApiError::Stego(StegoError::ImageEncode(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Stego(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Storage(_) | ApiError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub error: String,
}

/// An [`ApiError`] tagged with the operation it interrupted.
#[derive(Debug)]
pub struct OperationError {
    message: &'static str,
    source: ApiError,
}

impl OperationError {
    pub fn new(message: &'static str, source: ApiError) -> Self {
        Self { message, source }
    }
}

impl IntoResponse for OperationError {
    fn into_response(self) -> Response {
        let status = self.source.status();
        if status.is_server_error() {
            error!("❌ {}: {}", self.message, self.source);
        } else {
            warn!("⚠️ {}: {}", self.message, self.source);
        }

        let body = ErrorResponse {
            message: self.message.to_string(),
            error: self.source.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
