//! # Request Handlers
//!
//! Two endpoints wrap the codec:
//! - `POST /embed` takes `image` and `text` form fields, stores the carrier
//!   image and answers with where it was stored
//! - `POST /extract` takes an `image` form field and answers with the hidden text
//!
//! Uploads are read into memory and never written to disk. The CPU-bound codec
//! runs on the blocking thread pool.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use axum::Json;
use log::info;
use serde::Serialize;
use std::sync::Arc;

use super::error::{ApiError, OperationError};
use super::state::AppState;
use crate::processing::steganography;

const EMBED_FAILED: &str = "Error embedding text in image";
const EXTRACT_FAILED: &str = "Error extracting text from image";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedResponse {
    pub message: String,
    /// Filesystem path of the stored carrier image
    pub image_path: String,
    /// Where the stored image can be downloaded from this server
    pub image_url: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub message: String,
    pub text: String,
}

/// Form fields this service understands. Anything else is skipped.
#[derive(Default)]
struct UploadForm {
    image: Option<(String, Vec<u8>)>,
    text: Option<String>,
}

impl UploadForm {
    async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or("").to_string();

            match name.as_str() {
                "image" => {
                    let file_name = field.file_name().unwrap_or("image").to_string();
                    let data = field.bytes().await?;
                    form.image = Some((file_name, data.to_vec()));
                }
                "text" => form.text = Some(field.text().await?),
                _ => {}
            }
        }

        Ok(form)
    }
}

pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "stegochat"
    }))
}

pub async fn embed_handler(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<EmbedResponse>, OperationError> {
    embed(state, multipart)
        .await
        .map(Json)
        .map_err(|e| OperationError::new(EMBED_FAILED, e))
}

async fn embed(
    state: Arc<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<EmbedResponse, ApiError> {
    let form = UploadForm::read(multipart?).await?;
    let (file_name, image) = form.image.ok_or(ApiError::MissingImage)?;
    let text = form.text.ok_or(ApiError::MissingText)?;

    info!(
        "📤 Embedding {} characters into {} ({} bytes)",
        text.chars().count(),
        file_name,
        image.len()
    );

    let carrier = tokio::task::spawn_blocking(move || {
        steganography::embed_text_bytes(&image, &text)
    })
    .await??;

    let stored = state.store.save_png(&carrier).await?;

    info!("✅ Embedded text into {}", stored.file_name);

    Ok(EmbedResponse {
        message: "Text embedded successfully".to_string(),
        image_path: stored.path.display().to_string(),
        image_url: format!("/display/{}", stored.file_name),
    })
}

pub async fn extract_handler(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ExtractResponse>, OperationError> {
    extract(multipart)
        .await
        .map(Json)
        .map_err(|e| OperationError::new(EXTRACT_FAILED, e))
}

async fn extract(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<ExtractResponse, ApiError> {
    let form = UploadForm::read(multipart?).await?;
    let (file_name, image) = form.image.ok_or(ApiError::MissingImage)?;

    info!("📥 Extracting text from {} ({} bytes)", file_name, image.len());

    let text =
        tokio::task::spawn_blocking(move || steganography::extract_text_bytes(&image)).await??;

    info!("✅ Extracted {} characters from {}", text.chars().count(), file_name);

    Ok(ExtractResponse {
        message: "Text extracted successfully".to_string(),
        text,
    })
}
