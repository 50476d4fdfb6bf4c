//! `POST /api/extract`: label photo → recognized text + nutrient fields.
//!
//! Decodes the base64 payload, enforces the image size limit, then runs
//! the OCR engine on a blocking thread.

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use base64::Engine;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, ExtractRequest};
use crate::pipeline::extraction::{scan_label_image, LabelScan};

pub async fn extract(
    State(ctx): State<ApiContext>,
    Json(payload): Json<ExtractRequest>,
) -> Result<Json<LabelScan>, ApiError> {
    let start = Instant::now();

    let image = payload.image.trim();
    if image.is_empty() {
        return Err(ApiError::BadRequest("Missing image data".into()));
    }

    let image_bytes = decode_data_url(image)
        .map_err(|e| ApiError::BadRequest(format!("Invalid image data: {e}")))?;

    if image_bytes.len() > ctx.max_image_bytes {
        return Err(ApiError::ImageTooLarge {
            size: image_bytes.len(),
            limit: ctx.max_image_bytes,
        });
    }

    let image_format = detect_image_format(&image_bytes);
    let image_size = image_bytes.len();
    let engine = ctx.ocr.clone();

    let scan =
        tokio::task::spawn_blocking(move || scan_label_image(engine.as_ref(), &image_bytes))
            .await??;

    tracing::info!(
        image_format,
        image_size,
        fields_found = !scan.fields.is_empty(),
        elapsed_ms = %start.elapsed().as_millis(),
        "Extract request complete"
    );

    Ok(Json(scan))
}

/// Decode a base64 data URL to raw bytes.
///
/// Handles both `data:image/jpeg;base64,...` and raw base64 strings.
fn decode_data_url(data_url: &str) -> Result<Vec<u8>, String> {
    let base64_data = match data_url.find(',') {
        Some(idx) => &data_url[idx + 1..],
        None => data_url,
    };

    base64::engine::general_purpose::STANDARD
        .decode(base64_data.trim())
        .map_err(|e| format!("Base64 decode failed: {e}"))
}

/// Image container from magic bytes, for logs only. OCR vendors sniff
/// the format themselves.
fn detect_image_format(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "jpeg"
    } else if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        "png"
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        "webp"
    } else if bytes.len() >= 8 && &bytes[4..8] == b"ftyp" {
        "heic"
    } else {
        "unknown"
    }
}
