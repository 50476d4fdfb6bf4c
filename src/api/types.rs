//! Shared state and wire types for the HTTP layer.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_MAX_IMAGE_BYTES;
use crate::models::{ProductRecord, UserProfile};
use crate::pipeline::extraction::OcrEngine;

/// Shared context for all API routes.
#[derive(Clone)]
pub struct ApiContext {
    pub ocr: Arc<dyn OcrEngine>,
    /// Decoded image size limit for `/api/extract`.
    pub max_image_bytes: usize,
}

impl ApiContext {
    pub fn new(ocr: Arc<dyn OcrEngine>) -> Self {
        Self {
            ocr,
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }

    pub fn with_max_image_bytes(mut self, limit: usize) -> Self {
        self.max_image_bytes = limit;
        self
    }
}

/// `POST /api/extract` body.
#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    /// Raw base64 or a data URL (`data:image/jpeg;base64,...`).
    pub image: String,
}

/// `POST /api/compare` body.
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub product: ProductRecord,
    #[serde(default)]
    pub profile: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub ocr_engine: String,
}
