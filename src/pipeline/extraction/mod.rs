pub mod types;
pub mod sanitize;
pub mod normalize;
pub mod coerce;
pub mod label;
pub mod sections;
pub mod vision_ocr;
pub mod orchestrator;

pub use types::*;
pub use coerce::coerce_value;
pub use label::extract_label_value;
pub use normalize::normalize_label_text;
pub use orchestrator::*;
pub use vision_ocr::CloudVisionOcr;

use thiserror::Error;

/// Failures at the OCR boundary. Field extraction itself never fails.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Image payload is empty")]
    EmptyImage,

    #[error("Cannot reach OCR service at {0}")]
    OcrConnection(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("OCR service returned {status}: {body}")]
    OcrHttp { status: u16, body: String },

    #[error("OCR vendor error {code}: {message}")]
    OcrVendor { code: i32, message: String },

    #[error("OCR response parsing failed: {0}")]
    ResponseParsing(String),

    #[error("OCR processing failed: {0}")]
    OcrProcessing(String),
}
