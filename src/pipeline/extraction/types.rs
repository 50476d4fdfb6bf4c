use serde::{Deserialize, Serialize};

use super::ExtractionError;
use crate::models::ExtractedFields;

/// Outcome of scanning one label photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelScan {
    pub raw_text: String,
    pub fields: ExtractedFields,
}

/// Text recognition abstraction (allows mocking for tests).
///
/// Implementations may block; async callers run them on a blocking thread.
pub trait OcrEngine: Send + Sync {
    fn recognize_text(&self, image_bytes: &[u8]) -> Result<String, ExtractionError>;

    /// Short identifier for logs.
    fn name(&self) -> &str {
        "ocr"
    }
}

/// Mock OCR engine: returns configured text or a configured failure.
pub struct MockOcrEngine {
    outcome: Result<String, String>,
}

impl MockOcrEngine {
    pub fn new(text: &str) -> Self {
        Self {
            outcome: Ok(text.to_string()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
        }
    }
}

impl OcrEngine for MockOcrEngine {
    fn recognize_text(&self, _image_bytes: &[u8]) -> Result<String, ExtractionError> {
        self.outcome
            .clone()
            .map_err(ExtractionError::OcrProcessing)
    }

    fn name(&self) -> &str {
        "mock"
    }
}
