//! Cloud text-recognition engine for label photos.
//!
//! Talks to a Cloud-Vision-style `v1/images:annotate` endpoint with a
//! `TEXT_DETECTION` feature and returns the full recognized text. The
//! vendor call is the only network I/O on the extraction path.

use std::time::Duration;

use base64::Engine as _;
use serde::{Deserialize, Serialize};

use super::types::OcrEngine;
use super::ExtractionError;

const ANNOTATE_PATH: &str = "/v1/images:annotate";
const TEXT_DETECTION: &str = "TEXT_DETECTION";

/// Production OCR engine backed by an HTTP text-recognition service.
pub struct CloudVisionOcr {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl CloudVisionOcr {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self, ExtractionError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ExtractionError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
            timeout_secs,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, ANNOTATE_PATH)
    }
}

#[derive(Serialize)]
struct AnnotateRequest {
    requests: Vec<AnnotateImageRequest>,
}

#[derive(Serialize)]
struct AnnotateImageRequest {
    image: ImageContent,
    features: Vec<Feature>,
}

#[derive(Serialize)]
struct ImageContent {
    content: String,
}

#[derive(Serialize)]
struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<AnnotateImageResponse>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateImageResponse {
    full_text_annotation: Option<FullTextAnnotation>,
    #[serde(default)]
    text_annotations: Vec<EntityAnnotation>,
    error: Option<VendorStatus>,
}

#[derive(Deserialize)]
struct FullTextAnnotation {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct EntityAnnotation {
    #[serde(default)]
    description: String,
}

#[derive(Deserialize)]
struct VendorStatus {
    #[serde(default)]
    code: i32,
    #[serde(default)]
    message: String,
}

fn build_request(image_bytes: &[u8]) -> AnnotateRequest {
    AnnotateRequest {
        requests: vec![AnnotateImageRequest {
            image: ImageContent {
                content: base64::engine::general_purpose::STANDARD.encode(image_bytes),
            },
            features: vec![Feature {
                kind: TEXT_DETECTION,
            }],
        }],
    }
}

/// Pull the recognized text out of an annotate response body.
/// A response with no text annotations is a blank label, not an error.
fn parse_annotate_response(body: &str) -> Result<String, ExtractionError> {
    let parsed: AnnotateResponse = serde_json::from_str(body)
        .map_err(|e| ExtractionError::ResponseParsing(e.to_string()))?;

    let Some(first) = parsed.responses.into_iter().next() else {
        return Ok(String::new());
    };

    if let Some(status) = first.error {
        return Err(ExtractionError::OcrVendor {
            code: status.code,
            message: status.message,
        });
    }

    if let Some(full) = first.full_text_annotation {
        return Ok(full.text);
    }

    Ok(first
        .text_annotations
        .into_iter()
        .next()
        .map(|a| a.description)
        .unwrap_or_default())
}

impl OcrEngine for CloudVisionOcr {
    fn recognize_text(&self, image_bytes: &[u8]) -> Result<String, ExtractionError> {
        let _span = tracing::info_span!("vision_ocr", image_size = image_bytes.len()).entered();
        let start = std::time::Instant::now();

        let mut request = self.client.post(self.endpoint()).json(&build_request(image_bytes));
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key)]);
        }

        let response = request.send().map_err(|e| {
            if e.is_connect() {
                ExtractionError::OcrConnection(self.base_url.clone())
            } else if e.is_timeout() {
                ExtractionError::HttpClient(format!(
                    "Request timed out after {}s",
                    self.timeout_secs
                ))
            } else {
                ExtractionError::HttpClient(e.to_string())
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| ExtractionError::ResponseParsing(e.to_string()))?;
        if !status.is_success() {
            return Err(ExtractionError::OcrHttp {
                status: status.as_u16(),
                body,
            });
        }

        let text = parse_annotate_response(&body)?;

        tracing::info!(
            elapsed_ms = %start.elapsed().as_millis(),
            text_len = text.len(),
            "Vision OCR complete"
        );

        Ok(text)
    }

    fn name(&self) -> &str {
        "cloud-vision"
    }
}
