//! Raw label text → `ExtractedFields`, and image → text → fields.

use std::time::Instant;

use crate::models::{ExtractedFields, NutrientKey};

use super::coerce::coerce_value;
use super::label::{extract_added_sugars, extract_nutrient_value, NUTRIENT_LABELS};
use super::normalize::normalize_label_text;
use super::sanitize::sanitize_ocr_text;
use super::sections::{
    extract_ingredients, extract_serving_size, extract_servings_per_container, extract_warning,
};
use super::types::{LabelScan, OcrEngine};
use super::ExtractionError;

/// Extract every field from raw OCR text. Never fails: anything the label
/// does not yield is left as an empty string.
pub fn extract_fields(raw: &str) -> ExtractedFields {
    let mut fields = ExtractedFields::default();
    if raw.trim().is_empty() {
        return fields;
    }

    let text = normalize_label_text(raw);

    for label in NUTRIENT_LABELS {
        let token = match label.key {
            NutrientKey::AddedSugars => extract_added_sugars(&text),
            _ => extract_nutrient_value(&text, label.key),
        };
        fields.nutrients.set(label.key, coerce_value(&token));
    }

    fields.serving = extract_serving_size(&text);
    fields.serving_amount = extract_servings_per_container(&text);
    fields.ingredients = extract_ingredients(&text);
    fields.warning = extract_warning(&text);

    let found = NutrientKey::ALL
        .iter()
        .filter(|k| !fields.nutrients.get(**k).is_empty())
        .count();
    tracing::debug!(
        text_len = text.len(),
        nutrients_found = found,
        has_ingredients = !fields.ingredients.is_empty(),
        has_warning = !fields.warning.is_empty(),
        "Label fields extracted"
    );

    fields
}

/// Run OCR on a label photo and extract its fields.
pub fn scan_label_image(
    engine: &dyn OcrEngine,
    image_bytes: &[u8],
) -> Result<LabelScan, ExtractionError> {
    if image_bytes.is_empty() {
        return Err(ExtractionError::EmptyImage);
    }

    let start = Instant::now();
    let raw_text = sanitize_ocr_text(&engine.recognize_text(image_bytes)?);
    let fields = extract_fields(&raw_text);

    tracing::info!(
        engine = engine.name(),
        image_size = image_bytes.len(),
        text_len = raw_text.len(),
        elapsed_ms = %start.elapsed().as_millis(),
        "Label scan complete"
    );

    Ok(LabelScan { raw_text, fields })
}
