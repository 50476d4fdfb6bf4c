/// Drop control characters from vendor OCR output.
/// Newlines, carriage returns and tabs are kept; the normalizer handles
/// their spacing and the extractors rely on line structure.
pub fn sanitize_ocr_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\r' | '\t'))
        .collect()
}
