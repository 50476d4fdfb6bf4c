//! `POST /api/compare`: screen a product against a profile.

use axum::Json;

use crate::api::types::CompareRequest;
use crate::intelligence::compare_product;
use crate::models::ComparisonResult;

/// Comparison is CPU-only and bounded by the text size, so it runs inline.
pub async fn compare(Json(payload): Json<CompareRequest>) -> Json<ComparisonResult> {
    Json(compare_product(&payload.product, &payload.profile))
}
