//! HTTP router for label extraction and product comparison.
//!
//! Returns a composable `Router` with all routes nested under `/api/`.
//! Layers (outermost → innermost): CORS → access log → body limit.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;

/// Room for the JSON envelope and a data-URL prefix around the image.
const BODY_SLACK_BYTES: usize = 64 * 1024;

/// Request body cap for a base64 image of `max_image_bytes`.
fn body_limit(max_image_bytes: usize) -> usize {
    max_image_bytes.div_ceil(3) * 4 + BODY_SLACK_BYTES
}

pub fn api_router(ctx: ApiContext) -> Router {
    let limit = body_limit(ctx.max_image_bytes);

    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/extract", post(endpoints::extract::extract))
        .route("/compare", post(endpoints::compare::compare))
        .with_state(ctx)
        .layer(DefaultBodyLimit::max(limit))
        .layer(axum::middleware::from_fn(middleware::access_log::log_access));

    Router::new()
        .nest("/api", api)
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use base64::Engine;
    use tower::ServiceExt;

    use crate::pipeline::extraction::MockOcrEngine;

    const LABEL: &str = "Nutrition Facts\nServings per container 3\n\
        Calories 110\nTotal Fat 0.5g\nSodium 400mg\n\
        INGREDIENTS: Water, Whey, Salt.\nContains: Milk.";

    fn router_with(engine: MockOcrEngine) -> Router {
        api_router(ApiContext::new(Arc::new(engine)))
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn image_payload(bytes: &[u8]) -> serde_json::Value {
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        serde_json::json!({ "image": format!("data:image/jpeg;base64,{encoded}") })
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[test]
    fn body_limit_covers_base64_overhead() {
        assert_eq!(body_limit(3), 4 + BODY_SLACK_BYTES);
        assert_eq!(body_limit(4), 8 + BODY_SLACK_BYTES);
        assert!(body_limit(4 * 1024 * 1024) > 4 * 1024 * 1024 * 4 / 3);
    }

    #[tokio::test]
    async fn health_reports_engine() {
        let app = router_with(MockOcrEngine::new(""));
        let req = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["ocr_engine"], "mock");
    }

    #[tokio::test]
    async fn extract_returns_raw_text_and_fields() {
        let app = router_with(MockOcrEngine::new(LABEL));
        let response = app
            .oneshot(json_request("POST", "/api/extract", image_payload(b"\xFF\xD8\xFFjpeg")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["rawText"], LABEL);
        let fields = &json["fields"];
        assert_eq!(fields["calories"], "110");
        assert_eq!(fields["fat"], "0.5");
        assert_eq!(fields["sodium"], "400");
        assert_eq!(fields["serving_amount"], "3");
        assert_eq!(fields["ingredients"], "Water, Whey, Salt.");
        assert_eq!(fields["warning"], "Milk");
        // every key present even without data
        assert_eq!(fields["potassium"], "");
    }

    #[tokio::test]
    async fn extract_accepts_raw_base64() {
        let app = router_with(MockOcrEngine::new("Protein 3g"));
        let encoded = base64::engine::general_purpose::STANDARD.encode(b"png-bytes");
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/extract",
                serde_json::json!({ "image": encoded }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["fields"]["protein"], "3");
    }

    #[tokio::test]
    async fn extract_rejects_invalid_base64() {
        let app = router_with(MockOcrEngine::new(LABEL));
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/extract",
                serde_json::json!({ "image": "not-valid-base64!!!" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn extract_rejects_missing_image() {
        let app = router_with(MockOcrEngine::new(LABEL));
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/extract",
                serde_json::json!({ "image": "  " }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn extract_enforces_image_limit() {
        let ctx = ApiContext::new(Arc::new(MockOcrEngine::new(LABEL))).with_max_image_bytes(8);
        let app = api_router(ctx);
        let response = app
            .oneshot(json_request("POST", "/api/extract", image_payload(&[0u8; 9])))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"]["code"], "IMAGE_TOO_LARGE");
    }

    #[tokio::test]
    async fn extract_maps_ocr_failure_to_502() {
        let app = router_with(MockOcrEngine::failing("vendor down"));
        let response = app
            .oneshot(json_request("POST", "/api/extract", image_payload(b"img")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_json(response).await["error"]["code"], "OCR_UNAVAILABLE");
    }

    #[tokio::test]
    async fn compare_flags_declared_allergen() {
        let app = router_with(MockOcrEngine::new(""));
        let body = serde_json::json!({
            "product": {
                "name": "Cream Soup",
                "ingredients": "Water, Cream, Salt",
                "warning": "Milk",
                "sodium": "820"
            },
            "profile": {
                "allergens": ["Milk"],
                "dietary": ["High Sodium"],
                "strictness": 0.2
            }
        });
        let response = app
            .oneshot(json_request("POST", "/api/compare", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["harmful"], true);
        assert_eq!(json["reasons"][0]["kind"], "allergen");
        assert_eq!(json["reasons"][0]["matchedBy"], "warning");
        assert_eq!(json["reasons"][1]["kind"], "dietary");
        assert_eq!(json["reasons"][1]["field"], "sodium");
        assert_eq!(json["summary"]["allergens"][0], "Allergen: milk (via warning)");
        assert_eq!(
            json["summary"]["dietary"][0],
            "Dietary: high-sodium — sodium 820mg ≈ 36% DV (≥ 20%)"
        );
    }

    #[tokio::test]
    async fn compare_clean_product() {
        let app = router_with(MockOcrEngine::new(""));
        let body = serde_json::json!({
            "product": { "ingredients": "Water, Salt", "sodium": "5" },
            "profile": { "allergens": ["Peanuts"], "dietary": ["High Sodium"] }
        });
        let response = app
            .oneshot(json_request("POST", "/api/compare", body))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["harmful"], false);
        assert_eq!(json["reasons"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let app = router_with(MockOcrEngine::new(""));
        let req = Request::builder()
            .uri("/api/health")
            .header("Origin", "http://localhost:5173")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let app = router_with(MockOcrEngine::new(""));
        let req = Request::builder()
            .uri("/api/unknown")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
