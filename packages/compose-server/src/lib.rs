pub mod compose;
pub mod config;
pub mod handler;
pub mod model;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};

use compose_core::AssetStore;

#[derive(Clone)]
pub struct AppState {
    pub assets: AssetStore,
}

pub fn router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(handler::health))
        .route("/compose", post(handler::compose))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use compose_core::{decode_base64_image, encode_base64_png};
    use image::{Rgba, RgbaImage};
    use tower::ServiceExt;

    const TEST_BODY_LIMIT: usize = 64 * 1024;

    fn app(dir: &std::path::Path, max_body_bytes: usize) -> Router {
        let state = AppState {
            assets: AssetStore::new(dir),
        };
        router(state, max_body_bytes)
    }

    fn post_compose(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/compose")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_health_route() {
        let dir = tempfile::tempdir().unwrap();
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app(dir.path(), TEST_BODY_LIMIT)
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"ok");
    }

    #[tokio::test]
    async fn test_compose_route() {
        let dir = tempfile::tempdir().unwrap();
        RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255]))
            .save(dir.path().join("badge.png"))
            .unwrap();
        let base = RgbaImage::from_pixel(16, 8, Rgba([255, 0, 0, 255]));
        let body = serde_json::json!({
            "imagens": [{ "image": "badge", "x": 2, "y": 2 }],
            "image_b64": encode_base64_png(&base).unwrap(),
        });

        let response = app(dir.path(), TEST_BODY_LIMIT)
            .oneshot(post_compose(body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = body_bytes(response).await;
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["width"], 16);
        assert_eq!(json["height"], 8);

        let img = decode_base64_image(json["image_b64"].as_str().unwrap()).unwrap();
        assert_eq!(img.get_pixel(3, 3), &Rgba([0, 0, 255, 255]));
        assert_eq!(img.get_pixel(10, 3), &Rgba([255, 0, 0, 255]));
    }

    #[tokio::test]
    async fn test_compose_route_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        let body = r#"{ "imagens": [], "image_b64": "***" }"#;

        let response = app(dir.path(), TEST_BODY_LIMIT)
            .oneshot(post_compose(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = body_bytes(response).await;
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json["error"].is_string());
        assert!(json["details"].is_string());
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let body = serde_json::json!({
            "imagens": [],
            "image_b64": "A".repeat(4096),
        });

        let response = app(dir.path(), 1024)
            .oneshot(post_compose(body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let dir = tempfile::tempdir().unwrap();

        let response = app(dir.path(), TEST_BODY_LIMIT)
            .oneshot(post_compose(r#"{ "imagens": [ "#))
            .await
            .unwrap();
        assert!(response.status().is_client_error());

        // 必須フィールドの欠落
        let response = app(dir.path(), TEST_BODY_LIMIT)
            .oneshot(post_compose(r#"{ "imagens": [] }"#))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let dir = tempfile::tempdir().unwrap();
        let request = Request::builder()
            .uri("/missing")
            .body(Body::empty())
            .unwrap();

        let response = app(dir.path(), TEST_BODY_LIMIT)
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
