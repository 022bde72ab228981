use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::AppState;
use crate::compose::{OverlayOutcome, compose_image};
use crate::model::{ComposeRequest, ComposeResponse};
use compose_core::{ComposeError, DecodeError, TransformError};

const DECODE_FAILED_MESSAGE: &str = "failed to decode base image";

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn compose(
    State(state): State<AppState>,
    Json(request): Json<ComposeRequest>,
) -> Result<Json<ComposeResponse>, AppError> {
    let overlays = request.imagens.len();
    tracing::info!(
        overlays,
        base_b64_len = request.image_b64.len(),
        "composing image"
    );

    // デコード・合成・エンコードは CPU バウンドなのでブロッキングスレッドで実行
    let assets = state.assets.clone();
    let composition = tokio::task::spawn_blocking(move || compose_image(&request, &assets))
        .await
        .map_err(|e| AppError::Internal(format!("compose task failed: {e}")))??;

    let applied = composition
        .outcomes
        .iter()
        .filter(|o| matches!(o, OverlayOutcome::Applied { .. }))
        .count();
    tracing::info!(
        width = composition.width,
        height = composition.height,
        overlays,
        applied,
        "image composed"
    );

    Ok(Json(composition.into()))
}

#[derive(Debug)]
pub enum AppError {
    DecodeFailed(String),
    Internal(String),
}

impl From<ComposeError> for AppError {
    fn from(err: ComposeError) -> Self {
        match err {
            ComposeError::Decode(decode_err) => decode_err.into(),
            ComposeError::Transform(transform_err) => transform_err.into(),
        }
    }
}

impl From<DecodeError> for AppError {
    fn from(err: DecodeError) -> Self {
        tracing::warn!(error = %err, "base image decode failed");
        AppError::DecodeFailed(err.to_string())
    }
}

impl From<TransformError> for AppError {
    fn from(err: TransformError) -> Self {
        match err {
            TransformError::InvalidPlacement(msg) | TransformError::ProcessingFailed(msg) => {
                tracing::error!(error = %msg, "image processing failed");
                AppError::Internal(msg)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::DecodeFailed(details) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": DECODE_FAILED_MESSAGE, "details": details }),
            ),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error": "internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compose_core::{AssetStore, decode_base64_image, encode_base64_png};
    use image::{Rgba, RgbaImage};

    use crate::model::OverlayRequest;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = health().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_compose_success() {
        let dir = tempfile::tempdir().unwrap();
        RgbaImage::from_pixel(50, 50, Rgba([0, 0, 255, 255]))
            .save(dir.path().join("badge.png"))
            .unwrap();
        let state = AppState {
            assets: AssetStore::new(dir.path()),
        };
        let base = RgbaImage::from_pixel(100, 100, Rgba([255, 0, 0, 255]));
        let request = ComposeRequest {
            imagens: vec![
                OverlayRequest {
                    image: "badge".to_string(),
                    x: 80,
                    y: 80,
                },
                OverlayRequest {
                    image: "missing".to_string(),
                    x: 0,
                    y: 0,
                },
            ],
            image_b64: encode_base64_png(&base).unwrap(),
        };

        let Json(response) = compose(State(state), Json(request)).await.unwrap();

        assert_eq!((response.width, response.height), (100, 100));
        let img = decode_base64_image(&response.image_b64).unwrap();
        assert_eq!(img.get_pixel(10, 10), &Rgba([255, 0, 0, 255]));
        assert!(img.get_pixel(90, 90)[2] > 250);
    }

    #[tokio::test]
    async fn test_compose_invalid_base64() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState {
            assets: AssetStore::new(dir.path()),
        };
        let request = ComposeRequest {
            imagens: Vec::new(),
            image_b64: "%%% not base64 %%%".to_string(),
        };

        let err = compose(State(state), Json(request)).await.unwrap_err();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], DECODE_FAILED_MESSAGE);
        assert!(body["details"].as_str().unwrap().contains("base64"));
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let err = AppError::Internal("secret detail".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "error": "internal server error" }));
    }
}
