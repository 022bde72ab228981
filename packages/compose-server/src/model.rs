use serde::{Deserialize, Serialize};

/// `POST /compose` のリクエストボディ
#[derive(Debug, Clone, Deserialize)]
pub struct ComposeRequest {
    /// 合成するオーバーレイ（この順で重ねる）
    pub imagens: Vec<OverlayRequest>,
    /// ベース画像（base64）
    pub image_b64: String,
}

/// オーバーレイ1件の指定
#[derive(Debug, Clone, Deserialize)]
pub struct OverlayRequest {
    /// 素材名（拡張子なし）
    pub image: String,
    pub x: i64,
    pub y: i64,
}

/// `POST /compose` の成功レスポンス
#[derive(Debug, Clone, Serialize)]
pub struct ComposeResponse {
    pub image_b64: String,
    pub width: u32,
    pub height: u32,
}
