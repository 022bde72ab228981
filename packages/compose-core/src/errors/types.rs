use thiserror::Error;

/// 合成処理の統合エラー型
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("transform error: {0}")]
    Transform(#[from] TransformError),
}

/// ベース画像のデコードエラー
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("unrecognized image data: {0}")]
    Image(#[from] image::ImageError),

    #[error("image resolution exceeds maximum ({width}x{height})")]
    ResolutionTooLarge { width: u32, height: u32 },
}

/// オーバーレイ素材の取得エラー
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("invalid asset name: {0}")]
    InvalidName(String),

    #[error("asset not found: {name}")]
    NotFound { name: String },

    #[error("failed to load asset {name}: {source}")]
    Load {
        name: String,
        #[source]
        source: image::ImageError,
    },
}

/// 画像変換エラー
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("invalid placement: {0}")]
    InvalidPlacement(String),

    #[error("processing failed: {0}")]
    ProcessingFailed(String),
}
