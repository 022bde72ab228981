/// ベース画像の最大ピクセル数（RGBA 展開後 400MB まで）
pub const MAX_PIXELS: u64 = 100_000_000;

/// オーバーレイ素材の拡張子
pub const ASSET_EXTENSION: &str = "png";

/// 素材名の最大長
pub const MAX_ASSET_NAME_LEN: usize = 128;
