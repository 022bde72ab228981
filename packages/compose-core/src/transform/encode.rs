use std::io::Cursor;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use image::{ImageFormat, RgbaImage};

use crate::errors::TransformError;

/// 画像を PNG にエンコードする
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, TransformError> {
    let mut buf = Cursor::new(Vec::new());

    img.write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| TransformError::ProcessingFailed(format!("PNG encode failed: {e}")))?;

    Ok(buf.into_inner())
}

/// 画像を PNG にエンコードし、base64 テキストとして返す
pub fn encode_base64_png(img: &RgbaImage) -> Result<String, TransformError> {
    Ok(BASE64.encode(encode_png(img)?))
}
