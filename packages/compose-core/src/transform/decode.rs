use std::io::Cursor;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use image::{DynamicImage, ImageDecoder, ImageReader, Limits, RgbaImage};

use crate::constants::MAX_PIXELS;
use crate::errors::DecodeError;

/// base64 テキストをデコードし、RGBA 画像として返す
///
/// 改行などの ASCII 空白は無視する。
pub fn decode_base64_image(text: &str) -> Result<RgbaImage, DecodeError> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let data = BASE64.decode(compact.as_bytes())?;
    decode_image(&data)
}

/// 画像バイト列をデコードし、RGBA 画像として返す
///
/// フォーマットは内容から推測する。ピクセルデータを展開する前に
/// ヘッダの寸法で総ピクセル数を検証する。
pub fn decode_image(data: &[u8]) -> Result<RgbaImage, DecodeError> {
    let mut reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(image::ImageError::from)?;

    // 寸法の検証を先に行うため、ヘッダ読み込み時点では制限を外す
    reader.no_limits();
    let mut decoder = reader.into_decoder()?;

    let (width, height) = decoder.dimensions();
    validate_source_dimensions(width, height)?;

    decoder.set_limits(Limits::default())?;
    let img = DynamicImage::from_decoder(decoder)?;

    Ok(img.to_rgba8())
}

/// ソース画像の総ピクセル数を検証し、メモリ枯渇を防ぐ
fn validate_source_dimensions(width: u32, height: u32) -> Result<(), DecodeError> {
    if width as u64 * height as u64 > MAX_PIXELS {
        return Err(DecodeError::ResolutionTooLarge { width, height });
    }
    Ok(())
}
