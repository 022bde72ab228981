use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;

use crate::errors::TransformError;

/// RGBA 画像をリサイズする
///
/// fast_image_resize を使用して高品質なリサイズを行う
/// Lanczos3 フィルタを使用し、アルファ乗算済みで補間するため縁ににじみが出ない
pub fn resize_image(
    img: &RgbaImage,
    target_w: u32,
    target_h: u32,
) -> Result<RgbaImage, TransformError> {
    if target_w == 0 || target_h == 0 {
        return Err(TransformError::ProcessingFailed(format!(
            "invalid resize target {target_w}x{target_h}"
        )));
    }

    let (width, height) = img.dimensions();

    // fast_image_resize の Image を作成
    let src_image = Image::from_vec_u8(width, height, img.as_raw().clone(), PixelType::U8x4)
        .map_err(|e| {
            TransformError::ProcessingFailed(format!("failed to create source image: {e}"))
        })?;

    // リサイズ先の Image を作成
    let mut dst_image = Image::new(target_w, target_h, PixelType::U8x4);

    let mut resizer = Resizer::new();
    resizer
        .resize(
            &src_image,
            &mut dst_image,
            &ResizeOptions::new()
                .resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3))
                .use_alpha(true),
        )
        .map_err(|e| TransformError::ProcessingFailed(format!("resize failed: {e}")))?;

    RgbaImage::from_raw(target_w, target_h, dst_image.into_vec()).ok_or_else(|| {
        TransformError::ProcessingFailed("failed to convert resized image".to_string())
    })
}
