use image::RgbaImage;
use image::imageops;

/// オーバーレイをベース画像の (x, y) にアルファ合成する（source-over）
///
/// キャンバスからはみ出す部分は切り捨てられる。ベース画像の寸法は変わらない。
pub fn alpha_composite(base: &mut RgbaImage, overlay: &RgbaImage, x: i64, y: i64) {
    imageops::overlay(base, overlay, x, y);
}
