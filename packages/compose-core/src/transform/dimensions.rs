/// 縮小倍率を計算する（拡大しない）
///
/// アスペクト比を維持しつつ利用可能領域に収まる最大の倍率を返す（最大1.0）
fn calculate_scale_factor(src_w: u32, src_h: u32, avail_w: u32, avail_h: u32) -> f64 {
    let scale_w = avail_w as f64 / src_w as f64;
    let scale_h = avail_h as f64 / src_h as f64;

    scale_w.min(scale_h).min(1.0)
}

/// 倍率を適用して新しい寸法を計算する（切り捨て）
fn apply_scale(src_w: u32, src_h: u32, scale: f64) -> (u32, u32) {
    // 浮動小数点誤差で 19.999… が 19 にならないよう僅かに補正
    let new_w = (src_w as f64 * scale + 1e-9).floor() as u32;
    let new_h = (src_h as f64 * scale + 1e-9).floor() as u32;

    // 最小1pxを保証
    (new_w.max(1), new_h.max(1))
}

/// 配置位置 (x, y) から見たベース画像上の利用可能領域を返す
///
/// 領域がない（オーバーレイが完全にキャンバス外）場合は None
pub fn available_area(base_w: u32, base_h: u32, x: i64, y: i64) -> Option<(u32, u32)> {
    let avail_w = (base_w as i64).saturating_sub(x);
    let avail_h = (base_h as i64).saturating_sub(y);

    if avail_w <= 0 || avail_h <= 0 {
        return None;
    }

    Some((avail_w.min(base_w as i64) as u32, avail_h.min(base_h as i64) as u32))
}

/// 利用可能領域に収まるオーバーレイの寸法を計算する
///
/// 収まる場合は元の寸法を返す。縮小時も各辺は利用可能領域を超えない。
pub fn calculate_fit_dimensions(
    src_w: u32,
    src_h: u32,
    avail_w: u32,
    avail_h: u32,
) -> (u32, u32) {
    if src_w == 0 || src_h == 0 {
        return (src_w, src_h);
    }

    let scale = calculate_scale_factor(src_w, src_h, avail_w, avail_h);
    if scale >= 1.0 {
        return (src_w, src_h);
    }

    let (w, h) = apply_scale(src_w, src_h, scale);
    (w.min(avail_w.max(1)), h.min(avail_h.max(1)))
}
