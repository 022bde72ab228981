use image::RgbaImage;

use compose_core::{
    AssetError, AssetStore, ComposeError, alpha_composite, available_area,
    calculate_fit_dimensions, decode_base64_image, encode_base64_png, resize_image,
    validate_placement,
};

use crate::model::{ComposeRequest, ComposeResponse, OverlayRequest};

/// オーバーレイ1件の処理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayOutcome {
    /// 合成済み（width/height は合成時の寸法）
    Applied { width: u32, height: u32, scaled: bool },
    /// 素材ファイルが存在しない
    Missing,
    /// 配置位置がキャンバス外
    OutsideCanvas,
    /// 素材名・座標の検証に失敗
    Rejected(String),
    /// 素材の読み込み・リサイズに失敗
    Failed(String),
}

/// 合成結果
#[derive(Debug)]
pub struct Composition {
    pub image_b64: String,
    pub width: u32,
    pub height: u32,
    /// リクエスト順のオーバーレイ処理結果
    pub outcomes: Vec<OverlayOutcome>,
}

impl From<Composition> for ComposeResponse {
    fn from(composition: Composition) -> Self {
        Self {
            image_b64: composition.image_b64,
            width: composition.width,
            height: composition.height,
        }
    }
}

/// ベース画像にオーバーレイを順に重ね、PNG (base64) として返す。
///
/// ベース画像のデコード失敗のみがエラーとなる。オーバーレイ単位の失敗は
/// `OverlayOutcome` に記録してスキップし、処理を続行する。
pub fn compose_image(
    request: &ComposeRequest,
    assets: &AssetStore,
) -> Result<Composition, ComposeError> {
    let mut base = decode_base64_image(&request.image_b64)?;
    let (width, height) = base.dimensions();

    let outcomes: Vec<OverlayOutcome> = request
        .imagens
        .iter()
        .map(|overlay| {
            let outcome = apply_overlay(&mut base, overlay, assets);
            log_outcome(overlay, &outcome);
            outcome
        })
        .collect();

    let image_b64 = encode_base64_png(&base)?;

    Ok(Composition {
        image_b64,
        width,
        height,
        outcomes,
    })
}

/// オーバーレイ1件をベース画像に合成する
fn apply_overlay(
    base: &mut RgbaImage,
    overlay: &OverlayRequest,
    assets: &AssetStore,
) -> OverlayOutcome {
    if let Err(e) = validate_placement(overlay.x, overlay.y) {
        return OverlayOutcome::Rejected(e.to_string());
    }

    let asset = match assets.load(&overlay.image) {
        Ok(asset) => asset,
        Err(AssetError::NotFound { .. }) => return OverlayOutcome::Missing,
        Err(e @ AssetError::InvalidName(_)) => return OverlayOutcome::Rejected(e.to_string()),
        Err(e @ AssetError::Load { .. }) => return OverlayOutcome::Failed(e.to_string()),
    };

    let (base_w, base_h) = base.dimensions();
    let Some((avail_w, avail_h)) = available_area(base_w, base_h, overlay.x, overlay.y) else {
        return OverlayOutcome::OutsideCanvas;
    };

    // 収まらない場合は縦横比を維持して縮小（拡大はしない）
    let (src_w, src_h) = asset.dimensions();
    let (dst_w, dst_h) = calculate_fit_dimensions(src_w, src_h, avail_w, avail_h);
    let scaled = (dst_w, dst_h) != (src_w, src_h);

    let asset = if scaled {
        match resize_image(&asset, dst_w, dst_h) {
            Ok(resized) => resized,
            Err(e) => return OverlayOutcome::Failed(e.to_string()),
        }
    } else {
        asset
    };

    alpha_composite(base, &asset, overlay.x, overlay.y);

    OverlayOutcome::Applied {
        width: dst_w,
        height: dst_h,
        scaled,
    }
}

fn log_outcome(overlay: &OverlayRequest, outcome: &OverlayOutcome) {
    let (name, x, y) = (&overlay.image, overlay.x, overlay.y);
    match outcome {
        OverlayOutcome::Applied {
            width,
            height,
            scaled,
        } => {
            tracing::debug!(asset = %name, x, y, width, height, scaled, "overlay applied");
        }
        OverlayOutcome::Missing => {
            tracing::debug!(asset = %name, "overlay asset not found, skipping");
        }
        OverlayOutcome::OutsideCanvas => {
            tracing::debug!(asset = %name, x, y, "overlay outside canvas, skipping");
        }
        OverlayOutcome::Rejected(reason) => {
            tracing::warn!(asset = %name, x, y, error = %reason, "overlay rejected");
        }
        OverlayOutcome::Failed(reason) => {
            tracing::warn!(asset = %name, error = %reason, "failed to apply overlay");
        }
    }
}
