use std::path::PathBuf;

use image::RgbaImage;

use crate::constants::ASSET_EXTENSION;
use crate::errors::AssetError;
use crate::validation::validate_asset_name;

/// オーバーレイ素材ストア
///
/// 起動時に与えられたディレクトリから `<name>.png` を名前で読み出す。
/// 素材は読み取り専用で、リクエスト間で共有しても調停は不要。
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    /// 新しい AssetStore を作成する
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 素材名からファイルパスを解決する
    pub fn path_for(&self, name: &str) -> Result<PathBuf, AssetError> {
        validate_asset_name(name)?;
        Ok(self.root.join(format!("{name}.{ASSET_EXTENSION}")))
    }

    /// 名前を指定して素材を読み込み、RGBA に変換する
    pub fn load(&self, name: &str) -> Result<RgbaImage, AssetError> {
        let path = self.path_for(name)?;

        if !path.is_file() {
            return Err(AssetError::NotFound {
                name: name.to_string(),
            });
        }

        let img = image::open(&path).map_err(|source| AssetError::Load {
            name: name.to_string(),
            source,
        })?;

        tracing::debug!(asset = %name, width = img.width(), height = img.height(), "asset loaded");

        Ok(img.to_rgba8())
    }
}
