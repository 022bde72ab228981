use crate::constants::MAX_ASSET_NAME_LEN;
use crate::errors::AssetError;

/// 素材名を検証する
///
/// 素材ディレクトリの外を参照できないよう、ファイル名として安全な文字のみ許可する
pub fn validate_asset_name(name: &str) -> Result<(), AssetError> {
    if name.is_empty() {
        return Err(AssetError::InvalidName("name is empty".to_string()));
    }

    if name.len() > MAX_ASSET_NAME_LEN {
        return Err(AssetError::InvalidName(format!(
            "name is too long (max {MAX_ASSET_NAME_LEN})"
        )));
    }

    // パストラバーサル防止
    if name.contains("..") {
        return Err(AssetError::InvalidName("path traversal detected".to_string()));
    }

    // 許可された文字のみ（英数字、ハイフン、アンダースコア、ドット）
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
    {
        return Err(AssetError::InvalidName(format!(
            "invalid characters in name: {name}"
        )));
    }

    Ok(())
}
