use crate::errors::TransformError;

/// 配置座標を検証する（原点は左上、負の座標は不可）
pub fn validate_placement(x: i64, y: i64) -> Result<(), TransformError> {
    if x < 0 {
        return Err(TransformError::InvalidPlacement(format!(
            "x must be non-negative, got {x}"
        )));
    }

    if y < 0 {
        return Err(TransformError::InvalidPlacement(format!(
            "y must be non-negative, got {y}"
        )));
    }

    Ok(())
}
