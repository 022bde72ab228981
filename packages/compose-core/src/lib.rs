pub mod assets;
pub mod constants;
pub mod errors;
pub mod transform;
pub mod validation;

// 公開API
pub use assets::AssetStore;
pub use constants::{ASSET_EXTENSION, MAX_ASSET_NAME_LEN, MAX_PIXELS};
pub use errors::{AssetError, ComposeError, DecodeError, TransformError};
pub use transform::{
    alpha_composite, available_area, calculate_fit_dimensions, decode_base64_image, decode_image,
    encode_base64_png, encode_png, resize_image,
};
pub use validation::{validate_asset_name, validate_placement};
