mod types;

pub use types::{AssetError, ComposeError, DecodeError, TransformError};
