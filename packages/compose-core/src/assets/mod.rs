pub mod store;

pub use crate::errors::AssetError;
pub use store::AssetStore;
