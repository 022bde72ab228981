pub mod name;
pub mod placement;

pub use name::validate_asset_name;
pub use placement::validate_placement;
