pub mod composite;
pub mod decode;
pub mod dimensions;
pub mod encode;
pub mod resize;

pub use composite::alpha_composite;
pub use decode::{decode_base64_image, decode_image};
pub use dimensions::{available_area, calculate_fit_dimensions};
pub use encode::{encode_base64_png, encode_png};
pub use resize::resize_image;
