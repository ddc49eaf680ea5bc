pub mod constants;
pub mod coordinates;
pub mod timing;

pub use constants::*;
pub use coordinates::{decode_latitude, decode_location, decode_longitude, encode_location};
pub use timing::format_elapsed;
