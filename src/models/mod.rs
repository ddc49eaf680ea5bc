pub mod location;
pub mod table;

pub use location::{GeoLocation, GeoRecord, LocatedTable};
pub use table::RowTable;
