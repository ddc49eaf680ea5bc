pub mod coordinate_extractor;

pub use coordinate_extractor::CoordinateExtractor;
