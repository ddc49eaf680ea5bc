pub mod scatter;

pub use scatter::ScatterPlotter;
