pub mod algorithm;
pub mod markers;

pub use algorithm::segment;
pub use markers::Marker;
