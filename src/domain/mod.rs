// Domain layer: validated inputs, error taxonomy and the indexing port.

pub mod coordinates;
pub mod errors;
pub mod ports;

pub use coordinates::{Coordinate, Latitude, Longitude, Resolution};
pub use errors::{IndexError, IndexerError, Parameter};
pub use ports::SpatialIndexer;
