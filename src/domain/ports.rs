use std::sync::Arc;

use crate::domain::coordinates::{Coordinate, Resolution};
use crate::domain::errors::IndexerError;

// Port for the external hexagonal grid library.
// The use case depends on this trait, not on a concrete library binding.
pub trait SpatialIndexer: Send + Sync {
    fn index(
        &self,
        coordinate: Coordinate,
        resolution: Resolution,
    ) -> Result<String, IndexerError>;
}

// Shared indexers (e.g. held in app state) satisfy the port directly.
impl<T> SpatialIndexer for Arc<T>
where
    T: SpatialIndexer + ?Sized,
{
    fn index(
        &self,
        coordinate: Coordinate,
        resolution: Resolution,
    ) -> Result<String, IndexerError> {
        (**self).index(coordinate, resolution)
    }
}
