use crate::domain::coordinates::{Coordinate, Latitude, Longitude, Resolution};
use crate::domain::errors::IndexError;
use crate::domain::ports::SpatialIndexer;

// Raw, unvalidated values as they arrive from the query string.
#[derive(Debug, Default, Clone)]
pub struct IndexCoordinatesRequest {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub resolution: Option<String>,
}

// Coordinate-to-cell conversion with an injected indexer.
pub struct IndexCoordinatesUseCase<I> {
    pub indexer: I,
}

impl<I> IndexCoordinatesUseCase<I>
where
    I: SpatialIndexer,
{
    pub fn execute(&self, request: IndexCoordinatesRequest) -> Result<String, IndexError> {
        // Presence is checked on the raw strings so "0" is never treated as missing.
        let (Some(lat), Some(lng), Some(resolution)) = (
            present(request.lat.as_deref()),
            present(request.lng.as_deref()),
            present(request.resolution.as_deref()),
        ) else {
            return Err(IndexError::MissingParameter);
        };

        let coordinate = Coordinate {
            latitude: Latitude::parse(lat)?,
            longitude: Longitude::parse(lng)?,
        };
        let resolution = Resolution::parse(resolution)?;

        let index = self.indexer.index(coordinate, resolution)?;
        Ok(index)
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|raw| !raw.trim().is_empty())
}
