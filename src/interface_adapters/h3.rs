use crate::domain::coordinates::{Coordinate, Resolution};
use crate::domain::errors::IndexerError;
use crate::domain::ports::SpatialIndexer;

// Adapter over the `h3o` hexagonal grid library.
#[derive(Debug, Clone, Copy, Default)]
pub struct H3oIndexer;

impl SpatialIndexer for H3oIndexer {
    fn index(
        &self,
        coordinate: Coordinate,
        resolution: Resolution,
    ) -> Result<String, IndexerError> {
        let lat_lng = h3o::LatLng::new(
            coordinate.latitude.degrees(),
            coordinate.longitude.degrees(),
        )
        .map_err(|err| IndexerError(err.to_string()))?;
        let resolution = h3o::Resolution::try_from(resolution.level())
            .map_err(|err| IndexerError(err.to_string()))?;

        // CellIndex renders as the canonical lower-case hex identifier.
        Ok(lat_lng.to_cell(resolution).to_string())
    }
}
