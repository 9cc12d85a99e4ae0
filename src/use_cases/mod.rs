// Use cases layer: application workflows for the index service.

pub mod index_coordinates;
#[cfg(test)]
pub mod test_support;

pub use index_coordinates::{IndexCoordinatesRequest, IndexCoordinatesUseCase};
