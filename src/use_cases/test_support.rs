use std::sync::{Arc, Mutex};

use crate::domain::coordinates::{Coordinate, Resolution};
use crate::domain::errors::IndexerError;
use crate::domain::ports::SpatialIndexer;

// Indexer stub that returns a fixed cell and records every call.
#[derive(Clone)]
pub struct RecordingIndexer {
    cell: String,
    calls: Arc<Mutex<Vec<(Coordinate, Resolution)>>>,
}

impl RecordingIndexer {
    pub fn returning(cell: &str) -> Self {
        Self {
            cell: cell.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<(Coordinate, Resolution)> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

impl SpatialIndexer for RecordingIndexer {
    fn index(
        &self,
        coordinate: Coordinate,
        resolution: Resolution,
    ) -> Result<String, IndexerError> {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push((coordinate, resolution));
        Ok(self.cell.clone())
    }
}

// Indexer stub that always fails with the given message.
#[derive(Clone, Copy)]
pub struct FailingIndexer(pub &'static str);

impl SpatialIndexer for FailingIndexer {
    fn index(&self, _: Coordinate, _: Resolution) -> Result<String, IndexerError> {
        Err(IndexerError(self.0.to_string()))
    }
}
