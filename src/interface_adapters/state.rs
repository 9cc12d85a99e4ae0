use crate::domain::ports::SpatialIndexer;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    // Any indexer implementation can be injected; production uses `H3oIndexer`.
    pub indexer: Arc<dyn SpatialIndexer>,
}
