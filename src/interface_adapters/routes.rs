use crate::interface_adapters::handlers::index_coordinates;
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::get};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/h3", get(index_coordinates))
        .with_state(state)
}
