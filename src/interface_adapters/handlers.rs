use crate::domain::errors::IndexError;
use crate::interface_adapters::protocol::{ErrorResponse, H3IndexResponse, H3Query};
use crate::interface_adapters::state::AppState;
use crate::use_cases::index_coordinates::{IndexCoordinatesRequest, IndexCoordinatesUseCase};
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use tracing::{debug, error};

// Handler for converting a coordinate into a hexagonal cell index.
pub async fn index_coordinates(
    State(state): State<AppState>,
    query: Result<Query<H3Query>, QueryRejection>,
) -> Result<Json<H3IndexResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Query(query) = query
        .map_err(|rejection| map_index_error(IndexError::MalformedQuery(rejection.body_text())))?;

    let use_case = IndexCoordinatesUseCase {
        indexer: state.indexer.clone(),
    };

    let h3_index = use_case
        .execute(IndexCoordinatesRequest {
            lat: query.lat,
            lng: query.lng,
            resolution: query.resolution,
        })
        .map_err(map_index_error)?;

    debug!(%h3_index, "coordinate indexed");
    Ok(Json(H3IndexResponse { h3_index }))
}

// Maps domain errors to HTTP responses.
fn map_index_error(err: IndexError) -> (StatusCode, Json<ErrorResponse>) {
    let message = err.to_string();
    match err {
        IndexError::Internal(details) => {
            error!(error = %details, "failed to index coordinate");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: message,
                    details: Some(details),
                }),
            )
        }
        IndexError::MissingParameter
        | IndexError::InvalidParameter(_)
        | IndexError::MalformedQuery(_) => {
            debug!(error = %message, "rejected index request");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: message,
                    details: None,
                }),
            )
        }
    }
}
