use std::fmt;

// Query parameters that carry a validated range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    Latitude,
    Longitude,
    Resolution,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let range = match self {
            Parameter::Latitude => "latitude value (must be between -90 and 90)",
            Parameter::Longitude => "longitude value (must be between -180 and 180)",
            Parameter::Resolution => "resolution value (must be integer between 0 and 15)",
        };
        f.write_str(range)
    }
}

// Domain-level errors for the index conversion workflow.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("Missing required parameters: lat, lng, resolution")]
    MissingParameter,
    #[error("Invalid {0}")]
    InvalidParameter(Parameter),
    #[error("Invalid query string: {0}")]
    MalformedQuery(String),
    #[error("Internal server error")]
    Internal(String),
}

// Failure reported by a spatial indexer implementation.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct IndexerError(pub String);

impl From<IndexerError> for IndexError {
    fn from(err: IndexerError) -> Self {
        IndexError::Internal(err.0)
    }
}
