use axum::http::StatusCode;
use thiserror::Error;

/// Failures the tracking engine and its store boundary can produce.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid measurement: weight and height must be present and positive")]
    InvalidMeasurement,
    #[error("invalid food data: {0}")]
    InvalidFoodData(String),
    #[error("store unavailable: {0}")]
    StoreUnavailable(anyhow::Error),
    #[error("{0} not found")]
    NotFound(&'static str),
}

impl EngineError {
    pub fn status(&self) -> StatusCode {
        match self {
            EngineError::InvalidMeasurement => StatusCode::UNPROCESSABLE_ENTITY,
            EngineError::InvalidFoodData(_) => StatusCode::BAD_REQUEST,
            EngineError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            EngineError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// Handler-side shorthand, mirrors the `Result<_, (StatusCode, String)>`
/// convention used across the routers.
pub fn reject(e: EngineError) -> (StatusCode, String) {
    (e.status(), e.to_string())
}
