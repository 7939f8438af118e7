use thiserror::Error;

/// Errors raised by the checked entry points of the core.
#[derive(Debug, Error)]
pub enum Error {
    #[error("bounding volume requires at least one point")]
    EmptyGeometry,
    #[error("bounding volume has no extent (max size {0})")]
    DegenerateVolume(f64),
    #[error("field of view must be within (0, 180) degrees, got {0}")]
    InvalidFieldOfView(f64),
    #[error("camera margin must be positive, got {0}")]
    InvalidMargin(f64),
    #[error("malformed response payload: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
