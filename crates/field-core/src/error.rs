use thiserror::Error;

/// Configuration problems detected before any generation or rendering work.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("particle count must be at least 1")]
    EmptyField,
    #[error("particle count {0} exceeds the limit of {1}")]
    FieldTooLarge(usize, usize),
    #[error("palette must contain at least one hue")]
    EmptyPalette,
    #[error("inner radius must be finite and non-negative, got {0}")]
    InvalidRadius(f32),
    #[error("radius spread must be finite and positive, got {0}")]
    InvalidSpread(f32),
    #[error("connection distance must be finite and positive, got {0}")]
    InvalidConnectDistance(f32),
    #[error("camera smoothing must be in (0, 1], got {0}")]
    InvalidSmoothing(f32),
    #[error("minimum viewport width must be finite and non-negative, got {0}")]
    InvalidMinWidth(f64),
}
