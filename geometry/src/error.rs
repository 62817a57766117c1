use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("polygon requires at least 3 points (got {count})")]
    TooFewPolygonPoints { count: usize },
    #[error("polygon point {index} repeats the previous point")]
    RepeatedPolygonPoint { index: usize },
    #[error("line requires exactly 2 points (got {count})")]
    InvalidLinePoints { count: usize },
    #[error(
        "rectangle width/height must be finite and non-negative (width: {width}, height: {height})"
    )]
    InvalidRectangleDims { width: f32, height: f32 },
    #[error("ellipse width/height must be finite and positive (width: {width}, height: {height})")]
    InvalidEllipseDims { width: f32, height: f32 },
}

pub type GeometryResult<T> = Result<T, GeometryError>;
