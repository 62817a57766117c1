use geometry::Rectangle;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuadtreeError {
    #[error(
        "quadtree bounds must be finite with non-negative size (x: {x}, y: {y}, width: {width}, height: {height})"
    )]
    InvalidBounds {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

pub(crate) fn validate_bounds(bounds: &Rectangle) -> QuadtreeResult<()> {
    if !bounds.is_valid() {
        return Err(QuadtreeError::InvalidBounds {
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
        });
    }
    Ok(())
}
