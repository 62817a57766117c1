use geometry::GeometryError;
use quadtree::QuadtreeError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CollisionError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Quadtree(#[from] QuadtreeError),
}

pub type CollisionResult<T> = Result<T, CollisionError>;
