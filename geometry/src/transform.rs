use nalgebra::{Matrix3, Vector3};

use crate::vector::Vector;

/// 2D affine transform stored as a homogeneous 3x3 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2d {
    matrix: Matrix3<f32>,
}

impl Transform2d {
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    pub fn from_matrix(matrix: Matrix3<f32>) -> Self {
        Self { matrix }
    }

    pub fn translation(x: f32, y: f32) -> Self {
        Self::from_matrix(Matrix3::new(1.0, 0.0, x, 0.0, 1.0, y, 0.0, 0.0, 1.0))
    }

    pub fn scaling(x: f32, y: f32) -> Self {
        Self::from_matrix(Matrix3::new(x, 0.0, 0.0, 0.0, y, 0.0, 0.0, 0.0, 1.0))
    }

    pub fn rotation(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_matrix(Matrix3::new(cos, -sin, 0.0, sin, cos, 0.0, 0.0, 0.0, 1.0))
    }

    pub fn matrix(&self) -> &Matrix3<f32> {
        &self.matrix
    }

    pub fn is_identity(&self) -> bool {
        self.matrix == Matrix3::identity()
    }

    /// `self * other`: applies `other` first, then `self`.
    pub fn multiply(&self, other: &Transform2d) -> Transform2d {
        Self::from_matrix(self.matrix * other.matrix)
    }

    /// Applies `self` first, then `next`.
    pub fn then(&self, next: &Transform2d) -> Transform2d {
        next.multiply(self)
    }

    /// Transforms a point (translation applies).
    pub fn apply(&self, point: &Vector) -> Vector {
        let out = self.matrix * Vector3::new(point.x, point.y, 1.0);
        Vector::new(out.x, out.y)
    }

    /// Transforms a direction (translation ignored).
    pub fn apply_vector(&self, vector: &Vector) -> Vector {
        let out = self.matrix * Vector3::new(vector.x, vector.y, 0.0);
        Vector::new(out.x, out.y)
    }
}

impl Default for Transform2d {
    fn default() -> Self {
        Self::identity()
    }
}
