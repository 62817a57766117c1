use crate::error::{GeometryError, GeometryResult};
use crate::rectangle::Rectangle;
use crate::vector::{rotate, Vector};

/// Axis-aligned ellipse centered on `pos`. A circle when `ratio` is 1:1.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    pos: Vector,
    radius: f32,
    radius_vector: Vector,
    radius_sq: Vector,
    ratio: Vector,
    bounds: Rectangle,
}

impl Ellipse {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> GeometryResult<Self> {
        let mut ellipse = Self {
            pos: Vector::zeros(),
            radius: 0.0,
            radius_vector: Vector::zeros(),
            radius_sq: Vector::zeros(),
            ratio: Vector::zeros(),
            bounds: Rectangle::default(),
        };
        ellipse.set_shape(x, y, width, height)?;
        Ok(ellipse)
    }

    pub fn circle(x: f32, y: f32, radius: f32) -> GeometryResult<Self> {
        Self::new(x, y, radius * 2.0, radius * 2.0)
    }

    pub fn set_shape(&mut self, x: f32, y: f32, width: f32, height: f32) -> GeometryResult<()> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(GeometryError::InvalidEllipseDims { width, height });
        }
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        self.pos = Vector::new(x, y);
        self.radius = half_w.max(half_h);
        self.ratio = Vector::new(half_w / self.radius, half_h / self.radius);
        self.radius_vector = self.ratio * self.radius;
        self.radius_sq = self.radius_vector.component_mul(&self.radius_vector);
        self.update_bounds();
        Ok(())
    }

    pub fn pos(&self) -> Vector {
        self.pos
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn radius_vector(&self) -> Vector {
        self.radius_vector
    }

    pub fn ratio(&self) -> Vector {
        self.ratio
    }

    pub fn is_circle(&self) -> bool {
        self.ratio.x == self.ratio.y
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn shift(&mut self, pos: Vector) {
        self.pos = pos;
        self.update_bounds();
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.pos += Vector::new(dx, dy);
        self.update_bounds();
    }

    /// Rotates the center around the owning body's origin. The ellipse itself
    /// stays axis aligned.
    pub fn rotate(&mut self, angle: f32) {
        self.pos = rotate(&self.pos, angle);
        self.update_bounds();
    }

    pub fn scale(&mut self, x: f32, y: f32) -> GeometryResult<()> {
        let width = self.radius_vector.x * 2.0 * x;
        let height = self.radius_vector.y * 2.0 * y;
        self.set_shape(self.pos.x, self.pos.y, width, height)
    }

    pub fn update_bounds(&mut self) -> Rectangle {
        self.bounds = Rectangle::new(
            self.pos.x - self.radius_vector.x,
            self.pos.y - self.radius_vector.y,
            self.radius_vector.x * 2.0,
            self.radius_vector.y * 2.0,
        );
        self.bounds
    }

    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        let x = x - self.pos.x;
        let y = y - self.pos.y;
        (x * x) / self.radius_sq.x + (y * y) / self.radius_sq.y <= 1.0
    }
}
