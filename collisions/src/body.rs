use crate::collision_type::CollisionType;
use crate::error::CollisionResult;
use crate::response::CollisionResponse;
use geometry::{Rectangle, Shape, Vector};

/// Physical state of a collidable object: its shapes plus simple
/// velocity-based kinematics.
#[derive(Debug, Clone)]
pub struct Body {
    /// Absolute world position of the owner. Shape positions are relative to it.
    pub position: Vector,
    pub velocity: Vector,
    pub acceleration: Vector,
    pub friction: Vector,
    pub max_velocity: Vector,
    pub gravity_scale: f32,
    pub collision_type: CollisionType,
    pub collision_mask: CollisionType,
    pub falling: bool,
    pub jumping: bool,
    is_static: bool,
    shapes: Vec<Shape>,
    bounds: Rectangle,
}

impl Body {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vector::new(x, y),
            velocity: Vector::zeros(),
            acceleration: Vector::zeros(),
            friction: Vector::zeros(),
            max_velocity: Vector::new(f32::MAX, f32::MAX),
            gravity_scale: 1.0,
            collision_type: CollisionType::default(),
            collision_mask: CollisionType::ALL,
            falling: false,
            jumping: false,
            is_static: false,
            shapes: Vec::new(),
            bounds: Rectangle::default(),
        }
    }

    pub fn with_shape(mut self, shape: impl Into<Shape>) -> Self {
        self.add_shape(shape);
        self
    }

    /// Adds a shape (rectangles become polygons) and returns the new shape count.
    pub fn add_shape(&mut self, shape: impl Into<Shape>) -> usize {
        self.shapes.push(shape.into());
        self.update_bounds();
        self.shapes.len()
    }

    pub fn remove_shape(&mut self, index: usize) -> Option<Shape> {
        if index >= self.shapes.len() {
            return None;
        }
        let shape = self.shapes.remove(index);
        self.update_bounds();
        Some(shape)
    }

    pub fn shape(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Union of the shape bounds, relative to `position`.
    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn world_bounds(&self) -> Rectangle {
        self.bounds.translated(&self.position)
    }

    pub fn update_bounds(&mut self) -> Rectangle {
        let mut shapes = self.shapes.iter();
        self.bounds = match shapes.next() {
            Some(first) => shapes.fold(first.bounds(), |acc, shape| acc.union(&shape.bounds())),
            None => Rectangle::default(),
        };
        self.bounds
    }

    pub fn rotate(&mut self, angle: f32) {
        for shape in &mut self.shapes {
            shape.rotate(angle);
        }
        self.update_bounds();
    }

    pub fn scale(&mut self, x: f32, y: f32) -> CollisionResult<()> {
        for shape in &mut self.shapes {
            shape.scale(x, y)?;
        }
        self.update_bounds();
        Ok(())
    }

    /// `(x, y)` in world coordinates.
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        let x = x - self.position.x;
        let y = y - self.position.y;
        self.bounds.contains_point(x, y) && self.shapes.iter().any(|s| s.contains_point(x, y))
    }

    pub fn set_collision_type(&mut self, collision_type: CollisionType) {
        self.collision_type = collision_type;
    }

    pub fn set_collision_mask(&mut self, collision_mask: CollisionType) {
        self.collision_mask = collision_mask;
    }

    pub fn set_velocity(&mut self, x: f32, y: f32) {
        self.velocity = Vector::new(x, y);
    }

    pub fn set_max_velocity(&mut self, x: f32, y: f32) {
        self.max_velocity = Vector::new(x, y);
    }

    pub fn set_friction(&mut self, x: f32, y: f32) {
        self.friction = Vector::new(x, y);
    }

    pub fn set_static(&mut self, is_static: bool) {
        self.is_static = is_static;
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Both sides must list the other's category in their mask.
    pub fn should_collide(&self, other: &Body) -> bool {
        self.collision_mask.intersects(other.collision_type)
            && other.collision_mask.intersects(self.collision_type)
    }

    /// Integrates one step of `dt` and returns whether the body moved.
    pub fn update(&mut self, dt: f32, gravity: &Vector) -> bool {
        if self.is_static {
            return false;
        }
        self.velocity += self.acceleration * dt;
        if self.friction.x != 0.0 || self.friction.y != 0.0 {
            self.apply_friction(dt);
        }
        self.velocity += *gravity * (self.gravity_scale * dt);

        let gravity_sign = if gravity.y < 0.0 { -1.0 } else { 1.0 };
        self.falling = self.velocity.y * gravity_sign > 0.0;
        self.jumping = self.jumping && !self.falling;

        self.velocity.x = limit(self.velocity.x, self.max_velocity.x);
        self.velocity.y = limit(self.velocity.y, self.max_velocity.y);

        self.position += self.velocity * dt;
        self.velocity.x != 0.0 || self.velocity.y != 0.0
    }

    // Friction pulls each velocity component toward zero without overshooting.
    fn apply_friction(&mut self, dt: f32) {
        self.velocity.x = damp(self.velocity.x, self.friction.x * dt);
        self.velocity.y = damp(self.velocity.y, self.friction.y * dt);
    }

    /// Default reaction to a collision seen from this body's side: move out of
    /// the overlap and stop along the axes that were hit.
    pub fn respond_to_collision(&mut self, response: &CollisionResponse) {
        if self.is_static {
            return;
        }
        let overlap = response.overlap_vector;
        self.position -= overlap;

        if overlap.x != 0.0 {
            self.velocity.x = 0.0;
        }
        if overlap.y != 0.0 {
            self.velocity.y = 0.0;
            if overlap.y > 0.0 {
                // landed on something
                self.falling = false;
            }
            self.jumping = false;
        }
    }
}

fn limit(value: f32, max: f32) -> f32 {
    value.max(-max).min(max)
}

fn damp(value: f32, amount: f32) -> f32 {
    let pushed = value + amount;
    let pulled = value - amount;
    if pushed < 0.0 {
        pushed
    } else if pulled > 0.0 {
        pulled
    } else {
        0.0
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
