use crate::error::{GeometryError, GeometryResult};
use crate::polygon::{compute_edges_and_normals, points_bounds};
use crate::rectangle::Rectangle;
use crate::transform::Transform2d;
use crate::vector::{rotate, Vector};

/// A line segment: a degenerate polygon with two points and a single edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pos: Vector,
    points: Vec<Vector>,
    edges: Vec<Vector>,
    normals: Vec<Vector>,
    bounds: Rectangle,
}

impl Line {
    pub fn new(pos: Vector, start: Vector, end: Vector) -> Self {
        let mut line = Self {
            pos,
            points: vec![start, end],
            edges: Vec::with_capacity(1),
            normals: Vec::with_capacity(1),
            bounds: Rectangle::default(),
        };
        line.recalc();
        line
    }

    pub fn from_points(pos: Vector, points: &[Vector]) -> GeometryResult<Self> {
        match points {
            [start, end] => Ok(Self::new(pos, *start, *end)),
            _ => Err(GeometryError::InvalidLinePoints {
                count: points.len(),
            }),
        }
    }

    pub fn pos(&self) -> Vector {
        self.pos
    }

    pub fn start(&self) -> Vector {
        self.points[0]
    }

    pub fn end(&self) -> Vector {
        self.points[1]
    }

    pub fn points(&self) -> &[Vector] {
        &self.points
    }

    pub fn edges(&self) -> &[Vector] {
        &self.edges
    }

    pub fn normals(&self) -> &[Vector] {
        &self.normals
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

    pub fn rotate(&mut self, angle: f32) {
        for point in &mut self.points {
            *point = rotate(point, angle);
        }
        self.recalc();
    }

    pub fn scale(&mut self, x: f32, y: f32) {
        for point in &mut self.points {
            point.x *= x;
            point.y *= y;
        }
        self.recalc();
    }

    pub fn transform(&mut self, transform: &Transform2d) {
        for point in &mut self.points {
            *point = transform.apply(point);
        }
        self.recalc();
    }

    pub fn recalc(&mut self) {
        compute_edges_and_normals(&self.points, false, &mut self.edges, &mut self.normals);
        self.update_bounds();
    }

    pub fn update_bounds(&mut self) -> Rectangle {
        self.bounds = points_bounds(&self.pos, &self.points);
        self.bounds
    }

    /// True if `(x, y)` lies on the segment, using the cross product of the
    /// segment direction and the point offset.
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        if !self.bounds.contains_point(x, y) {
            return false;
        }
        let start = self.start();
        let end = self.end();
        let x = x - self.pos.x;
        let y = y - self.pos.y;
        let direction = end - start;
        let offset = Vector::new(x - start.x, y - start.y);
        let cross = direction.x * offset.y - direction.y * offset.x;
        let tolerance = f32::EPSILON * 4.0 * direction.norm().max(1.0) * offset.norm().max(1.0);
        cross.abs() <= tolerance
    }
}
