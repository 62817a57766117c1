use crate::error::{GeometryError, GeometryResult};
use crate::rectangle::Rectangle;
use crate::transform::Transform2d;
use crate::vector::{normalize_or_zero, perp, rotate, Vector};

/// Convex polygon with points relative to `pos`.
///
/// Points must be wound clockwise in y-down coordinates; the SAT tests rely on
/// the derived normals pointing outward and are only exact for convex input.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pos: Vector,
    points: Vec<Vector>,
    edges: Vec<Vector>,
    normals: Vec<Vector>,
    bounds: Rectangle,
}

impl Polygon {
    pub fn new(pos: Vector, points: Vec<Vector>) -> GeometryResult<Self> {
        validate_polygon_points(&points)?;
        let mut polygon = Self {
            pos,
            points,
            edges: Vec::new(),
            normals: Vec::new(),
            bounds: Rectangle::default(),
        };
        polygon.recalc();
        Ok(polygon)
    }

    pub(crate) fn from_box(pos: Vector, width: f32, height: f32) -> Self {
        let mut polygon = Self {
            pos,
            points: vec![
                Vector::new(0.0, 0.0),
                Vector::new(width, 0.0),
                Vector::new(width, height),
                Vector::new(0.0, height),
            ],
            edges: Vec::with_capacity(4),
            normals: Vec::with_capacity(4),
            bounds: Rectangle::default(),
        };
        polygon.recalc();
        polygon
    }

    pub fn set_shape(&mut self, pos: Vector, points: Vec<Vector>) -> GeometryResult<()> {
        validate_polygon_points(&points)?;
        self.pos = pos;
        self.points = points;
        self.recalc();
        Ok(())
    }

    pub fn set_points(&mut self, points: Vec<Vector>) -> GeometryResult<()> {
        let pos = self.pos;
        self.set_shape(pos, points)
    }

    pub fn pos(&self) -> Vector {
        self.pos
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

    /// Moves the polygon origin to `pos`, leaving its points untouched.
    pub fn shift(&mut self, pos: Vector) {
        self.pos = pos;
        self.update_bounds();
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.pos += Vector::new(dx, dy);
        self.update_bounds();
    }

    /// Rotates the points around the polygon origin.
    pub fn rotate(&mut self, angle: f32) {
        if angle == 0.0 {
            return;
        }
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

    /// Rebuilds edges, normals and bounds after the points changed.
    pub fn recalc(&mut self) {
        compute_edges_and_normals(&self.points, true, &mut self.edges, &mut self.normals);
        self.update_bounds();
    }

    pub fn update_bounds(&mut self) -> Rectangle {
        self.bounds = points_bounds(&self.pos, &self.points);
        self.bounds
    }

    /// Even-odd crossing test; `(x, y)` is in the same space as `pos`.
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        let x = x - self.pos.x;
        let y = y - self.pos.y;
        let len = self.points.len();
        let mut inside = false;
        let mut j = len - 1;
        for i in 0..len {
            let pi = self.points[i];
            let pj = self.points[j];
            if (pi.y > y) != (pj.y > y) && x < (pj.x - pi.x) * (y - pi.y) / (pj.y - pi.y) + pi.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

fn validate_polygon_points(points: &[Vector]) -> GeometryResult<()> {
    if points.len() < 3 {
        return Err(GeometryError::TooFewPolygonPoints {
            count: points.len(),
        });
    }
    // A zero-length edge has no normal to test against.
    let len = points.len();
    match (0..len).find(|&i| points[i] == points[(i + len - 1) % len]) {
        Some(index) => Err(GeometryError::RepeatedPolygonPoint { index }),
        None => Ok(()),
    }
}

/// Fills `edges` with `p[i+1] - p[i]` (wrapping around when `closed`) and
/// `normals` with the unit perpendicular of each edge.
pub(crate) fn compute_edges_and_normals(
    points: &[Vector],
    closed: bool,
    edges: &mut Vec<Vector>,
    normals: &mut Vec<Vector>,
) {
    edges.clear();
    normals.clear();
    let len = points.len();
    let edge_count = if closed { len } else { len.saturating_sub(1) };
    for i in 0..edge_count {
        let next = if i + 1 < len { i + 1 } else { 0 };
        let edge = points[next] - points[i];
        normals.push(normalize_or_zero(&perp(&edge)));
        edges.push(edge);
    }
}

pub(crate) fn points_bounds(pos: &Vector, points: &[Vector]) -> Rectangle {
    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;
    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }
    Rectangle::from_extent(min_x + pos.x, min_y + pos.y, max_x + pos.x, max_y + pos.y)
}
