//! Separating Axis Theorem narrowphase.
//!
//! Every test takes the owning bodies' absolute positions plus the shapes,
//! whose own positions are relative to those bodies. On overlap the response
//! holds the axis of least penetration, oriented so that moving A by
//! `-overlap_vector` separates the pair. Touching shapes count as colliding.

use crate::response::CollisionResponse;
use geometry::{Ellipse, Line, Polygon, Shape, Vector};

/// Borrowed view of a polygon or line placed in world space.
#[derive(Debug, Clone, Copy)]
pub struct PolygonView<'a> {
    pub pos: Vector,
    pub points: &'a [Vector],
    pub edges: &'a [Vector],
    pub normals: &'a [Vector],
    /// False for lines: the last point does not connect back to the first.
    pub closed: bool,
}

impl<'a> PolygonView<'a> {
    pub fn polygon(body_pos: &Vector, polygon: &'a Polygon) -> Self {
        Self {
            pos: body_pos + polygon.pos(),
            points: polygon.points(),
            edges: polygon.edges(),
            normals: polygon.normals(),
            closed: true,
        }
    }

    pub fn line(body_pos: &Vector, line: &'a Line) -> Self {
        Self {
            pos: body_pos + line.pos(),
            points: line.points(),
            edges: line.edges(),
            normals: line.normals(),
            closed: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VoronoiRegion {
    Left,
    Middle,
    Right,
}

// Where `point` (relative to the edge start) projects onto `edge`.
#[inline(always)]
fn voronoi_region(edge: &Vector, point: &Vector) -> VoronoiRegion {
    let len2 = edge.norm_squared();
    let dp = point.dot(edge);
    if dp < 0.0 {
        VoronoiRegion::Left
    } else if dp > len2 {
        VoronoiRegion::Right
    } else {
        VoronoiRegion::Middle
    }
}

#[inline(always)]
fn flatten_points_on(points: &[Vector], axis: &Vector) -> (f32, f32) {
    let mut min = f32::MAX;
    let mut max = -f32::MAX;
    for point in points {
        let dot = point.dot(axis);
        min = min.min(dot);
        max = max.max(dot);
    }
    (min, max)
}

/// Projects both point sets on `axis` and reports whether it separates them.
///
/// When it does not, the signed overlap along `axis` is folded into
/// `response`: the first axis with a strictly smaller absolute overlap wins,
/// and the containment flags are cleared as soon as one range sticks out of
/// the other.
pub fn is_separating_axis(
    pos_a: &Vector,
    pos_b: &Vector,
    points_a: &[Vector],
    points_b: &[Vector],
    axis: &Vector,
    response: &mut CollisionResponse,
) -> bool {
    let projected_offset = (pos_b - pos_a).dot(axis);
    let (min_a, max_a) = flatten_points_on(points_a, axis);
    let (mut min_b, mut max_b) = flatten_points_on(points_b, axis);
    min_b += projected_offset;
    max_b += projected_offset;

    if min_a > max_b || min_b > max_a {
        return true;
    }

    let overlap = if min_a < min_b {
        response.a_in_b = false;
        if max_a < max_b {
            response.b_in_a = false;
            max_a - min_b
        } else {
            shorter_escape(max_a - min_b, max_b - min_a)
        }
    } else {
        response.b_in_a = false;
        if max_a > max_b {
            response.a_in_b = false;
            min_a - max_b
        } else {
            shorter_escape(max_a - min_b, max_b - min_a)
        }
    };

    let abs_overlap = overlap.abs();
    if abs_overlap < response.overlap {
        response.overlap = abs_overlap;
        response.overlap_normal = if overlap < 0.0 { -*axis } else { *axis };
    }
    false
}

// One range nests inside the other: push out through the nearer side.
#[inline(always)]
fn shorter_escape(option1: f32, option2: f32) -> f32 {
    if option1 < option2 {
        option1
    } else {
        -option2
    }
}

pub fn test_polygon_polygon(
    a: &PolygonView<'_>,
    b: &PolygonView<'_>,
    response: &mut CollisionResponse,
) -> bool {
    // Degenerate edges (e.g. from a zero-width rectangle) have no axis.
    let axes = a.normals.iter().chain(b.normals).filter(|normal| **normal != Vector::zeros());
    for normal in axes {
        if is_separating_axis(&a.pos, &b.pos, a.points, b.points, normal, response) {
            return false;
        }
    }
    response.overlap_vector = response.overlap_normal * response.overlap;
    true
}

/// Circle test on the larger radius of each ellipse. Exact for circles only.
pub fn test_ellipse_ellipse(
    pos_a: &Vector,
    a: &Ellipse,
    pos_b: &Vector,
    b: &Ellipse,
    response: &mut CollisionResponse,
) -> bool {
    let difference = (pos_b + b.pos()) - (pos_a + a.pos());
    let radius_a = a.radius();
    let radius_b = b.radius();
    let total_radius = radius_a + radius_b;
    let distance_sq = difference.norm_squared();

    if distance_sq > total_radius * total_radius {
        return false;
    }

    let distance = distance_sq.sqrt();
    response.overlap = total_radius - distance;
    response.overlap_normal = geometry::vector::normalize_or_zero(&difference);
    response.overlap_vector = response.overlap_normal * response.overlap;
    response.a_in_b = radius_a <= radius_b && distance <= radius_b - radius_a;
    response.b_in_a = radius_b <= radius_a && distance <= radius_a - radius_b;
    true
}

/// Polygon (or line) against the circle of radius `b.radius()`, using the
/// Voronoi region of the circle center around every edge.
pub fn test_polygon_ellipse(
    a: &PolygonView<'_>,
    pos_b: &Vector,
    b: &Ellipse,
    response: &mut CollisionResponse,
) -> bool {
    let circle_pos = (pos_b + b.pos()) - a.pos;
    let radius = b.radius();
    let radius_sq = radius * radius;
    let points = a.points;
    let edges = a.edges;
    let len = edges.len();

    for i in 0..len {
        let next = if i + 1 == len { 0 } else { i + 1 };
        let prev = if i == 0 { len - 1 } else { i - 1 };
        let point = circle_pos - points[i];

        if point.norm_squared() > radius_sq {
            response.a_in_b = false;
        }

        let mut candidate: Option<(f32, Vector)> = None;
        match voronoi_region(&edges[i], &point) {
            VoronoiRegion::Left => {
                // An open end has no neighbouring edge to defer to.
                let at_vertex = (!a.closed && i == 0)
                    || voronoi_region(&edges[prev], &(circle_pos - points[prev]))
                        == VoronoiRegion::Right;
                if at_vertex {
                    let dist = point.norm();
                    if dist > radius {
                        return false;
                    }
                    response.b_in_a = false;
                    candidate = Some((radius - dist, point / dist.max(f32::MIN_POSITIVE)));
                }
            }
            VoronoiRegion::Right => {
                let end = if a.closed { next } else { i + 1 };
                let point = circle_pos - points[end];
                let at_vertex = (!a.closed && i + 1 == len)
                    || voronoi_region(&edges[next], &point) == VoronoiRegion::Left;
                if at_vertex {
                    let dist = point.norm();
                    if dist > radius {
                        return false;
                    }
                    response.b_in_a = false;
                    candidate = Some((radius - dist, point / dist.max(f32::MIN_POSITIVE)));
                }
            }
            VoronoiRegion::Middle => {
                let normal = a.normals[i];
                let dist = point.dot(&normal);
                if a.closed {
                    if dist > 0.0 && dist.abs() > radius {
                        return false;
                    }
                    let overlap = radius - dist;
                    if dist >= 0.0 || overlap < 2.0 * radius {
                        response.b_in_a = false;
                    }
                    candidate = Some((overlap, normal));
                } else {
                    // A segment has no inside: push along whichever side the
                    // center is on.
                    if dist.abs() > radius {
                        return false;
                    }
                    response.b_in_a = false;
                    let normal = if dist < 0.0 { -normal } else { normal };
                    candidate = Some((radius - dist.abs(), normal));
                }
            }
        }

        if let Some((overlap, normal)) = candidate {
            if overlap.abs() < response.overlap.abs() {
                response.overlap = overlap;
                response.overlap_normal = normal;
            }
        }
    }

    if !a.closed && (circle_pos - points[len]).norm_squared() > radius_sq {
        response.a_in_b = false;
    }

    response.overlap_vector = response.overlap_normal * response.overlap;
    true
}

/// Runs [`test_polygon_ellipse`] with the arguments swapped, then restores the
/// caller's point of view.
pub fn test_ellipse_polygon(
    pos_a: &Vector,
    a: &Ellipse,
    b: &PolygonView<'_>,
    response: &mut CollisionResponse,
) -> bool {
    let result = test_polygon_ellipse(b, pos_a, a, response);
    if result {
        response.overlap_normal = -response.overlap_normal;
        response.overlap_vector = -response.overlap_vector;
        std::mem::swap(&mut response.a_in_b, &mut response.b_in_a);
    }
    result
}

/// Dispatches to the narrowphase test for the pair of shape kinds.
pub fn test_shapes(
    pos_a: &Vector,
    shape_a: &Shape,
    pos_b: &Vector,
    shape_b: &Shape,
    response: &mut CollisionResponse,
) -> bool {
    match (shape_a, shape_b) {
        (Shape::Ellipse(a), Shape::Ellipse(b)) => test_ellipse_ellipse(pos_a, a, pos_b, b, response),
        (Shape::Ellipse(a), Shape::Polygon(b)) => {
            test_ellipse_polygon(pos_a, a, &PolygonView::polygon(pos_b, b), response)
        }
        (Shape::Ellipse(a), Shape::Line(b)) => {
            test_ellipse_polygon(pos_a, a, &PolygonView::line(pos_b, b), response)
        }
        (Shape::Polygon(a), Shape::Ellipse(b)) => {
            test_polygon_ellipse(&PolygonView::polygon(pos_a, a), pos_b, b, response)
        }
        (Shape::Line(a), Shape::Ellipse(b)) => {
            test_polygon_ellipse(&PolygonView::line(pos_a, a), pos_b, b, response)
        }
        (Shape::Polygon(a), Shape::Polygon(b)) => test_polygon_polygon(
            &PolygonView::polygon(pos_a, a),
            &PolygonView::polygon(pos_b, b),
            response,
        ),
        (Shape::Polygon(a), Shape::Line(b)) => test_polygon_polygon(
            &PolygonView::polygon(pos_a, a),
            &PolygonView::line(pos_b, b),
            response,
        ),
        (Shape::Line(a), Shape::Polygon(b)) => test_polygon_polygon(
            &PolygonView::line(pos_a, a),
            &PolygonView::polygon(pos_b, b),
            response,
        ),
        (Shape::Line(a), Shape::Line(b)) => test_polygon_polygon(
            &PolygonView::line(pos_a, a),
            &PolygonView::line(pos_b, b),
            response,
        ),
    }
}
