use nalgebra::Vector2;

pub type Vector = Vector2<f32>;

/// Perpendicular of `v`, rotated a quarter turn so that edges of a clockwise
/// (y-down) polygon yield outward-facing normals.
#[inline(always)]
pub fn perp(v: &Vector) -> Vector {
    Vector::new(v.y, -v.x)
}

/// Unit vector along `v`, or the zero vector if `v` has no length.
#[inline(always)]
pub fn normalize_or_zero(v: &Vector) -> Vector {
    let len = v.norm();
    if len > 0.0 {
        *v / len
    } else {
        Vector::zeros()
    }
}

#[inline(always)]
pub fn rotate(v: &Vector, angle: f32) -> Vector {
    let (sin, cos) = angle.sin_cos();
    Vector::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}
