use geometry::Rectangle;

pub const NE: usize = 0;
pub const NW: usize = 1;
pub const SW: usize = 2;
pub const SE: usize = 3;

/// Index of the single child quadrant of `node` that fully contains `bounds`,
/// or `None` when `bounds` touches or straddles a midline.
#[inline(always)]
pub fn quadrant_index(node: &Rectangle, bounds: &Rectangle) -> Option<usize> {
    let mid_x = node.x + node.width / 2.0;
    let mid_y = node.y + node.height / 2.0;

    let top = bounds.y < mid_y && bounds.y + bounds.height < mid_y;
    let bottom = bounds.y > mid_y;

    if bounds.x < mid_x && bounds.x + bounds.width < mid_x {
        if top {
            return Some(NW);
        }
        if bottom {
            return Some(SW);
        }
    } else if bounds.x > mid_x {
        if top {
            return Some(NE);
        }
        if bottom {
            return Some(SE);
        }
    }
    None
}

pub fn child_bounds(node: &Rectangle, quadrant: usize) -> Rectangle {
    let half_w = node.width / 2.0;
    let half_h = node.height / 2.0;
    match quadrant {
        NE => Rectangle::new(node.x + half_w, node.y, half_w, half_h),
        NW => Rectangle::new(node.x, node.y, half_w, half_h),
        SW => Rectangle::new(node.x, node.y + half_h, half_w, half_h),
        _ => Rectangle::new(node.x + half_w, node.y + half_h, half_w, half_h),
    }
}
