pub use kurbo::{BezPath, CubicBez, ParamCurve, Point};

/// Largest knot count a [`Curve`](crate::Curve) accepts.
///
/// Keeps the flat point count, `3 * (MAX_KNOTS - 1) + 1 = 253`, addressable by a `u8`.
pub const MAX_KNOTS: usize = 85;

/// Number of flat points in a curve with `knots` knots: `3 * (knots - 1) + 1`.
///
/// Returns `0` for fewer than two knots, which no valid curve has, and saturates at
/// `usize::MAX` instead of overflowing.
#[inline]
pub fn point_count(knots: usize) -> usize {
    if knots < 2 {
        0
    } else {
        (knots - 1).saturating_mul(3).saturating_add(1)
    }
}

/// Whether `index` is one of the four boundary anchors of a `count`-point curve.
///
/// Boundary anchors are the start point, its outgoing control point, the last
/// control point and the end point. They are exempt from amplitude scaling so the
/// curve stays pinned to the piece corners.
#[inline]
pub fn is_boundary_anchor(index: usize, count: usize) -> bool {
    index <= 1 || index + 2 >= count
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
