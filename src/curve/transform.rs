//! Coordinate transforms deriving the other edge orientations from one curve.

use crate::curve::model::Curve;
use crate::foundation::core::Point;

/// Swap x and y on every point: a horizontal edge curve becomes the vertical one.
pub fn swap_axes(curve: &Curve) -> Curve {
    curve.map_points(|_, p| Point::new(p.y, p.x))
}

/// Negate y: flips the tab of a horizontal edge to the other side.
pub fn mirror_y(curve: &Curve) -> Curve {
    curve.map_points(|_, p| Point::new(p.x, -p.y))
}

/// Negate x: flips the tab of a vertical edge to the other side.
pub fn mirror_x(curve: &Curve) -> Curve {
    curve.map_points(|_, p| Point::new(-p.x, p.y))
}

#[cfg(test)]
#[path = "../../tests/unit/curve/transform.rs"]
mod tests;
