use serde::{Deserialize, Serialize};

use crate::foundation::core::{BezPath, CubicBez, MAX_KNOTS, ParamCurve, Point, point_count};
use crate::foundation::error::{PuzzleError, PuzzleResult};

/// Chain of cubic Bezier segments stored as a flat point sequence.
///
/// A curve with `N` knots holds exactly `3 * (N - 1) + 1` points: the start anchor,
/// then for each segment two control points and the segment's end anchor, which is
/// also the start anchor of the next segment. The constructor enforces this, so any
/// `Curve` can be walked segment by segment without bounds surprises.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CurveRepr")]
pub struct Curve {
    knots: usize,
    points: Vec<Point>,
}

#[derive(Deserialize)]
struct CurveRepr {
    knots: usize,
    points: Vec<Point>,
}

impl TryFrom<CurveRepr> for Curve {
    type Error = PuzzleError;

    fn try_from(repr: CurveRepr) -> PuzzleResult<Self> {
        Self::new(repr.knots, repr.points)
    }
}

impl Curve {
    /// Build a curve, checking the point count against `knots`.
    pub fn new(knots: usize, points: Vec<Point>) -> PuzzleResult<Self> {
        if knots < 2 {
            return Err(PuzzleError::TooFewKnots { knots });
        }
        if knots > MAX_KNOTS {
            return Err(PuzzleError::TooManyKnots {
                knots,
                max: MAX_KNOTS,
            });
        }
        let expected = point_count(knots);
        if points.len() != expected {
            return Err(PuzzleError::PointCountMismatch {
                knots,
                expected,
                actual: points.len(),
            });
        }
        Ok(Self { knots, points })
    }

    /// Build a curve from `(x, y)` pairs.
    pub fn from_pairs(knots: usize, pairs: &[(f64, f64)]) -> PuzzleResult<Self> {
        Self::new(knots, pairs.iter().map(|&p| Point::from(p)).collect())
    }

    /// Knot count `N`.
    pub fn knots(&self) -> usize {
        self.knots
    }

    /// Number of flat points, always `3 * (N - 1) + 1`.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false` for a constructed curve.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Flat point sequence.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consume the curve and return its flat point sequence.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Number of cubic segments, `N - 1`.
    pub fn segment_count(&self) -> usize {
        self.knots - 1
    }

    /// Cubic segment `index`, clamped to the last segment.
    pub fn segment(&self, index: usize) -> CubicBez {
        let i = 3 * index.min(self.segment_count() - 1);
        CubicBez::new(
            self.points[i],
            self.points[i + 1],
            self.points[i + 2],
            self.points[i + 3],
        )
    }

    /// Iterate over the cubic segments in order.
    pub fn segments(&self) -> impl Iterator<Item = CubicBez> + '_ {
        (0..self.segment_count()).map(|i| self.segment(i))
    }

    /// Evaluate at the global parameter `t` in `[0, N - 1]`.
    ///
    /// The integer part selects the segment and the fractional part is the local
    /// parameter; `t = N - 1` lands on the end of the last segment.
    pub fn eval(&self, t: f64) -> Point {
        let last = self.segment_count() - 1;
        let seg = (t.max(0.0).floor() as usize).min(last);
        self.segment(seg).eval((t - seg as f64).clamp(0.0, 1.0))
    }

    /// Sample at `steps_per_segment` evenly spaced parameters per segment,
    /// both ends included.
    ///
    /// Sample `k` sits at `t = k / steps_per_segment`. Integer arithmetic picks the
    /// segment so knots are hit exactly and the final knot is clamped onto the last
    /// segment.
    pub fn samples(&self, steps_per_segment: usize) -> impl Iterator<Item = Point> + '_ {
        let steps = steps_per_segment.max(1);
        let last = self.segment_count() - 1;
        (0..=steps.saturating_mul(self.segment_count())).map(move |k| {
            let seg = (k / steps).min(last);
            let local = (k - seg * steps) as f64 / steps as f64;
            self.segment(seg).eval(local)
        })
    }

    /// Polyline a rasterizer can walk, using the same parameter grid as [`Self::samples`].
    pub fn flatten_points(&self, steps_per_segment: usize) -> Vec<Point> {
        self.samples(steps_per_segment).collect()
    }

    /// Convert to a `kurbo` path: one `move_to` followed by a `curve_to` per segment.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.points[0]);
        for seg in self.segments() {
            path.curve_to(seg.p1, seg.p2, seg.p3);
        }
        path
    }

    /// SVG path data for debugging overlays.
    pub fn to_svg_path(&self) -> String {
        self.to_bez_path().to_svg()
    }

    /// Largest `|y|` over the control points.
    pub fn max_abs_y(&self) -> f64 {
        self.points.iter().fold(0.0, |acc, p| acc.max(p.y.abs()))
    }

    /// New curve with `f(index, point)` applied to every point.
    ///
    /// The knot count carries over, so the length invariant holds by construction.
    pub(crate) fn map_points(&self, mut f: impl FnMut(usize, Point) -> Point) -> Self {
        Self {
            knots: self.knots,
            points: self
                .points
                .iter()
                .enumerate()
                .map(|(i, &p)| f(i, p))
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/model.rs"]
mod tests;
