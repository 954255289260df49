//! Composition of generation, fitting and transforms into the four oriented edge curves.

use serde::{Deserialize, Serialize};

use crate::curve::fitter::{CurveFitter, FitConfig};
use crate::curve::library::generate_random_curve;
use crate::curve::model::Curve;
use crate::curve::transform::{mirror_x, mirror_y, swap_axes};
use crate::foundation::error::PuzzleResult;
use crate::foundation::rng::RandomSource;

/// The four fitted variants a piece compositor draws, all derived from one tab curve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeCurves {
    /// Horizontal edge, tab towards +y.
    pub horizontal: Curve,
    /// Vertical edge, tab towards +x.
    pub vertical: Curve,
    /// Horizontal edge, tab towards -y.
    pub horizontal_negative: Curve,
    /// Vertical edge, tab towards -x.
    pub vertical_negative: Curve,
}

/// Builds oriented edge curves with one fitter configuration.
#[derive(Clone, Debug, Default)]
pub struct CurveFactory {
    fitter: CurveFitter,
}

impl CurveFactory {
    /// Create a factory after validating `config`.
    pub fn new(config: FitConfig) -> PuzzleResult<Self> {
        Ok(Self {
            fitter: CurveFitter::new(config)?,
        })
    }

    /// Underlying fitter.
    pub fn fitter(&self) -> &CurveFitter {
        &self.fitter
    }

    /// Fit `curve` to a vertical `width x height` edge.
    ///
    /// The fit runs in the rotated frame (`height x width`) and the result is rotated
    /// back by swapping axes.
    pub fn fit_vertical(
        &self,
        width: f64,
        height: f64,
        curve: &Curve,
        size_percent: f64,
    ) -> PuzzleResult<Curve> {
        let rotated = self
            .fitter
            .scale_to_fit(height, width, curve, size_percent)?;
        Ok(swap_axes(&rotated))
    }

    /// Derive all four oriented variants of `curve` for a `width x height` piece.
    #[tracing::instrument(skip(self, curve), fields(knots = curve.knots()))]
    pub fn derive_edge_curves(
        &self,
        width: f64,
        height: f64,
        curve: &Curve,
        size_percent: f64,
    ) -> PuzzleResult<EdgeCurves> {
        let horizontal = self
            .fitter
            .scale_to_fit(width, height, curve, size_percent)?;
        let vertical = self.fit_vertical(width, height, curve, size_percent)?;
        Ok(EdgeCurves {
            horizontal_negative: mirror_y(&horizontal),
            vertical_negative: mirror_x(&vertical),
            horizontal,
            vertical,
        })
    }

    /// Generate one random tab and derive its four oriented variants.
    pub fn random_edge_curves<R: RandomSource + ?Sized>(
        &self,
        width: f64,
        height: f64,
        knot_count: usize,
        size_percent: f64,
        rng: &mut R,
    ) -> PuzzleResult<EdgeCurves> {
        let base = generate_random_curve(knot_count, rng)?;
        self.derive_edge_curves(width, height, &base, size_percent)
    }
}

/// Fit in the rotated frame, then swap axes, with the default [`FitConfig`].
pub fn fit_and_derive_vertical(
    width: f64,
    height: f64,
    curve: &Curve,
    size_percent: f64,
) -> PuzzleResult<Curve> {
    CurveFactory::default().fit_vertical(width, height, curve, size_percent)
}

/// [`CurveFactory::derive_edge_curves`] with the default [`FitConfig`].
pub fn derive_edge_curves(
    width: f64,
    height: f64,
    curve: &Curve,
    size_percent: f64,
) -> PuzzleResult<EdgeCurves> {
    CurveFactory::default().derive_edge_curves(width, height, curve, size_percent)
}

/// [`CurveFactory::random_edge_curves`] with the default [`FitConfig`].
pub fn random_edge_curves<R: RandomSource + ?Sized>(
    width: f64,
    height: f64,
    knot_count: usize,
    size_percent: f64,
    rng: &mut R,
) -> PuzzleResult<EdgeCurves> {
    CurveFactory::default().random_edge_curves(width, height, knot_count, size_percent, rng)
}

#[cfg(test)]
#[path = "../../tests/unit/curve/factory.rs"]
mod tests;
