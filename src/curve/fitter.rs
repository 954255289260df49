//! Fitting a curve-space tab into the pixel frame of one piece edge.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::curve::model::Curve;
use crate::foundation::core::{Point, is_boundary_anchor};
use crate::foundation::error::{PuzzleError, PuzzleResult};

/// Tunables of the wedge fit search.
///
/// Defaults reproduce the reference behavior; the literal constants are part of the
/// acceptance criterion for fitted shapes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    /// Slope factor of the admissible wedge, applied to `height / width`.
    pub wedge_slope: f64,
    /// Multiplier applied to the scale after each failed attempt.
    pub shrink_factor: f64,
    /// The search gives up once the scale drops to or below this.
    pub min_scale: f64,
    /// Samples per cubic segment when checking the wedge (0.1 parameter steps).
    pub steps_per_segment: usize,
    /// Pixel height of one curve-space y unit, as a fraction of the edge height.
    pub amplitude_fraction: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            wedge_slope: 0.9,
            shrink_factor: 0.9,
            min_scale: 0.1,
            steps_per_segment: 10,
            amplitude_fraction: 0.25,
        }
    }
}

impl FitConfig {
    /// Densest wedge check accepted; keeps the sample count of long curves bounded.
    pub const MAX_STEPS_PER_SEGMENT: usize = 1000;

    /// Read and validate a JSON config file. Missing fields use defaults.
    ///
    /// IO and parse failures surface as [`PuzzleError::Other`] with the path attached.
    pub fn load(path: &Path) -> PuzzleResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open fit config '{}'", path.display()))?;
        let config: Self = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse fit config '{}'", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would stall or skip the search.
    pub fn validate(&self) -> PuzzleResult<()> {
        if !(self.wedge_slope.is_finite() && self.wedge_slope > 0.0) {
            return Err(PuzzleError::invalid_config("wedge_slope must be > 0"));
        }
        if !(self.shrink_factor > 0.0 && self.shrink_factor < 1.0) {
            return Err(PuzzleError::invalid_config(
                "shrink_factor must be in (0, 1)",
            ));
        }
        if !(self.min_scale > 0.0 && self.min_scale < 1.0) {
            return Err(PuzzleError::invalid_config("min_scale must be in (0, 1)"));
        }
        if !(1..=Self::MAX_STEPS_PER_SEGMENT).contains(&self.steps_per_segment) {
            return Err(PuzzleError::invalid_config(format!(
                "steps_per_segment must be in 1..={}",
                Self::MAX_STEPS_PER_SEGMENT
            )));
        }
        if !(self.amplitude_fraction.is_finite() && self.amplitude_fraction > 0.0) {
            return Err(PuzzleError::invalid_config(
                "amplitude_fraction must be > 0",
            ));
        }
        Ok(())
    }
}

/// Maps curve space (`x` in `[-1, 1]`, `y` around `[-1, 1]`) onto a `width x height`
/// edge whose centerline is `y = 0`.
#[derive(Clone, Copy, Debug)]
struct EdgeFrame {
    width: f64,
    height: f64,
    x_ratio: f64,
    x_offset: f64,
    y_ratio: f64,
}

impl EdgeFrame {
    fn new(width: f64, height: f64, amplitude_fraction: f64) -> Self {
        Self {
            width,
            height,
            x_ratio: width / 2.0,
            x_offset: width / 2.0,
            y_ratio: height * amplitude_fraction,
        }
    }

    /// Map `curve` into pixels with interior points scaled by `scale`.
    fn place(&self, curve: &Curve, scale: f64) -> Curve {
        let count = curve.len();
        curve.map_points(|i, p| {
            let s = if is_boundary_anchor(i, count) { 1.0 } else { scale };
            Point::new(p.x * self.x_ratio * s + self.x_offset, p.y * self.y_ratio * s)
        })
    }

    /// Largest `|y|` allowed at pixel column `x`.
    fn admissible_half_height(&self, x: f64, wedge_slope: f64) -> f64 {
        let run = if x < self.width / 2.0 {
            x
        } else {
            self.width - x
        };
        run * (wedge_slope * self.height / self.width)
    }
}

/// Shrinks tab curves until they stay inside the piece wedge.
#[derive(Clone, Debug, Default)]
pub struct CurveFitter {
    config: FitConfig,
}

impl CurveFitter {
    /// Create a fitter after validating `config`.
    pub fn new(config: FitConfig) -> PuzzleResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &FitConfig {
        &self.config
    }

    /// Largest scale in the `1.0, 0.9, 0.81, ...` sequence at which `curve` stays
    /// inside the wedge of a `width x height` edge.
    pub fn find_fit_scale(&self, width: f64, height: f64, curve: &Curve) -> PuzzleResult<f64> {
        check_dimensions(width, height)?;
        let frame = EdgeFrame::new(width, height, self.config.amplitude_fraction);

        let mut scale = 1.0;
        loop {
            let placed = frame.place(curve, scale);
            if self.fits(&frame, &placed) {
                return Ok(scale);
            }
            scale *= self.config.shrink_factor;
            tracing::trace!(scale, "tab crosses the wedge, shrinking");
            if scale <= self.config.min_scale {
                tracing::warn!(width, height, "no scale keeps the tab inside the wedge");
                return Err(PuzzleError::FitExhausted { width, height });
            }
        }
    }

    /// Fit `curve` onto a horizontal `width x height` edge.
    ///
    /// The returned curve is in pixel space: `x` in `[0, width]`, `y` around the
    /// centerline `0`. `size_percent` in `[0, 100]` then scales the fitted tab between
    /// half and full amplitude. The four boundary anchors are never scaled.
    #[tracing::instrument(skip(self, curve), fields(knots = curve.knots()))]
    pub fn scale_to_fit(
        &self,
        width: f64,
        height: f64,
        curve: &Curve,
        size_percent: f64,
    ) -> PuzzleResult<Curve> {
        let size = size_factor(size_percent)?;
        let fit = self.find_fit_scale(width, height, curve)?;
        tracing::debug!(fit, size, "fitted tab");

        let frame = EdgeFrame::new(width, height, self.config.amplitude_fraction);
        Ok(frame.place(curve, fit * size))
    }

    fn fits(&self, frame: &EdgeFrame, placed: &Curve) -> bool {
        placed.samples(self.config.steps_per_segment).all(|p| {
            p.y.abs() <= frame.admissible_half_height(p.x, self.config.wedge_slope)
        })
    }
}

/// Fit with the default [`FitConfig`]. See [`CurveFitter::scale_to_fit`].
pub fn scale_to_fit(
    width: f64,
    height: f64,
    curve: &Curve,
    size_percent: f64,
) -> PuzzleResult<Curve> {
    CurveFitter::default().scale_to_fit(width, height, curve, size_percent)
}

/// `0.5 + 0.5 * percent / 100`: 0% is half amplitude, 100% is full.
fn size_factor(size_percent: f64) -> PuzzleResult<f64> {
    if !(0.0..=100.0).contains(&size_percent) {
        return Err(PuzzleError::InvalidSizePercent(size_percent));
    }
    Ok(0.5 + 0.5 * size_percent / 100.0)
}

fn check_dimensions(width: f64, height: f64) -> PuzzleResult<()> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !(valid(width) && valid(height)) {
        return Err(PuzzleError::InvalidDimensions { width, height });
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/curve/fitter.rs"]
mod tests;
