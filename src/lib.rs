//! Puzzle-edge builds the interlocking edge curves of a jigsaw-puzzle mask overlay.
//!
//! Every edge is a chain of cubic Bezier segments stored as a flat point sequence
//! ([`Curve`]). The crate only produces control-point geometry; rasterizing the mask
//! and compositing video frames happen elsewhere.
//!
//! # Pipeline overview
//!
//! 1. **Generate**: pick one of 13 reference tabs, maybe mirror it, and jitter its
//!    size and position ([`generate_random_curve`]).
//! 2. **Fit**: shrink the tab until it stays inside the triangular wedge of a piece
//!    edge, then apply the global size factor ([`scale_to_fit`]).
//! 3. **Derive**: swap axes and mirror to get the vertical and negative variants
//!    ([`derive_edge_curves`]).
//!
//! Randomness is always passed in explicitly through [`RandomSource`], so a seeded
//! [`Rng64`] reproduces the same curves.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod curve;
mod foundation;

pub use curve::cache::EdgeCurveCache;
pub use curve::factory::{
    CurveFactory, EdgeCurves, derive_edge_curves, fit_and_derive_vertical, random_edge_curves,
};
pub use curve::fitter::{CurveFitter, FitConfig, scale_to_fit};
pub use curve::library::{
    CATALOG_KNOTS, CATALOG_LEN, CATALOG_POINTS, catalog_curve, generate_random_curve,
};
pub use curve::model::Curve;
pub use curve::transform::{mirror_x, mirror_y, swap_axes};
pub use foundation::core::{
    BezPath, CubicBez, MAX_KNOTS, Point, is_boundary_anchor, point_count,
};
pub use foundation::error::{PuzzleError, PuzzleResult};
pub use foundation::rng::{RandomSource, Rng64};
