/// Convenience result type used across puzzle-edge.
pub type PuzzleResult<T> = Result<T, PuzzleError>;

/// Top-level error taxonomy for curve generation, fitting and derivation.
#[derive(thiserror::Error, Debug)]
pub enum PuzzleError {
    /// The random generator only knows the 7-knot catalog shape.
    #[error("unsupported knot count: {knots} (only 7-knot curves are in the catalog)")]
    UnsupportedKnotCount {
        /// Requested knot count.
        knots: usize,
    },

    /// A curve needs at least one segment.
    #[error("curve needs at least 2 knots, got {knots}")]
    TooFewKnots {
        /// Requested knot count.
        knots: usize,
    },

    /// Knot count above [`MAX_KNOTS`](crate::MAX_KNOTS).
    #[error("curve allows at most {max} knots, got {knots}")]
    TooManyKnots {
        /// Requested knot count.
        knots: usize,
        /// Upper bound.
        max: usize,
    },

    /// Point sequence length disagrees with the declared knot count.
    #[error("curve with {knots} knots needs {expected} points, got {actual}")]
    PointCountMismatch {
        /// Declared knot count.
        knots: usize,
        /// `3 * (knots - 1) + 1`.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// Target rectangle is empty, negative or not finite.
    #[error("invalid edge dimensions {width}x{height}: both must be positive and finite")]
    InvalidDimensions {
        /// Requested width in pixels.
        width: f64,
        /// Requested height in pixels.
        height: f64,
    },

    /// Global shape size outside `[0, 100]`.
    #[error("shape size percent must be in [0, 100], got {0}")]
    InvalidSizePercent(f64),

    /// No scale above the search floor keeps the tab inside the piece wedge.
    #[error("curve does not fit a {width}x{height} edge at any scale")]
    FitExhausted {
        /// Edge width in pixels.
        width: f64,
        /// Edge height in pixels.
        height: f64,
    },

    /// Fitter tunables that would make the search diverge.
    #[error("invalid fit config: {0}")]
    InvalidConfig(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PuzzleError {
    /// Build a [`PuzzleError::InvalidConfig`] value.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
