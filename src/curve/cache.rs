use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::curve::factory::{CurveFactory, EdgeCurves};
use crate::curve::model::Curve;
use crate::foundation::error::PuzzleResult;

/// Per-size cache of oriented edge curves built from one base tab.
///
/// Pieces of identical size share the same fitted curves, so a compositor derives
/// each `(width, height)` once and reuses it for every edge of that size.
#[derive(Debug)]
pub struct EdgeCurveCache {
    factory: CurveFactory,
    base: Curve,
    size_percent: f64,
    entries: HashMap<(u32, u32), EdgeCurves>,
}

impl EdgeCurveCache {
    /// Create an empty cache deriving from `base` at `size_percent`.
    pub fn new(factory: CurveFactory, base: Curve, size_percent: f64) -> Self {
        Self {
            factory,
            base,
            size_percent,
            entries: HashMap::new(),
        }
    }

    /// Base tab every entry is derived from.
    pub fn base(&self) -> &Curve {
        &self.base
    }

    /// Cached curves for a `width x height` piece, deriving them on first use.
    ///
    /// A failed derivation is not cached; the next call retries it.
    pub fn get_or_derive(&mut self, width: u32, height: u32) -> PuzzleResult<&EdgeCurves> {
        match self.entries.entry((width, height)) {
            Entry::Occupied(e) => Ok(e.into_mut()),
            Entry::Vacant(e) => {
                tracing::debug!(width, height, "deriving edge curves");
                let curves = self.factory.derive_edge_curves(
                    f64::from(width),
                    f64::from(height),
                    &self.base,
                    self.size_percent,
                )?;
                Ok(e.insert(curves))
            }
        }
    }

    /// Number of cached sizes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no size has been derived yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/cache.rs"]
mod tests;
