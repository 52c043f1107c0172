//! Lazily refreshed coefficient storage owned by an interpolator.

use crate::interpolation::errors::InterpolationError;

/// Cached coefficients plus a stale flag.
///
/// Mutations only flip the flag; the previous coefficients stay in place
/// until a read succeeds in computing new ones. A failed refresh leaves
/// both the flag and the old coefficients untouched.
#[derive(Debug, Clone)]
pub(crate) struct CoefficientCache {
    stale: bool,
    coefficients: Option<Vec<f64>>,
}

impl CoefficientCache {
    pub(crate) fn new() -> Self {
        Self { stale: true, coefficients: None }
    }

    #[inline]
    pub(crate) fn invalidate(&mut self) {
        self.stale = true;
    }

    #[inline]
    pub(crate) fn is_stale(&self) -> bool {
        self.stale
    }

    /// Returns the cached coefficients, running `compute` first if stale.
    pub(crate) fn get_or_refresh<F>(&mut self, compute: F) -> Result<&[f64], InterpolationError>
    where
        F: FnOnce() -> Result<Vec<f64>, InterpolationError>,
    {
        if self.stale || self.coefficients.is_none() {
            let fresh = compute()?;
            self.coefficients = Some(fresh);
            self.stale = false;
        }
        Ok(self.coefficients.as_deref().unwrap_or(&[]))
    }
}

impl Default for CoefficientCache {
    fn default() -> Self {
        Self::new()
    }
}
