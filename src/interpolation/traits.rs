use crate::interpolation::errors::InterpolationError;
use crate::interpolation::point::Point;

/// Turns a point sequence into the coefficients of one polynomial form.
///
/// Interpolators own an engine and call it only when their cache is stale,
/// so a custom engine can observe how often coefficients are rebuilt.
pub trait CoefficientEngine {
    fn coefficients(&self, points: &[Point]) -> Result<Vec<f64>, InterpolationError>;
}

/// Incremental polynomial interpolator over a mutable point set.
pub trait Interpolator {
    /// inserts a point, `Ok(false)` if the exact point is already present
    fn add(&mut self, point: Point) -> Result<bool, InterpolationError>;

    /// removes a point, `false` if it was not present
    fn remove(&mut self, point: &Point) -> bool;

    fn clear(&mut self);

    /// points in insertion order
    fn points(&self) -> &[Point];

    #[inline]
    fn len(&self) -> usize {
        self.points().len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.points().is_empty()
    }

    /// evaluates single point
    /// defined separately in each method
    fn eval(&mut self, x: f64) -> Result<f64, InterpolationError>;

    /// evaluates many points
    #[inline]
    fn eval_many(&mut self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }

    /// owned copy of the current coefficients
    fn coefficients(&mut self) -> Result<Vec<f64>, InterpolationError>;

    /// compact human-readable form of the polynomial
    fn render(&mut self) -> Result<String, InterpolationError>;

    fn algorithm_name(&self) -> &'static str;
}
