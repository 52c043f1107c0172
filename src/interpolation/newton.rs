//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! Coefficients come from a memoized divided-difference table and are
//! evaluated at query points using Horner’s scheme for numerical stability.
//! Point order matters: the `k`-th basis term is `∏_{j<k} (x - x[j])`.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::cache::CoefficientCache;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::helpers::{signed_factor, term_sign};
use crate::interpolation::point::Point;
use crate::interpolation::traits::{CoefficientEngine, Interpolator};

const ALGORITHM: Algorithm = Algorithm::Newton;

/// Decimals used by [`NewtonInterpolator::render`].
const RENDER_PRECISION: usize = 4;

/// Computes Newton divided-difference coefficients.
///
/// Returns a coefficient vector `c` s.t.
/// `P(x) = c[0] + c[1](x - x0) + ... + c[n-1](x - x0)...(x - x_{n-2})`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DividedDifferences;

/// Memo of `D(k, t)` for `0 <= t <= k <= n - 2`.
///
/// ```text
/// D(k, 0) = (y[k+1] - y[k]) / (x[k+1] - x[k])
/// D(k, t) = (D(k, t-1) - D(k-1, t-1)) / (x[k+1] - x[k-t])
/// ```
struct DifferenceTable<'p> {
    points: &'p [Point],
    width:  usize,
    memo:   Vec<Option<f64>>,
}

impl<'p> DifferenceTable<'p> {
    fn new(points: &'p [Point]) -> Self {
        let width = points.len().saturating_sub(1);
        Self { points, width, memo: vec![None; width * width] }
    }

    fn get(&mut self, k: usize, t: usize) -> Result<f64, InterpolationError> {
        let slot = k * self.width + t;
        if let Some(d) = self.memo[slot] {
            return Ok(d);
        }

        let p = self.points;
        let d = if t == 0 {
            ratio(p[k + 1].y() - p[k].y(), p[k + 1].x(), p[k].x())?
        } else {
            let upper = self.get(k, t - 1)?;
            let lower = self.get(k - 1, t - 1)?;
            ratio(upper - lower, p[k + 1].x(), p[k - t].x())?
        };

        self.memo[slot] = Some(d);
        Ok(d)
    }
}

#[inline]
fn ratio(num: f64, x_hi: f64, x_lo: f64) -> Result<f64, InterpolationError> {
    let dx = x_hi - x_lo;
    if dx == 0.0 {
        return Err(InterpolationError::ZeroDivision { x1: x_lo, x2: x_hi });
    }
    Ok(num / dx)
}

impl CoefficientEngine for DividedDifferences {
    /// # Errors
    /// - [`InterpolationError::EmptyInput`] if `points` is empty.
    /// - [`InterpolationError::ZeroDivision`] if a denominator `x[a] - x[b]` is zero.
    fn coefficients(&self, points: &[Point]) -> Result<Vec<f64>, InterpolationError> {
        let first = points.first().ok_or(InterpolationError::EmptyInput)?;
        let n = points.len();

        let mut c = Vec::with_capacity(n);
        c.push(first.y());

        let mut table = DifferenceTable::new(points);
        for t in 0..n - 1 {
            for k in t..n - 1 {
                let d = table.get(k, t)?;
                if k == t {
                    c.push(d);
                }
            }
        }

        Ok(c)
    }
}

/// Newton-form interpolator with lazily cached coefficients.
///
/// Unlike [`crate::interpolation::lagrange::LagrangeInterpolator`], repeated
/// x-coordinates are accepted on insertion and only reported as
/// [`InterpolationError::ZeroDivision`] once coefficients are computed.
///
/// # Construction
/// - [`NewtonInterpolator::new`] or [`NewtonInterpolator::from_points`]
/// - [`NewtonInterpolator::with_engine`] to supply another [`CoefficientEngine`]
#[derive(Debug, Clone)]
pub struct NewtonInterpolator<E = DividedDifferences> {
    points: Vec<Point>,
    cache:  CoefficientCache,
    engine: E,
}

impl NewtonInterpolator<DividedDifferences> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_engine(DividedDifferences)
    }

    /// Builds an interpolator by adding every point in order.
    ///
    /// # Errors
    /// Same as [`Interpolator::add`].
    pub fn from_points<I>(points: I) -> Result<Self, InterpolationError>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut interp = Self::new();
        for p in points {
            interp.add(p)?;
        }
        Ok(interp)
    }
}

impl Default for NewtonInterpolator<DividedDifferences> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CoefficientEngine> NewtonInterpolator<E> {
    pub fn with_engine(engine: E) -> Self {
        Self {
            points: Vec::new(),
            cache:  CoefficientCache::new(),
            engine,
        }
    }

    /// `true` if the next read will recompute the coefficients.
    pub fn is_stale(&self) -> bool {
        self.cache.is_stale()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    fn refreshed(&mut self) -> Result<&[f64], InterpolationError> {
        let engine = &self.engine;
        let points = &self.points;
        self.cache.get_or_refresh(|| engine.coefficients(points))
    }
}

impl<E: CoefficientEngine> Interpolator for NewtonInterpolator<E> {
    /// # Errors
    /// - [`InterpolationError::NonFinitePoint`] for NaN or infinite coordinates.
    fn add(&mut self, point: Point) -> Result<bool, InterpolationError> {
        if !point.is_finite() {
            return Err(InterpolationError::NonFinitePoint { x: point.x(), y: point.y() });
        }
        if self.points.contains(&point) {
            return Ok(false);
        }

        self.points.push(point);
        self.cache.invalidate();
        Ok(true)
    }

    fn remove(&mut self, point: &Point) -> bool {
        match self.points.iter().position(|p| p == point) {
            Some(idx) => {
                self.points.remove(idx);
                self.cache.invalidate();
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        self.points.clear();
        self.cache.invalidate();
    }

    fn points(&self) -> &[Point] {
        &self.points
    }

    /// Evaluates the Newton form using Horner’s nested form:
    ///
    /// ```text
    /// P(xq) = c[0] + (xq - x[0]) * [ c[1] + (xq - x[1]) * [ ... c[n-1] ... ] ]
    /// ```
    ///
    /// # Errors
    /// - [`InterpolationError::NonFiniteX`] if `x` is NaN or infinite.
    /// - Any error of [`DividedDifferences`] when the cache is stale.
    fn eval(&mut self, x: f64) -> Result<f64, InterpolationError> {
        if !x.is_finite() {
            return Err(InterpolationError::NonFiniteX { got: x });
        }

        let coeffs = {
            let engine = &self.engine;
            let points = &self.points;
            self.cache.get_or_refresh(|| engine.coefficients(points))?
        };

        let Some((&last, rest)) = coeffs.split_last() else {
            return Ok(0.0);
        };
        let mut p = last;
        for (&cj, pj) in rest.iter().zip(&self.points).rev() {
            p = cj + (x - pj.x()) * p;
        }

        Ok(p)
    }

    fn coefficients(&mut self) -> Result<Vec<f64>, InterpolationError> {
        self.refreshed().map(<[f64]>::to_vec)
    }

    /// `c[0]` followed by every nonzero `± |c[i]| ∏_{j<i}(x ± x_j)` term,
    /// all numbers to 4 decimals.
    ///
    /// ```text
    /// -1.0000 + 4.0000 (x + 1.0000) + 1.0000 (x + 1.0000)(x - 0.0000)(x - 2.0000)
    /// ```
    fn render(&mut self) -> Result<String, InterpolationError> {
        let coeffs = {
            let engine = &self.engine;
            let points = &self.points;
            self.cache.get_or_refresh(|| engine.coefficients(points))?
        };

        let Some((&c0, rest)) = coeffs.split_first() else {
            return Ok(String::new());
        };
        let mut out = format!("{:.*}", RENDER_PRECISION, c0);
        for (idx, &ci) in rest.iter().enumerate() {
            if ci == 0.0 {
                continue;
            }
            out.push_str(term_sign(ci, false));
            out.push_str(&format!("{:.*} ", RENDER_PRECISION, ci.abs()));
            for pj in self.points.iter().take(idx + 1) {
                out.push_str(&signed_factor("x", pj.x(), Some(RENDER_PRECISION)));
            }
        }

        Ok(out)
    }

    fn algorithm_name(&self) -> &'static str {
        ALGORITHM.algorithm_name()
    }
}
