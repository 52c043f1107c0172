//! Lagrange Interpolation
//!
//! Implements global polynomial interpolation in
//! [Lagrange form](https://en.wikipedia.org/wiki/Lagrange_polynomial).
//!
//! Each point `i` carries a weight
//!
//! ```text
//! c[i] = y[i] / ∏_{j≠i} (x[i] - x[j])
//! ```
//!
//! and the interpolant is `P(x) = Σ_i c[i] · ∏_{j≠i} (x - x[j])`.
//! Distinct x-coordinates are enforced when points are added.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::cache::CoefficientCache;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::helpers::{signed_factor, term_sign};
use crate::interpolation::point::Point;
use crate::interpolation::traits::{CoefficientEngine, Interpolator};

const ALGORITHM: Algorithm = Algorithm::Lagrange;

/// Computes the per-point Lagrange weights.
#[derive(Debug, Default, Clone, Copy)]
pub struct LagrangeWeights;

impl CoefficientEngine for LagrangeWeights {
    /// # Errors
    /// - [`InterpolationError::ZeroDivision`] if two points share an x-coordinate.
    fn coefficients(&self, points: &[Point]) -> Result<Vec<f64>, InterpolationError> {
        let mut c = Vec::with_capacity(points.len());

        for (i, pi) in points.iter().enumerate() {
            let mut denom = 1.0;
            for (j, pj) in points.iter().enumerate() {
                if i == j {
                    continue;
                }
                let dx = pi.x() - pj.x();
                if dx == 0.0 {
                    return Err(InterpolationError::ZeroDivision { x1: pi.x(), x2: pj.x() });
                }
                denom *= dx;
            }
            c.push(pi.y() / denom);
        }

        Ok(c)
    }
}

/// Lagrange-form interpolator with lazily cached weights.
///
/// # Invariants
/// - no two stored points share an x-coordinate
/// - coefficient `i` always belongs to point `i` once refreshed
///
/// # Construction
/// - [`LagrangeInterpolator::new`] or [`LagrangeInterpolator::from_points`]
/// - [`LagrangeInterpolator::with_engine`] to supply another [`CoefficientEngine`]
#[derive(Debug, Clone)]
pub struct LagrangeInterpolator<E = LagrangeWeights> {
    points: Vec<Point>,
    cache:  CoefficientCache,
    engine: E,
}

impl LagrangeInterpolator<LagrangeWeights> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_engine(LagrangeWeights)
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

impl Default for LagrangeInterpolator<LagrangeWeights> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CoefficientEngine> LagrangeInterpolator<E> {
    pub fn with_engine(engine: E) -> Self {
        Self {
            points: Vec::new(),
            cache:  CoefficientCache::new(),
            engine,
        }
    }

    /// `true` if the next read will recompute the weights.
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

    /// Sum of weighted ratio terms followed by every numerator and denominator.
    ///
    /// ```text
    /// -1.0000 * (A0 / B0) + 3.0000 * (A1 / B1)
    /// A0 = (x - 0)
    /// B0 = (-1 - 0)
    /// A1 = (x + 1)
    /// B1 = (0 + 1)
    /// ```
    ///
    /// An empty interpolator renders as the empty string.
    pub fn render_full(&mut self) -> Result<String, InterpolationError> {
        self.refreshed()?;
        let points = &self.points;
        if points.is_empty() {
            return Ok(String::new());
        }

        let ratios: Vec<String> = points
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{:.4} * (A{i} / B{i})", p.y()))
            .collect();

        let mut out = ratios.join(" + ");
        for (i, pi) in points.iter().enumerate() {
            let mut a = format!("A{i} = ");
            let mut b = format!("B{i} = ");
            for (j, pj) in points.iter().enumerate() {
                if i != j {
                    a.push_str(&signed_factor("x", pj.x(), None));
                    b.push_str(&signed_factor(pi.x(), pj.x(), None));
                }
            }
            out.push('\n');
            out.push_str(&a);
            out.push('\n');
            out.push_str(&b);
        }

        Ok(out)
    }

    /// Sum of `weight * ∏(x ± x_j)` terms, weights to 4 decimals.
    ///
    /// Zero weights are skipped; a negative leading term keeps its `-`.
    pub fn render_short(&mut self) -> Result<String, InterpolationError> {
        let coeffs = {
            let engine = &self.engine;
            let points = &self.points;
            self.cache.get_or_refresh(|| engine.coefficients(points))?
        };

        let mut out = String::new();
        let mut leading = true;
        for (i, &c) in coeffs.iter().enumerate() {
            if c == 0.0 {
                continue;
            }
            out.push_str(term_sign(c, leading));
            out.push_str(&format!("{:.4} * ", c.abs()));
            for (j, pj) in self.points.iter().enumerate() {
                if i != j {
                    out.push_str(&signed_factor("x", pj.x(), None));
                }
            }
            leading = false;
        }

        Ok(out)
    }
}

impl<E: CoefficientEngine> Interpolator for LagrangeInterpolator<E> {
    /// # Errors
    /// - [`InterpolationError::NonFinitePoint`] for NaN or infinite coordinates.
    /// - [`InterpolationError::DuplicateX`] if another point already uses `point.x()`;
    ///   the point set is left unchanged.
    fn add(&mut self, point: Point) -> Result<bool, InterpolationError> {
        if !point.is_finite() {
            return Err(InterpolationError::NonFinitePoint { x: point.x(), y: point.y() });
        }
        if self.points.contains(&point) {
            return Ok(false);
        }
        if self.points.iter().any(|p| p.x() == point.x()) {
            return Err(InterpolationError::DuplicateX { x: point.x() });
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

    /// Evaluates `Σ_i c[i] · ∏_{j≠i} (x - x[j])`; `0.0` with no points.
    fn eval(&mut self, x: f64) -> Result<f64, InterpolationError> {
        let coeffs = {
            let engine = &self.engine;
            let points = &self.points;
            self.cache.get_or_refresh(|| engine.coefficients(points))?
        };

        let mut sum = 0.0;
        for (i, &c) in coeffs.iter().enumerate() {
            let mut term = c;
            for (j, pj) in self.points.iter().enumerate() {
                if i != j {
                    term *= x - pj.x();
                }
            }
            sum += term;
        }

        Ok(sum)
    }

    fn coefficients(&mut self) -> Result<Vec<f64>, InterpolationError> {
        self.refreshed().map(<[f64]>::to_vec)
    }

    fn render(&mut self) -> Result<String, InterpolationError> {
        self.render_short()
    }

    fn algorithm_name(&self) -> &'static str {
        ALGORITHM.algorithm_name()
    }
}
