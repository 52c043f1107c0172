use super::algorithms::{Algorithm, GLOBAL_MAX_ITER_FALLBACK};
use super::errors::RootFindingError;
use super::report::{RootReport, Termination};
use super::signs::{opposite_sign, same_sign};
use thiserror::Error;

const ALGORITHM: &str = Algorithm::Bisection.algorithm_name();

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BisectionError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("no sign change on [{a}, {b}]: f(a) and f(b) share a sign")]
    NoSignChange  { a: f64, b: f64 },

    #[error("invalid bounds: a and b must be finite and distinct. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },
}

/// Bisection Configuration
///
/// # Defaults
///
/// ┌ DEFAULT_DELTA_MAX - target error bound used to derive `max_iter`
/// └ `max_iter`        - `None`
///
/// # Notes:
/// └ If `max_iter` is None, it will be set to [`min_iterations`]
///     ├ for `delta_max` on the input bracket,
///     └ clamped to `[1, GLOBAL_MAX_ITER_FALLBACK]`.
///
/// # Validation:
/// └ Configuration validation occurs in [`bisection`] via [`BisectionCfg::validate()`].
///
///    The following checks are performed:
///    ├ `delta_max` >  0 and finite
///    └ `max_iter` is `None` or >= 1
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BisectionCfg {
    delta_max:  Option<f64>,
    max_iter:   Option<usize>,
}
impl BisectionCfg {
    pub const DEFAULT_DELTA_MAX: f64 = 1e-10;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn with_delta_max(mut self, v: f64) -> Self { self.delta_max = Some(v); self }
    pub fn with_max_iter(mut self, v: usize) -> Self { self.max_iter  = Some(v); self }

    #[inline] #[must_use] pub fn delta_max(&self) -> f64 { self.delta_max.unwrap_or(Self::DEFAULT_DELTA_MAX) }
    #[inline] #[must_use] pub fn max_iter(&self) -> Option<usize> { self.max_iter }

    pub fn validate(&self) -> Result<BisectionCfg, RootFindingError> {
        let delta_max = self.delta_max();
        if !(delta_max.is_finite() && delta_max > 0.0) {
            return Err(RootFindingError::InvalidDeltaMax { got: delta_max });
        }
        if let Some(0) = self.max_iter {
            return Err(RootFindingError::InvalidMaxIter { got: 0 });
        }

        Ok(Self {
            delta_max: Some(delta_max),
            max_iter:  self.max_iter,
        })
    }
}

impl Default for BisectionCfg {
    fn default() -> Self {
        Self {
            delta_max:  Some(Self::DEFAULT_DELTA_MAX),
            max_iter:   None,
        }
    }
}

/// Minimum number of halvings of `[a, b]` needed for an error below `delta_max`.
///
/// ```text
/// floor( (ln(b - a) - ln(delta_max)) / ln 2 )
/// ```
///
/// Bounds may be given in either order. Returns `0` when the interval is
/// already narrower than `delta_max`.
///
/// # Errors
/// ┌ [`BisectionError::InvalidBounds`]       - `a` or `b` is NaN/inf, or `a == b`.
/// └ [`RootFindingError::InvalidDeltaMax`]   - `delta_max` <= 0 or not finite.
pub fn min_iterations(delta_max: f64, a: f64, b: f64) -> Result<usize, BisectionError> {
    if !(a.is_finite() && b.is_finite()) || a == b {
        return Err(BisectionError::InvalidBounds { a, b });
    }
    if !(delta_max.is_finite() && delta_max > 0.0) {
        return Err(RootFindingError::InvalidDeltaMax { got: delta_max }.into());
    }

    let width = (b - a).abs();
    let n = (width.ln() - delta_max.ln()) / std::f64::consts::LN_2;

    Ok(if n > 0.0 { n as usize } else { 0 })
}

/// Calculates midpoint of [a, b]
#[inline]
fn calculate_bisection(a: f64, b: f64) -> f64 {
    a + (b - a) * 0.5
}

/// Wraps the user function, counting calls and rejecting non-finite values.
struct Counted<F> {
    func:  F,
    evals: usize,
}

impl<F: FnMut(f64) -> f64> Counted<F> {
    fn eval(&mut self, x: f64) -> Result<f64, BisectionError> {
        self.evals += 1;
        let fx = (self.func)(x);
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
        }
        Ok(fx)
    }

    fn report(
        &self,
        root: f64,
        f_root: f64,
        iterations: usize,
        termination: Termination,
        left: f64,
        right: f64,
    ) -> RootReport {
        RootReport {
            root,
            f_root,
            iterations,
            evals: self.evals,
            termination,
            left,
            right,
            algorithm: ALGORITHM,
        }
    }
}

/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// This method assumes that the function `func` is continuous on the interval `[a, b]`
/// and that `func(a)` and `func(b)` have opposite signs, guaranteeing a root exists
/// within the interval.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - One bound of the search interval. Must be finite.
/// ├ `b`    - Other bound of the search interval. Must be finite and differ from `a`;
/// │          the bounds are swapped if `a > b`.
/// └ `cfg`  - Iteration budget, either `max_iter` directly or derived from
///            `delta_max`. See [`BisectionCfg`]
///
/// # Returns
///
/// On success, returns a [`RootReport`] containing
/// ├ `root`        : exact root, or the last midpoint once the budget is spent
/// ├ `iterations`  : number of halvings performed, 0 if a bound is already a root
/// ├ `evals`       : number of function evaluations performed
/// ├ `termination` : [`Termination::ExactRoot`] or [`Termination::IterationLimit`]
/// └ `left`/`right`: final bracket
///
/// # Errors
///
/// ┌ [`BisectionError::InvalidBounds`]       - `a` or `b` is NaN/inf or `a == b`.
/// ├ [`BisectionError::NoSignChange`]        - `func(a)` and `func(b)` share a sign.
/// │
/// The following are propagated via [`BisectionError::Common`]
/// ├ [`RootFindingError::NonFiniteEvaluation`] - `func(x)` produces NaN or inf.
/// ├ [`RootFindingError::InvalidDeltaMax`]     - `cfg.delta_max` <= 0 or not finite.
/// └ [`RootFindingError::InvalidMaxIter`]      - `cfg.max_iter` == 0.
///
/// # Notes
/// ├ Roots are only accepted when `func` returns exactly `0.0`.
/// └ Zero counts as positive when comparing signs.
pub fn bisection<F>(
    func: F,
    mut a: f64,
    mut b: f64,
    cfg: BisectionCfg
) -> Result<RootReport, BisectionError>
where F: FnMut(f64) -> f64 {

    if !(a.is_finite() && b.is_finite()) || a == b {
        return Err(BisectionError::InvalidBounds { a, b });
    }
    let cfg = cfg.validate()?;

    if a > b {
        std::mem::swap(&mut a, &mut b);
    }

    let num_iter = match cfg.max_iter() {
        Some(m) => m,
        None    => min_iterations(cfg.delta_max(), a, b)?.clamp(1, GLOBAL_MAX_ITER_FALLBACK),
    };

    let mut f = Counted { func, evals: 0 };

    // immediate bounds are roots
    let mut fa = f.eval(a)?;
    if fa == 0.0 {
        return Ok(f.report(a, fa, 0, Termination::ExactRoot, a, b));
    }
    let fb = f.eval(b)?;
    if fb == 0.0 {
        return Ok(f.report(b, fb, 0, Termination::ExactRoot, a, b));
    }

    if same_sign(fa, fb) {
        return Err(BisectionError::NoSignChange { a, b });
    }

    let mut midpoint = a;       // gets overwritten
    let mut fm       = fa;      // gets overwritten
    for iter in 1..=num_iter {
        midpoint = calculate_bisection(a, b);
        fm       = f.eval(midpoint)?;

        if fm == 0.0 {
            return Ok(f.report(midpoint, fm, iter, Termination::ExactRoot, a, b));
        }

        // shrink interval
        if opposite_sign(fa, fm) {
            b = midpoint;
        } else {
            a  = midpoint;
            fa = fm;
        }
    }

    Ok(f.report(midpoint, fm, num_iter, Termination::IterationLimit, a, b))
}
