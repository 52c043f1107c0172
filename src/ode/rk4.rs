//! Classic Runge-Kutta 4th order, fixed step, scalar `y' = f(t, y)`.
//!
//! Stage values are kept scaled by the step size:
//!
//! ```text
//! k1 = h f(t,       y)
//! k2 = h f(t + h/2, y + k1/2)
//! k3 = h f(t + h/2, y + k2/2)
//! k4 = h f(t + h,   y + k3)
//! y_next = y + (k1 + 2 k2 + 2 k3 + k4) / 6
//! ```

use std::fmt::Write as _;

use super::errors::OdeError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The four `h`-scaled stage values of one step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rk4Stages {
    pub k1: f64,
    pub k2: f64,
    pub k3: f64,
    pub k4: f64,
}

impl Rk4Stages {
    #[inline]
    fn increment(&self) -> f64 {
        (self.k1 + 2.0 * self.k2 + 2.0 * self.k3 + self.k4) / 6.0
    }
}

/// One row of an RK4 trace.
///
/// `stages` is `None` on the final row: no step is taken from it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rk4Step {
    pub t: f64,
    pub y: f64,
    pub stages: Option<Rk4Stages>,
}

/// Every state visited by [`rk4_full`], `n + 1` rows for `n` steps.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rk4Trace {
    steps: Vec<Rk4Step>,
}

impl Rk4Trace {
    pub fn steps(&self) -> &[Rk4Step] {
        &self.steps
    }

    /// Final value `y_n`.
    pub fn y(&self) -> f64 {
        self.steps.last().map_or(f64::NAN, |s| s.y)
    }

    /// Fixed-width table `i | t | y | k1 | k2 | k3 | k4`, six decimals,
    /// `None` where a row has no stages.
    pub fn table(&self) -> String {
        let mut out = format!(
            "{:<4} | {:<8} | {:<10} | {:<10} | {:<10} | {:<10} | {:<10}\n",
            "i", "t", "y", "k1", "k2", "k3", "k4"
        );
        out.push_str(&"-".repeat(75));
        out.push('\n');

        for (i, step) in self.steps.iter().enumerate() {
            let [k1, k2, k3, k4] = match step.stages {
                Some(s) => [s.k1, s.k2, s.k3, s.k4].map(|k| format!("{k:.6}")),
                None    => ["None"; 4].map(String::from),
            };
            let _ = writeln!(
                out,
                "{:<4} | {:<8} | {:<10} | {:<10} | {:<10} | {:<10} | {:<10}",
                i,
                format!("{:.6}", step.t),
                format!("{:.6}", step.y),
                k1, k2, k3, k4
            );
        }

        out
    }
}

fn check_inputs(t0: f64, y0: f64, h: f64) -> Result<(), OdeError> {
    if !(t0.is_finite() && y0.is_finite() && h.is_finite()) {
        return Err(OdeError::NonFiniteInput { t0, y0, h });
    }
    Ok(())
}

/// Computes the stage values at `(t, y)`.
fn stages<F>(f: &mut F, t: f64, y: f64, h: f64) -> Result<Rk4Stages, OdeError>
where F: FnMut(f64, f64) -> f64 {
    let mut eval = |t: f64, y: f64| -> Result<f64, OdeError> {
        let v = f(t, y);
        if !v.is_finite() {
            return Err(OdeError::NonFiniteEvaluation { t, y, f: v });
        }
        Ok(h * v)
    };

    let k1 = eval(t, y)?;
    let k2 = eval(t + h * 0.5, y + k1 * 0.5)?;
    let k3 = eval(t + h * 0.5, y + k2 * 0.5)?;
    let k4 = eval(t + h, y + k3)?;

    Ok(Rk4Stages { k1, k2, k3, k4 })
}

/// Integrates `y' = f(t, y)` from `(t0, y0)` over `n` steps of size `h`
/// and returns `y(t0 + n h)`.
///
/// `n = 0` returns `y0` without calling `f`.
///
/// # Errors
/// ┌ [`OdeError::NonFiniteInput`]      - `t0`, `y0` or `h` is NaN/inf.
/// └ [`OdeError::NonFiniteEvaluation`] - `f` returns NaN/inf at some stage.
pub fn rk4<F>(mut f: F, t0: f64, y0: f64, h: f64, n: usize) -> Result<f64, OdeError>
where F: FnMut(f64, f64) -> f64 {
    check_inputs(t0, y0, h)?;

    let mut t = t0;
    let mut y = y0;
    for _ in 0..n {
        y += stages(&mut f, t, y, h)?.increment();
        t += h;
    }

    Ok(y)
}

/// Same integration as [`rk4`], recording every visited state.
///
/// Row `i < n` holds `(t_i, y_i)` with the stages used to reach `y_{i+1}`;
/// row `n` holds the final state with `stages: None`.
///
/// # Errors
/// Same as [`rk4`].
pub fn rk4_full<F>(mut f: F, t0: f64, y0: f64, h: f64, n: usize) -> Result<Rk4Trace, OdeError>
where F: FnMut(f64, f64) -> f64 {
    check_inputs(t0, y0, h)?;

    let mut steps = Vec::with_capacity(n + 1);
    let mut t = t0;
    let mut y = y0;
    for _ in 0..n {
        let k = stages(&mut f, t, y, h)?;
        steps.push(Rk4Step { t, y, stages: Some(k) });
        y += k.increment();
        t += h;
    }
    steps.push(Rk4Step { t, y, stages: None });

    Ok(Rk4Trace { steps })
}
