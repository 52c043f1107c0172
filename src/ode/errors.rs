//! ODE integration error types.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum OdeError {
    #[error("non-finite input: t0={t0}, y0={y0}, h={h}")]
    NonFiniteInput { t0: f64, y0: f64, h: f64 },

    #[error("right-hand side non-finite at t={t}, y={y}: f(t, y)={f}")]
    NonFiniteEvaluation { t: f64, y: f64, f: f64 },
}
