//! Root-finding error types.
//!
//! ┌ [`RootFindingError`] : common runtime errors
//! │   ├ non-finite function evaluation
//! │   └ invalid global parameters (`max_iter`, `delta_max`)
//! │
//! └ [`BisectionError`] lives next to [`crate::root_finding::bisection::bisection`]
//!   and wraps [`RootFindingError`] transparently.


use thiserror::Error;


/// Root-finding runtime errors.
///
/// ┌ Non-finite function evaluation
/// └ Invalid global configuration (e.g. max_iter < 1)
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RootFindingError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("invalid `delta_max`: must be finite and > 0. got {got}")]
    InvalidDeltaMax { got: f64 },
}
