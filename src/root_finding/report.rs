//! Defines the [`RootReport`] struct returned by root-finding algorithms.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// Reasons a root-finding algorithm may terminate.
/// - [`Termination::ExactRoot`]      : `f(root) == 0` exactly
/// - [`Termination::IterationLimit`] : iteration budget spent, `root` is the last estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Termination {
    ExactRoot,
    IterationLimit,
}


/// Final report returned by bracketing root-finding algorithms.
///
/// [`RootReport`]
/// - `root`        : best root estimate
/// - `f_root`      : function value at `root`
/// - `iterations`  : total iterations, 0 if a bound is already a root
/// - `evals`       : total function evaluations
/// - `termination` : why the solver stopped ([`Termination`])
/// - `left`        : final left bound of the bracket
/// - `right`       : final right bound of the bracket
/// - `algorithm`   : algorithm name (e.g. `"bisection"`)
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RootReport {
    pub root        : f64,
    pub f_root      : f64,
    pub iterations  : usize,
    pub evals       : usize,
    pub termination : Termination,
    pub left        : f64,
    pub right       : f64,
    pub algorithm   : &'static str,
}

impl RootReport {
    /// Width of the final bracket.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}
