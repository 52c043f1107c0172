//! Classical numerical-analysis routines.
//!
//! - [`interpolation`] : incremental Lagrange and Newton interpolators over a
//!   mutable point set, with lazily cached coefficients
//! - [`root_finding`]  : bisection on a sign-changing bracket
//! - [`ode`]           : fixed-step classical Runge-Kutta (RK4) for `y' = f(t, y)`
pub mod interpolation;
pub mod ode;
pub mod root_finding;
