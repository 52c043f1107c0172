//! Interpolation error types.
//!
//! ┌ [`ErrorKind::InvalidArgument`]
//! │  ├ empty point set handed to the divided-difference engine
//! │  ├ non-finite point coordinates or evaluation point
//! │  └ duplicate x-coordinate (Lagrange, checked on insertion)
//! │
//! └ [`ErrorKind::Arithmetic`]
//!    └ zero denominator while building coefficients

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InterpolationError {
    #[error("empty point set")]
    EmptyInput,

    #[error("non-finite point ({x}, {y})")]
    NonFinitePoint { x: f64, y: f64 },

    #[error("evaluation point {got} is not a finite real number")]
    NonFiniteX { got: f64 },

    #[error("duplicate x-coordinate {x}: points must have distinct x coordinates")]
    DuplicateX { x: f64 },

    #[error("division by zero: x-coordinates {x1} and {x2} coincide")]
    ZeroDivision { x1: f64, x2: f64 },
}

/// Coarse classification of an [`InterpolationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    Arithmetic,
}

impl InterpolationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InterpolationError::EmptyInput
            | InterpolationError::NonFinitePoint { .. }
            | InterpolationError::NonFiniteX { .. }
            | InterpolationError::DuplicateX { .. } => ErrorKind::InvalidArgument,
            InterpolationError::ZeroDivision { .. } => ErrorKind::Arithmetic,
        }
    }
}
