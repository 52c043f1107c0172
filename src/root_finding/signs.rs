//! Sign utilities for root-finding algorithms.
//! - `same_sign`     : `true` if values share the same sign, zero counts as positive
//! - `opposite_sign` : negation of `same_sign`

/// Returns `true` if `x` and `y` have the same sign.
#[inline]
pub(crate) fn same_sign(x: f64, y: f64) -> bool {
    (x >= 0.0 && y >= 0.0) || (x < 0.0 && y < 0.0)
}


/// Returns `true` if `x` and `y` have opposite signs.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    !same_sign(x, y)
}
