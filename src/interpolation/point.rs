//! Planar data point shared by all interpolators.

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point `(x, y)` in the plane.
///
/// Fields are private so a point cannot change once built. Equality is
/// structural on both coordinates and [`Hash`] agrees with it (`-0.0` and
/// `0.0` compare and hash equal).
///
/// # Warning
/// A point holding NaN is not equal to itself. Interpolators refuse such
/// points on insertion, so the [`Eq`] contract holds for every point an
/// interpolator stores.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline] #[must_use] pub fn x(&self) -> f64 { self.x }
    #[inline] #[must_use] pub fn y(&self) -> f64 { self.y }

    #[inline]
    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}
impl Eq for Point {}

/// Bit pattern with `-0.0` folded onto `0.0`.
#[inline]
fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 { 0.0_f64.to_bits() } else { v.to_bits() }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.x).hash(state);
        canonical_bits(self.y).hash(state);
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
