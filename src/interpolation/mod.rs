pub mod algorithms;
pub mod errors;
pub mod point;
pub mod traits;
pub(crate) mod cache;
pub(crate) mod helpers;
pub use errors::{ErrorKind, InterpolationError};
pub use point::Point;
pub use traits::{CoefficientEngine, Interpolator};

pub mod lagrange;
pub mod newton;
pub use lagrange::{LagrangeInterpolator, LagrangeWeights};
pub use newton::{DividedDifferences, NewtonInterpolator};
