pub mod errors;
pub mod rk4;
pub use errors::OdeError;
pub use rk4::{rk4, rk4_full, Rk4Stages, Rk4Step, Rk4Trace};
