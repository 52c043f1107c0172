// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub(crate) mod signs;

// algorithms
pub mod bisection;
