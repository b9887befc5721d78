mod breakdown;
mod estimator;

pub use breakdown::*;
pub use estimator::*;
