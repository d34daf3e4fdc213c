pub mod assessment;
pub mod engine;
pub mod error;
pub mod estimator;
pub mod factors;
pub mod form;
pub mod logger;
pub mod validation;

pub use error::EstimatorError;
pub use estimator::{estimate, estimate_with, Category, EmissionBreakdown, EstimatorOutput};
