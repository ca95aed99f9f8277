//! Waste report generation.
//!
//! A report combines an emission estimate obtained from the external
//! prediction service with a risk score computed locally from the same
//! waste mapping.

mod category;
mod predictor;
mod report;

pub use category::*;
pub use predictor::*;
pub use report::*;
