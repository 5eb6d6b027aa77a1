pub mod error;
pub mod extract;
pub mod metrics;
pub mod report;
pub mod types;

pub use report::{evaluate_log_file, Report};
pub use types::*;
