//! Fixed fan-out of GET workers against the probe target.
mod client;
mod driver;
mod plan;
mod worker;


pub use driver::run_probe;
pub use plan::{ProbePlan, TARGET_URL};
