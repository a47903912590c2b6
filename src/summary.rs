//! End-of-run report and the single stdout line derived from it.
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeReport {
    pub workers: usize,
    pub iterations: u64,
    pub completed_requests: u64,
    pub elapsed: Duration,
}

/// Renders the final `Duration: <seconds>` line. Seconds always carry a
/// fractional part, so a whole second prints as `2.0`.
#[must_use]
pub fn duration_line(report: &ProbeReport) -> String {
    format!("Duration: {:?}", report.elapsed.as_secs_f64())
}
