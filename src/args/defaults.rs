use super::types::{PositiveU64, PositiveUsize};

/// Number of concurrent workers when neither CLI nor config sets one.
pub const DEFAULT_WORKERS: usize = 10;
/// Sequential requests per worker when neither CLI nor config sets one.
pub const DEFAULT_ITERATIONS: u64 = 10_000;

pub(super) fn default_workers() -> PositiveUsize {
    PositiveUsize::try_from(DEFAULT_WORKERS).unwrap_or(PositiveUsize::MIN)
}

pub(super) fn default_iterations() -> PositiveU64 {
    PositiveU64::try_from(DEFAULT_ITERATIONS).unwrap_or(PositiveU64::MIN)
}
