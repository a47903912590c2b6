//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod tests;

pub use cli::ProbeArgs;
pub use defaults::{DEFAULT_ITERATIONS, DEFAULT_WORKERS};
pub use types::{PositiveU64, PositiveUsize};
