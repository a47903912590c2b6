use clap::Parser;

use super::defaults::{default_iterations, default_workers};
use super::parsers::{parse_positive_u64, parse_positive_usize};
use super::types::{PositiveU64, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Fan out a fixed number of workers that GET http://127.0.0.1:7878/hello.html back to back, then print the wall-clock duration."
)]
pub struct ProbeArgs {
    /// Number of concurrent workers (default: 10)
    #[arg(
        long = "workers",
        short = 'w',
        aliases = ["threads"],
        default_value_t = default_workers(),
        value_parser = parse_positive_usize
    )]
    pub workers: PositiveUsize,

    /// Sequential requests issued by each worker (default: 10000)
    #[arg(
        long = "iterations",
        short = 'n',
        default_value_t = default_iterations(),
        value_parser = parse_positive_u64
    )]
    pub iterations: PositiveU64,

    /// Path to config file (TOML or JSON). Defaults to loadprobe.toml/loadprobe.json if present
    #[arg(long = "config", short = 'c')]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by LOADPROBE_LOG/RUST_LOG)
    #[arg(long, short = 'v', alias = "debug")]
    pub verbose: bool,
}
