use clap::Parser;

use crate::error::{AppError, AppResult, ValidationError};

use super::{DEFAULT_ITERATIONS, DEFAULT_WORKERS, PositiveU64, PositiveUsize, ProbeArgs};

fn parse_test_args<I, T>(args: I) -> AppResult<ProbeArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    ProbeArgs::try_parse_from(args).map_err(AppError::from)
}

#[test]
fn parse_args_defaults_match_fixed_probe() -> Result<(), String> {
    let args = parse_test_args(["loadprobe"]).map_err(|err| err.to_string())?;

    if args.workers.get() != DEFAULT_WORKERS {
        return Err(format!("Unexpected workers: {}", args.workers.get()));
    }
    if args.iterations.get() != DEFAULT_ITERATIONS {
        return Err(format!("Unexpected iterations: {}", args.iterations.get()));
    }
    if args.config.is_some() {
        return Err("Expected no config path".to_owned());
    }
    if args.verbose {
        return Err("Expected verbose to be false".to_owned());
    }
    Ok(())
}

#[test]
fn parse_args_overrides() -> Result<(), String> {
    let args = parse_test_args([
        "loadprobe",
        "-w",
        "3",
        "--iterations",
        "25",
        "--config",
        "probe.toml",
        "-v",
    ])
    .map_err(|err| err.to_string())?;

    if args.workers.get() != 3 || args.iterations.get() != 25 {
        return Err("Unexpected counts".to_owned());
    }
    if args.config.as_deref() != Some("probe.toml") || !args.verbose {
        return Err("Unexpected config/verbose".to_owned());
    }
    Ok(())
}

#[test]
fn parse_args_rejects_zero_workers() -> Result<(), String> {
    match parse_test_args(["loadprobe", "--workers", "0"]) {
        Err(AppError::Clap { .. }) => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(_) => Err("Expected zero workers to be rejected".to_owned()),
    }
}

#[test]
fn parse_args_rejects_url_flag() -> Result<(), String> {
    if parse_test_args(["loadprobe", "--url", "http://example.com"]).is_ok() {
        return Err("Target must not be configurable".to_owned());
    }
    Ok(())
}

#[test]
fn positive_types_validate_input() -> Result<(), String> {
    if !matches!(
        PositiveU64::try_from(0),
        Err(ValidationError::ValueTooSmall { min: 1 })
    ) {
        return Err("Expected zero u64 to be rejected".to_owned());
    }
    if !matches!(
        "abc".parse::<PositiveUsize>(),
        Err(ValidationError::InvalidNumber { .. })
    ) {
        return Err("Expected non-numeric usize to be rejected".to_owned());
    }
    let parsed = " 7 "
        .parse::<PositiveUsize>()
        .map_err(|err| format!("parse failed: {}", err))?;
    if usize::from(parsed) != 7 {
        return Err("Unexpected parsed value".to_owned());
    }
    Ok(())
}
