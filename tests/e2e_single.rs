
use std::fs;

use tempfile::tempdir;

use loadprobe::args::{PositiveU64, PositiveUsize};
use loadprobe::http::{ProbePlan, run_probe};
use support_single::{run_loadprobe, spawn_http_server, spawn_http_server_on_or_skip};

fn describe(output: &std::process::Output) -> String {
    format!(
        "status: {:?}\nstdout: {}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

#[test]
fn e2e_library_run_counts_every_request() -> Result<(), String> {
    let (url, server) = spawn_http_server()?;
    let workers = PositiveUsize::try_from(5).map_err(|err| err.to_string())?;
    let iterations = PositiveU64::try_from(20).map_err(|err| err.to_string())?;
    let plan = ProbePlan::with_target(&url, workers, iterations).map_err(|err| err.to_string())?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    let report = runtime
        .block_on(run_probe(&plan))
        .map_err(|err| err.to_string())?;

    if report.completed_requests != plan.expected_requests() {
        return Err(format!(
            "Expected {} requests, report says {}",
            plan.expected_requests(),
            report.completed_requests
        ));
    }
    if server.hits() != 100 {
        return Err(format!("Server saw {} requests", server.hits()));
    }
    Ok(())
}

#[test]
fn e2e_cli_against_fixed_target() -> Result<(), String> {
    let Some((_url, server)) = spawn_http_server_on_or_skip("127.0.0.1:7878")? else {
        eprintln!("skipping e2e_cli_against_fixed_target: 127.0.0.1:7878 is already in use");
        return Ok(());
    };
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;

    let output = run_loadprobe(["--workers", "3", "--iterations", "4"], dir.path())?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let seconds = stdout
        .trim()
        .strip_prefix("Duration: ")
        .ok_or_else(|| describe(&output))?;
    let seconds: f64 = seconds
        .parse()
        .map_err(|err| format!("Bad duration '{}': {}", seconds, err))?;
    if seconds.is_sign_negative() {
        return Err(format!("Negative duration: {}", seconds));
    }
    if server.hits() != 12 {
        return Err(format!("Server saw {} requests", server.hits()));
    }

    drop(server);

    let output = run_loadprobe(["-w", "2", "-n", "1"], dir.path())?;
    if output.status.success() {
        return Err(format!("Expected failure without server\n{}", describe(&output)));
    }
    if String::from_utf8_lossy(&output.stdout).contains("Duration:") {
        return Err(format!("Duration printed after failure\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_cli_rejects_zero_workers() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output = run_loadprobe(["--workers", "0"], dir.path())?;
    if output.status.success() {
        return Err(describe(&output));
    }
    Ok(())
}

#[test]
fn e2e_cli_rejects_target_in_config() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    fs::write(
        dir.path().join("loadprobe.toml"),
        "workers = 1\nurl = \"http://example.com\"\n",
    )
    .map_err(|err| format!("write config failed: {}", err))?;

    let output = run_loadprobe(std::iter::empty::<&str>(), dir.path())?;
    if output.status.success() {
        return Err(describe(&output));
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("loadprobe.toml") {
        return Err(describe(&output));
    }
    Ok(())
}
