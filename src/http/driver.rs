use std::time::Instant;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::error::{AppError, AppResult, HttpError};
use crate::summary::ProbeReport;

use super::plan::ProbePlan;
use super::worker::{WorkerOutcome, worker_loop};

/// Starts every worker, waits for all of them, and reports the elapsed wall-clock time.
///
/// Workers never coordinate. A failing worker stops on its own while the rest run to
/// completion; the run then fails as a whole.
///
/// # Errors
///
/// Returns [`HttpError::WorkersFailed`] when at least one worker did not finish all of
/// its iterations.
pub async fn run_probe(plan: &ProbePlan) -> AppResult<ProbeReport> {
    let workers = plan.workers.get();
    let iterations = plan.iterations.get();
    info!(
        "Probing {} with {} workers x {} requests",
        plan.target, workers, iterations
    );

    let started = Instant::now();
    let handles: Vec<JoinHandle<Result<WorkerOutcome, HttpError>>> = (0..workers)
        .map(|worker| tokio::spawn(worker_loop(worker, plan.target.clone(), iterations)))
        .collect();

    let mut completed_requests: u64 = 0;
    let mut failures: Vec<HttpError> = Vec::new();
    for (worker, handle) in handles.into_iter().enumerate() {
        match handle.await {
            Ok(Ok(outcome)) => {
                completed_requests = completed_requests.saturating_add(outcome.completed);
            }
            Ok(Err(err)) => {
                error!(worker = ?err.worker(), "{}", err);
                failures.push(err);
            }
            Err(err) => {
                let aborted = HttpError::WorkerAborted {
                    worker,
                    source: err,
                };
                error!(worker, "{}", aborted);
                failures.push(aborted);
            }
        }
    }
    let elapsed = started.elapsed();

    let failed = failures.len();
    if let Some(first) = failures.into_iter().next() {
        return Err(AppError::http(HttpError::WorkersFailed {
            failed,
            total: workers,
            first: Box::new(first),
        }));
    }

    let report = ProbeReport {
        workers,
        iterations,
        completed_requests,
        elapsed,
    };
    info!(
        "Completed {} requests in {:.3}s",
        report.completed_requests,
        report.elapsed.as_secs_f64()
    );
    Ok(report)
}
