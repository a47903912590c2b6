use reqwest::{Client, Response};
use tracing::debug;
use url::Url;

use crate::error::HttpError;

use super::client::build_worker_client;

/// What a worker did before reaching Done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct WorkerOutcome {
    pub worker: usize,
    pub completed: u64,
    pub body_bytes: u64,
}

/// Issues `iterations` sequential GETs against `target`, draining each body.
///
/// The first failed request ends the loop; there is no retry.
pub(super) async fn worker_loop(
    worker: usize,
    target: Url,
    iterations: u64,
) -> Result<WorkerOutcome, HttpError> {
    let client = build_worker_client(worker)?;
    debug!("Worker {} started", worker);

    let mut outcome = WorkerOutcome {
        worker,
        completed: 0,
        body_bytes: 0,
    };
    for iteration in 0..iterations {
        let read = fetch_once(&client, &target, worker, iteration).await?;
        outcome.completed = outcome.completed.saturating_add(1);
        outcome.body_bytes = outcome.body_bytes.saturating_add(read);
    }

    debug!(
        "Worker {} done: {} requests, {} body bytes",
        worker, outcome.completed, outcome.body_bytes
    );
    Ok(outcome)
}

async fn fetch_once(
    client: &Client,
    target: &Url,
    worker: usize,
    iteration: u64,
) -> Result<u64, HttpError> {
    let response = client
        .get(target.clone())
        .send()
        .await
        .map_err(|err| HttpError::RequestFailed {
            worker,
            iteration,
            source: err,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(HttpError::UnexpectedStatus {
            worker,
            iteration,
            status,
        });
    }

    drain_body(response)
        .await
        .map_err(|err| HttpError::ReadBodyFailed {
            worker,
            iteration,
            source: err,
        })
}

async fn drain_body(mut response: Response) -> Result<u64, reqwest::Error> {
    let mut read: u64 = 0;
    while let Some(chunk) = response.chunk().await? {
        read = read.saturating_add(u64::try_from(chunk.len()).unwrap_or(u64::MAX));
    }
    Ok(read)
}
