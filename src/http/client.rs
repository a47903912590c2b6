use std::time::Duration;

use reqwest::Client;

use crate::error::HttpError;

/// Each worker owns its client so no connection pool is shared between workers.
///
/// Keep-alive is off: every request dials a fresh connection, since the target
/// closes the socket after each response without saying so.
/// No request or connect timeout is set: a hung request stalls its worker.
pub(super) fn build_worker_client(worker: usize) -> Result<Client, HttpError> {
    Client::builder()
        .pool_max_idle_per_host(0)
        .pool_idle_timeout(Some(Duration::from_secs(0)))
        .build()
        .map_err(|err| HttpError::BuildClientFailed {
            worker,
            source: err,
        })
}
