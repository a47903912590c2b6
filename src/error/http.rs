use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Invalid target URL '{url}': {source}")]
    InvalidTarget {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Target URL '{url}' is not http(s).")]
    UnsupportedScheme { url: String },
    #[error("Failed to build HTTP client for worker {worker}: {source}")]
    BuildClientFailed {
        worker: usize,
        #[source]
        source: reqwest::Error,
    },
    #[error("Worker {worker} request {iteration} failed: {source}")]
    RequestFailed {
        worker: usize,
        iteration: u64,
        #[source]
        source: reqwest::Error,
    },
    #[error("Worker {worker} request {iteration} returned status {status}.")]
    UnexpectedStatus {
        worker: usize,
        iteration: u64,
        status: reqwest::StatusCode,
    },
    #[error("Worker {worker} request {iteration} body read failed: {source}")]
    ReadBodyFailed {
        worker: usize,
        iteration: u64,
        #[source]
        source: reqwest::Error,
    },
    #[error("Worker {worker} panicked or was aborted: {source}")]
    WorkerAborted {
        worker: usize,
        #[source]
        source: tokio::task::JoinError,
    },
    #[error("{failed} of {total} workers failed; first failure: {first}")]
    WorkersFailed {
        failed: usize,
        total: usize,
        #[source]
        first: Box<HttpError>,
    },
}

impl HttpError {
    /// Worker index the error belongs to, if it is tied to a single worker.
    #[must_use]
    pub const fn worker(&self) -> Option<usize> {
        match self {
            Self::BuildClientFailed { worker, .. }
            | Self::RequestFailed { worker, .. }
            | Self::UnexpectedStatus { worker, .. }
            | Self::ReadBodyFailed { worker, .. }
            | Self::WorkerAborted { worker, .. } => Some(*worker),
            Self::InvalidTarget { .. }
            | Self::UnsupportedScheme { .. }
            | Self::WorkersFailed { .. } => None,
        }
    }
}
