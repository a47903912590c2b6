use url::Url;

use crate::args::{PositiveU64, PositiveUsize};
use crate::error::HttpError;

/// Endpoint every worker hits.
pub const TARGET_URL: &str = "http://127.0.0.1:7878/hello.html";

/// Shape of a single probe run: who to hit, how wide, how deep.
#[derive(Debug, Clone)]
pub struct ProbePlan {
    pub target: Url,
    pub workers: PositiveUsize,
    pub iterations: PositiveU64,
}

impl ProbePlan {
    /// Plan against the fixed [`TARGET_URL`].
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in target fails to parse.
    pub fn fixed(workers: PositiveUsize, iterations: PositiveU64) -> Result<Self, HttpError> {
        Self::with_target(TARGET_URL, workers, iterations)
    }

    /// Plan against an arbitrary http(s) URL. Used by tests that run a local server
    /// on an ephemeral port; the CLI always goes through [`ProbePlan::fixed`].
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is not a valid http(s) URL.
    pub fn with_target(
        target: &str,
        workers: PositiveUsize,
        iterations: PositiveU64,
    ) -> Result<Self, HttpError> {
        let url = Url::parse(target).map_err(|err| HttpError::InvalidTarget {
            url: target.to_owned(),
            source: err,
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(HttpError::UnsupportedScheme {
                url: target.to_owned(),
            });
        }
        Ok(Self {
            target: url,
            workers,
            iterations,
        })
    }

    /// Requests the run issues when no worker fails.
    #[must_use]
    pub fn expected_requests(&self) -> u64 {
        u64::try_from(self.workers.get())
            .unwrap_or(u64::MAX)
            .saturating_mul(self.iterations.get())
    }
}
