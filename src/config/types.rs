use serde::Deserialize;

/// Optional on-disk overrides for the probe.
///
/// The target URL is intentionally absent; unknown keys are rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(alias = "threads")]
    pub workers: Option<usize>,
    pub iterations: Option<u64>,
    pub verbose: Option<bool>,
}
