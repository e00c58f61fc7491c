use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use herhealth_instruments::breakdown::SignificanceThreshold;

const DEFAULT_BIND: &str = "0.0.0.0:8080";

/// Runtime settings, read from `HERHEALTH_*` environment variables.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind: SocketAddr,
    /// Root for the JSON-file sink. Unset keeps records in memory.
    pub data_dir: Option<PathBuf>,
    pub significance_threshold: SignificanceThreshold,
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bind = lookup("HERHEALTH_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind
            .parse()
            .map_err(|e| eyre::eyre!("invalid HERHEALTH_BIND {bind:?}: {e}"))?;

        let data_dir = lookup("HERHEALTH_DATA_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        let significance_threshold = match lookup("HERHEALTH_SIGNIFICANCE_THRESHOLD") {
            Some(raw) => SignificanceThreshold(raw.parse().map_err(|e| {
                eyre::eyre!("invalid HERHEALTH_SIGNIFICANCE_THRESHOLD {raw:?}: {e}")
            })?),
            None => SignificanceThreshold::default(),
        };

        Ok(Self {
            bind,
            data_dir,
            significance_threshold,
        })
    }
}
