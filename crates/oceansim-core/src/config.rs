//! Client configuration
//!
//! The simulation endpoint is not hardcoded: binaries resolve it from
//! command line flags or environment variables and hand a `ClientConfig`
//! to [`SimulationClient`](crate::SimulationClient).

use std::time::Duration;

use reqwest::Url;

use crate::error::{SimResult, SimulationError};

/// Endpoint used when nothing else is configured (local development server)
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/simulate";

/// Environment variable overriding the endpoint
pub const ENDPOINT_ENV: &str = "OCEANSIM_ENDPOINT";

/// Environment variable setting the request timeout in seconds
pub const TIMEOUT_ENV: &str = "OCEANSIM_TIMEOUT_SECS";

/// Settings for talking to the simulation service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Full URL of the simulate endpoint
    pub endpoint: Url,
    /// Overall request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a config for the given endpoint with no timeout.
    ///
    /// Only `http` and `https` URLs are accepted.
    pub fn new(endpoint: &str) -> SimResult<Self> {
        Ok(Self {
            endpoint: parse_endpoint(endpoint)?,
            timeout: None,
        })
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Convenience for binaries taking the timeout as whole seconds
    pub fn with_timeout_secs(self, secs: Option<u64>) -> Self {
        self.with_timeout(secs.map(Duration::from_secs))
    }
}

/// Parse and validate an endpoint URL
pub fn parse_endpoint(raw: &str) -> SimResult<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| SimulationError::InvalidEndpoint(format!("{}: {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(SimulationError::InvalidEndpoint(format!(
            "unsupported scheme '{}' in {}",
            other, raw
        ))),
    }
}
