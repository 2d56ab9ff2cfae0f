//! Simulation request client
//!
//! Sends the optional input file to the simulation service as a multipart
//! form and turns the image that comes back into an [`ObjectUrl`].
//!
//! # Example
//!
//! ```ignore
//! let client = SimulationClient::new(ClientConfig::new(DEFAULT_ENDPOINT)?)?;
//! let file = SelectedFile::from_path(Path::new("data/GEBCO_2024.nc")).await?;
//!
//! let url = client.run_simulation(Some(&file)).await?;
//! let data_uri = client.registry().data_uri(url.as_str())?;
//! ```

use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use tracing::{debug, info, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{SimResult, SimulationError};
use crate::object_url::{ObjectUrl, ObjectUrlRegistry};
use crate::types::{SelectedFile, SimulationImage};

/// Multipart field the service reads the upload from
pub const FILE_FIELD: &str = "file";

/// Longest error body kept in [`SimulationError::Status`]
const MAX_ERROR_BODY_CHARS: usize = 200;

/// HTTP client for the `/simulate` endpoint
#[derive(Clone, Debug)]
pub struct SimulationClient {
    http: reqwest::Client,
    config: ClientConfig,
    registry: ObjectUrlRegistry,
}

impl SimulationClient {
    /// Create a client with its own object URL registry
    pub fn new(config: ClientConfig) -> SimResult<Self> {
        Self::with_registry(config, ObjectUrlRegistry::new())
    }

    /// Create a client that registers results in an existing registry
    pub fn with_registry(config: ClientConfig, registry: ObjectUrlRegistry) -> SimResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            config,
            registry,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Registry holding the buffers behind returned object URLs
    pub fn registry(&self) -> &ObjectUrlRegistry {
        &self.registry
    }

    /// Run a simulation and register the resulting image.
    ///
    /// The returned handle keeps the image buffer alive; drop it to
    /// release the buffer.
    pub async fn run_simulation(&self, file: Option<&SelectedFile>) -> SimResult<ObjectUrl> {
        let image = self.fetch_image(file).await?;
        Ok(self.registry.create(image))
    }

    /// Run a simulation and return the raw image.
    ///
    /// Fails on transport errors, non-2xx statuses, empty bodies and
    /// bodies that are not images.
    #[instrument(skip_all, fields(endpoint = %self.config.endpoint))]
    pub async fn fetch_image(&self, file: Option<&SelectedFile>) -> SimResult<SimulationImage> {
        match file {
            Some(f) => info!(file = %f.name, bytes = f.len(), "Submitting simulation"),
            None => info!("Submitting simulation without input file"),
        }

        let response = self
            .http
            .post(self.config.endpoint.clone())
            .multipart(build_form(file)?)
            .send()
            .await
            .map_err(SimulationError::from_transport)?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "Simulation service rejected request");
            return Err(SimulationError::Status {
                status,
                body: excerpt(&body),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(SimulationError::from_transport)?;
        debug!(%status, bytes = bytes.len(), content_type = ?content_type, "Response received");

        let image = SimulationImage::from_response(bytes, content_type.as_deref())?;
        info!(bytes = image.len(), mime = %image.mime, "Simulation complete");
        Ok(image)
    }
}

/// Build the multipart body: empty, or a single `file` part
fn build_form(file: Option<&SelectedFile>) -> SimResult<Form> {
    let form = Form::new();
    let Some(file) = file else {
        return Ok(form);
    };

    let part = Part::bytes(file.bytes.to_vec())
        .file_name(file.name.clone())
        .mime_str(&file.mime())?;
    Ok(form.part(FILE_FIELD, part))
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_ERROR_BODY_CHARS {
        trimmed.to_string()
    } else {
        let cut: String = trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_short_body_unchanged() {
        assert_eq!(excerpt("  bad input \n"), "bad input");
    }

    #[test]
    fn excerpt_truncates_long_body() {
        let body = "x".repeat(500);
        let out = excerpt(&body);
        assert_eq!(out.len(), MAX_ERROR_BODY_CHARS + 3);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn excerpt_respects_char_boundaries() {
        let body = "é".repeat(300);
        let out = excerpt(&body);
        assert_eq!(out.chars().count(), MAX_ERROR_BODY_CHARS + 3);
    }

    #[test]
    fn client_keeps_config() {
        let config = ClientConfig::new("http://127.0.0.1:9/simulate").unwrap();
        let client = SimulationClient::new(config.clone()).unwrap();
        assert_eq!(client.config(), &config);
        assert!(client.registry().is_empty());
    }
}
