//! Ocean Simulation Viewer Core Library
//!
//! Request client and form state for a small front-end to a remote ocean
//! simulation service.
//!
//! ## Overview
//!
//! The service exposes a single `POST /simulate` endpoint. It takes an
//! optional bathymetry file as multipart field `file` and answers with a
//! rendered PNG. This crate:
//!
//! - sends that request and validates the image that comes back ([`client`])
//! - keeps result images in memory behind opaque references ([`object_url`])
//! - tracks which submission is current so late responses are ignored
//!   ([`submission`], [`form`])
//!
//! ## Quick Start
//!
//! ```ignore
//! use oceansim_core::{ClientConfig, FormState, SimulationClient, DEFAULT_ENDPOINT};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SimulationClient::new(ClientConfig::new(DEFAULT_ENDPOINT)?)?;
//!     let mut form = FormState::new();
//!
//!     let submission = form.begin_submit();
//!     let outcome = client.run_simulation(submission.file.as_ref()).await;
//!     form.complete(submission.token, outcome);
//!
//!     if let Some(url) = form.result_url() {
//!         println!("result: {}", url);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod object_url;
pub mod submission;
pub mod types;

// Re-exports
pub use client::{SimulationClient, FILE_FIELD};
pub use config::{ClientConfig, DEFAULT_ENDPOINT, ENDPOINT_ENV, TIMEOUT_ENV};
pub use error::{SimResult, SimulationError};
pub use form::{FormPhase, FormState, Outcome, Submission};
pub use object_url::{ObjectUrl, ObjectUrlRegistry, OBJECT_URL_PREFIX};
pub use submission::{SubmissionToken, SubmissionTracker};
pub use types::{SelectedFile, SimulationImage};
