//! Error types for the ocean simulation viewer

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for simulation requests and result handling
#[derive(Error, Debug)]
pub enum SimulationError {
    /// Endpoint could not be parsed or is not an http(s) URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Could not establish a connection to the simulation service
    #[error("Could not reach simulation service: {0}")]
    Connect(#[source] reqwest::Error),

    /// Request exceeded the configured timeout
    #[error("Simulation request timed out")]
    Timeout,

    /// Any other transport-level failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("Simulation service returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Service answered successfully but sent no bytes
    #[error("Simulation service returned an empty body")]
    EmptyBody,

    /// Body is neither declared as an image nor recognisable as one
    #[error("Response is not an image (content type: {content_type})")]
    NotAnImage { content_type: String },

    /// Reading the file to upload or writing the result failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Object URL was revoked or never issued
    #[error("Unknown object URL: {0}")]
    UnknownObjectUrl(String),
}

impl SimulationError {
    /// Classify a transport error from reqwest
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SimulationError::Timeout
        } else if err.is_connect() {
            SimulationError::Connect(err)
        } else {
            SimulationError::Request(err)
        }
    }
}

/// Result type alias using SimulationError
pub type SimResult<T> = Result<T, SimulationError>;
