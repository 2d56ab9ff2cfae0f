//! Ocean Simulation Viewer UI Components
//!
//! Presentational Dioxus components shared by the desktop app. They hold
//! no request logic: state comes in through props and user intent goes
//! out through event handlers.

pub mod components;

pub use components::*;
