//! Client context for the desktop app.
//!
//! `main` builds one [`SimulationClient`] from the command line and hands
//! it to the launcher as root context, so any component can reach it.
//!
//! ## Usage
//!
//! ```ignore
//! let client = use_client();
//! let url = client.run_simulation(None).await?;
//!
//! let registry = use_object_urls();
//! let src = registry.data_uri(url.as_str())?;
//! ```

use dioxus::prelude::*;
use oceansim_core::{ObjectUrlRegistry, SimulationClient};

/// Hook to access the simulation client from context.
pub fn use_client() -> SimulationClient {
    use_context::<SimulationClient>()
}

/// Hook to access the registry that resolves result references.
pub fn use_object_urls() -> ObjectUrlRegistry {
    use_client().registry().clone()
}
