//! Reusable UI components
//!
//! Class names match the stylesheet shipped with the desktop app.

mod button;
mod error_banner;
mod simulation_status;

pub use button::*;
pub use error_banner::*;
pub use simulation_status::*;
