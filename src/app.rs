use dioxus::prelude::*;

use crate::components::UploadForm;
use crate::context::use_client;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and hosts the upload form.
#[component]
pub fn App() -> Element {
    let endpoint = use_client().config().endpoint.to_string();

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "app-shell",
            header { class: "app-header",
                h1 { class: "page-title", "Ocean Simulation" }
                p { class: "endpoint-label", title: "Simulation endpoint", "{endpoint}" }
            }
            UploadForm {}
        }
    }
}
