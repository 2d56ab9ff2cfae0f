//! Error banner shown when a simulation request fails

use dioxus::prelude::*;

/// Visible error message with an optional dismiss action
#[component]
pub fn ErrorBanner(
    /// Message to show
    message: String,
    /// Called when the user dismisses the banner
    #[props(default)]
    on_dismiss: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div { class: "error-banner", role: "alert",
            span { class: "error-banner__icon", "⚠️" }
            span { class: "error-banner__message", "{message}" }
            if let Some(handler) = on_dismiss {
                button {
                    class: "error-banner__dismiss",
                    r#type: "button",
                    "aria-label": "Dismiss",
                    onclick: move |_| handler.call(()),
                    "\u{00D7}"
                }
            }
        }
    }
}
