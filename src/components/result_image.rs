//! Result Image
//!
//! Resolves a result reference through the object URL registry and shows
//! the image. A reference that no longer resolves renders an error note
//! instead of a broken image.

use dioxus::prelude::*;

use crate::context::use_object_urls;

/// Display the simulation output behind `url`
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     ResultImage { url: form.result_url().unwrap().to_string() }
/// }
/// ```
#[component]
pub fn ResultImage(
    /// Result reference (`blob:oceansim/...`)
    url: String,
    /// Alt text for accessibility
    #[props(default = "Result".to_string())]
    alt: String,
) -> Element {
    let registry = use_object_urls();

    match registry.data_uri(&url) {
        Ok(src) => rsx! {
            img {
                class: "result-image",
                src: "{src}",
                alt: "{alt}",
                "data-ref": "{url}",
            }
        },
        Err(e) => {
            tracing::warn!(%url, error = %e, "Result image no longer available");
            rsx! {
                div { class: "result-image__missing", "⚠️ {e}" }
            }
        }
    }
}
