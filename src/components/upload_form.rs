//! Upload Form Component
//!
//! File input plus "Run Simulation" button. Submitting sends the selected
//! file (or nothing) to the simulation service and shows the returned
//! image, or an error banner if the request fails.

use std::path::Path;

use dioxus::html::FileEngine;
use dioxus::prelude::*;
use oceansim_core::{FormState, Outcome, SelectedFile};
use oceansim_ui::{Button, ButtonVariant, ErrorBanner, SimulationStatus};
use tracing::warn;

use crate::components::ResultImage;
use crate::context::use_client;

#[component]
pub fn UploadForm() -> Element {
    let client = use_client();
    let mut form = use_signal(FormState::new);
    let mut in_flight = use_signal(|| Option::<Task>::None);

    // Release the result buffer and stop any request when unmounted
    use_drop(move || {
        if let Ok(mut task) = in_flight.try_write() {
            if let Some(task) = task.take() {
                task.cancel();
            }
        }
        if let Ok(mut state) = form.try_write() {
            state.teardown();
        }
    });

    let on_file_change = move |evt: FormEvent| async move {
        // Reads can finish out of order; only the last pick lands
        let pick = form.write().begin_select();
        let picked = match evt.files() {
            Some(engine) => read_first_file(engine.as_ref()).await,
            None => None,
        };
        form.write().finish_select(pick, picked);
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if form.read().is_reading_file() {
            return;
        }

        // A newer submission supersedes whatever is still running
        if let Some(previous) = in_flight.write().take() {
            previous.cancel();
        }

        let submission = form.write().begin_submit();
        let client = client.clone();
        let task = spawn(async move {
            let outcome = client.run_simulation(submission.file.as_ref()).await;
            if form.write().complete(submission.token, outcome) == Outcome::Applied {
                in_flight.set(None);
            }
        });
        in_flight.set(Some(task));
    };

    let state = form.read();
    let phase = state.phase();
    let reading = state.is_reading_file();
    let file_label = state
        .file()
        .map(|f| format!("{} ({})", f.name, format_size(f.len())));
    let error_message = state.error().map(|e| e.to_string());
    let result_url = state.result_url().map(str::to_owned);
    let detail = state
        .completed_at()
        .map(|at| at.format("last run %H:%M:%S").to_string())
        .unwrap_or_default();
    drop(state);

    rsx! {
        div { class: "upload-form",
            form { class: "upload-form__controls", onsubmit: on_submit,
                input {
                    class: "file-input",
                    r#type: "file",
                    onchange: on_file_change,
                }
                Button {
                    button_type: "submit".to_string(),
                    disabled: reading,
                    "Run Simulation"
                }
            }

            if reading {
                p { class: "file-label", "Reading file..." }
            } else if let Some(label) = file_label {
                p { class: "file-label", "{label}" }
            }

            SimulationStatus { phase, detail }

            if let Some(message) = error_message {
                ErrorBanner {
                    message,
                    on_dismiss: move |_| form.write().dismiss_error(),
                }
            }

            if let Some(url) = result_url {
                div { class: "result-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| form.write().clear_result(),
                        "Clear result"
                    }
                }
                ResultImage { url }
            }
        }
    }
}

/// Read the first picked file. Returns `None` if the selection was cleared
/// or the file could not be read.
async fn read_first_file(engine: &dyn FileEngine) -> Option<SelectedFile> {
    let path = engine.files().into_iter().next()?;
    let name = Path::new(&path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(&path)
        .to_string();

    match engine.read_file(&path).await {
        Some(bytes) => Some(SelectedFile::new(name, bytes)),
        None => {
            warn!(%path, "Could not read selected file");
            None
        }
    }
}

fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_are_human_readable() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(5 * 1024 * 1024 + 512 * 1024), "5.5 MB");
    }
}
