//! Simulation Status Indicator
//!
//! Small dot-and-label showing where the upload form is in its cycle.

use dioxus::prelude::*;
use oceansim_core::FormPhase;

/// Display label for a form phase
pub fn phase_label(phase: FormPhase) -> &'static str {
    match phase {
        FormPhase::Idle => "ready to run",
        FormPhase::Submitting => "simulating...",
        FormPhase::Ready => "result ready",
        FormPhase::Failed => "simulation failed",
    }
}

/// CSS modifier for the status dot
pub fn phase_class(phase: FormPhase) -> &'static str {
    match phase {
        FormPhase::Idle => "status-dot",
        FormPhase::Submitting => "status-dot busy",
        FormPhase::Ready => "status-dot ok",
        FormPhase::Failed => "status-dot failed",
    }
}

/// Properties for the SimulationStatus component
#[derive(Clone, PartialEq, Props)]
pub struct SimulationStatusProps {
    pub phase: FormPhase,
    /// Trailing detail, e.g. the completion time. Hidden when empty.
    #[props(default)]
    pub detail: String,
}

/// Displays the current phase with a coloured indicator
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SimulationStatus { phase: FormPhase::Submitting }
/// }
/// ```
#[component]
pub fn SimulationStatus(props: SimulationStatusProps) -> Element {
    let label = phase_label(props.phase);
    let busy = props.phase == FormPhase::Submitting;

    rsx! {
        div { class: "simulation-status",
            "aria-live": "polite",
            "aria-busy": if busy { "true" } else { "false" },
            span {
                class: phase_class(props.phase),
                role: "img",
                "aria-label": "{label}",
            }
            span { class: "status-label", "{label}" }
            if !props.detail.is_empty() {
                span { class: "status-detail", "{props.detail}" }
            }
        }
    }
}
