//! Status Line Component
//!
//! Colored presence dot, uppercase status label and the elapsed-time
//! suffix. Hovering the suffix shows the exact start time when known.

use dioxus::prelude::*;
use statuscard_core::presence::StatusView;

/// Inline style for the dot; colors come straight from the view model.
pub fn dot_style(color: &str) -> String {
    format!("background: {};", color)
}

/// Properties for the StatusOrb component
#[derive(Clone, PartialEq, Props)]
pub struct StatusOrbProps {
    pub status: StatusView,
}

/// Displays the presence dot and status text
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StatusOrb { status: card.status.clone() }
/// }
/// ```
#[component]
pub fn StatusOrb(props: StatusOrbProps) -> Element {
    let style = dot_style(&props.status.color);
    let label = props.status.label.clone();
    let since = props.status.since.clone();
    let tooltip = props.status.since_absolute.clone().unwrap_or_default();

    rsx! {
        div { class: "status-line",
            span {
                class: "status-dot",
                style: "{style}",
                role: "img",
                "aria-label": "{label}",
            }
            span { class: "status-text", "{label}" }
            span { class: "status-since", title: "{tooltip}", "{since}" }
        }
    }
}
