//! Playback Progress Component

use dioxus::prelude::*;

/// Width style for a fill at `percent`, clamped to `[0, 100]`.
///
/// NaN reads as empty.
pub fn fill_style(percent: f64) -> String {
    let percent = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    };
    format!("width: {:.1}%;", percent)
}

/// Properties for the ProgressBar component
#[derive(Clone, PartialEq, Props)]
pub struct ProgressBarProps {
    /// Position in `[0, 100]`
    pub percent: f64,
}

/// Thin track with a filled portion, as under the current track title
#[component]
pub fn ProgressBar(props: ProgressBarProps) -> Element {
    let style = fill_style(props.percent);

    rsx! {
        div { class: "spotify-progress",
            div { class: "spotify-progress-bar", style: "{style}" }
        }
    }
}
