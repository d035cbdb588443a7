//! Plain-text rendering of a card for the terminal.

use statuscard_core::presence::view::NO_ACTIVITY_TEXT;
use statuscard_core::{ActivityView, CardState};

const BAR_WIDTH: usize = 20;

/// `[#####---------------]` for a percentage in `[0, 100]`.
pub fn progress_bar(percent: f64) -> String {
    let clamped = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    };
    let filled = ((clamped / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    )
}

/// Multi-line text of everything visible on the card.
pub fn render_text(state: &CardState) -> String {
    let mut lines = vec![state.display_name.clone()];
    if !state.tagline.is_empty() {
        lines.push(state.tagline.clone());
    }

    let mut status = format!("* {}", state.status.label);
    if !state.status.since.is_empty() {
        status.push(' ');
        status.push_str(&state.status.since);
    }
    lines.push(status);

    if !state.last_updated.is_empty() {
        lines.push(state.last_updated.clone());
    }
    lines.push(String::new());

    match &state.activity {
        ActivityView::Music(music) => {
            lines.push(format!("~ {}", music.title));
            lines.push(format!("  {}", music.byline));
            lines.push(format!("  {}", progress_bar(music.progress_percent)));
            if let Some(caption) = &music.caption {
                lines.push(format!("  {}", caption));
            }
        }
        ActivityView::Activity(activity) => {
            lines.push(format!("> {}", activity.name));
            for extra in [&activity.details, &activity.state, &activity.caption]
                .into_iter()
                .flatten()
            {
                lines.push(format!("  {}", extra));
            }
        }
        ActivityView::Empty => lines.push(NO_ACTIVITY_TEXT.to_string()),
    }

    lines.push(String::new());
    lines.push(format!("\"{}\"", state.quote_text));
    if let Some(count) = state.quote_count {
        lines.push(format!("Quotes: {}", count));
    }

    lines.join("\n")
}
