//! Activity Block Component
//!
//! Exactly one of: the current track, one activity, or the empty line.
//! The block is rebuilt wholesale on every render and fades in.

use dioxus::prelude::*;
use statuscard_core::presence::view::NO_ACTIVITY_TEXT;
use statuscard_core::presence::{ActivityCard, MusicView};
use statuscard_core::ActivityView;
use statuscard_ui::{Artwork, ProgressBar};

use crate::context::use_card;

#[component]
pub fn ActivityBlock() -> Element {
    let card = use_card();
    let activity = card.read().activity.clone();

    rsx! {
        section { class: "activity-block fade-enter-active",
            match activity {
                ActivityView::Music(music) => rsx! { MusicPanel { music } },
                ActivityView::Activity(activity) => rsx! { ActivityPanel { activity } },
                ActivityView::Empty => rsx! { div { class: "muted", "{NO_ACTIVITY_TEXT}" } },
            }
        }
    }
}

#[component]
fn MusicPanel(music: MusicView) -> Element {
    rsx! {
        div { class: "spotify-container",
            Artwork {
                src: music.cover_url.clone(),
                alt: "Album cover".to_string(),
                class: "spotify-album".to_string(),
            }
            div { class: "spotify-info",
                div { class: "spotify-title", "{music.title}" }
                div { class: "spotify-artist", "{music.byline}" }
                ProgressBar { percent: music.progress_percent }
                if let Some(caption) = &music.caption {
                    div { class: "act-timestamp", "{caption}" }
                }
            }
        }
    }
}

#[component]
fn ActivityPanel(activity: ActivityCard) -> Element {
    rsx! {
        div { class: "activity",
            if let Some(url) = &activity.large_image_url {
                Artwork {
                    src: url.clone(),
                    alt: "activity large image".to_string(),
                    class: "act-art".to_string(),
                }
            }
            div { class: "act-meta",
                div { class: "act-name", "{activity.name}" }
                if let Some(details) = &activity.details {
                    div { class: "act-details", "{details}" }
                }
                if let Some(state) = &activity.state {
                    div { class: "act-details", "{state}" }
                }
                if let Some(caption) = &activity.caption {
                    div { class: "act-timestamp", "{caption}" }
                }
            }
        }
    }
}
