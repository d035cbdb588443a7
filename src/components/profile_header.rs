//! Profile Header Component
//!
//! Avatar, display name, tagline and the presence line.

use dioxus::prelude::*;
use statuscard_ui::{Artwork, StatusOrb};

use crate::context::use_card;

#[component]
pub fn ProfileHeader() -> Element {
    let card = use_card();
    let card = card.read();

    rsx! {
        header { class: "profile",
            Artwork {
                src: card.avatar_url.clone(),
                alt: "avatar".to_string(),
                class: "pfp".to_string(),
            }
            div { class: "identity",
                h1 { class: "display-name", "{card.display_name}" }
                div { class: "tagline", "{card.tagline}" }
                StatusOrb { status: card.status.clone() }
                if !card.last_updated.is_empty() {
                    div { class: "last-updated muted", "{card.last_updated}" }
                }
            }
        }
    }
}
