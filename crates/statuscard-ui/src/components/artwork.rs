//! Artwork Component
//!
//! Square image for avatars, album covers and activity art. An empty URL
//! renders a blank placeholder of the same size instead of a broken image.

use dioxus::prelude::*;

/// Properties for the Artwork component
#[derive(Clone, PartialEq, Props)]
pub struct ArtworkProps {
    /// Image URL; empty shows the placeholder
    pub src: String,
    pub alt: String,
    /// Wrapper class, e.g. `"pfp"` or `"spotify-album"`
    #[props(default = "art".to_string())]
    pub class: String,
}

#[component]
pub fn Artwork(props: ArtworkProps) -> Element {
    if props.src.is_empty() {
        return rsx! {
            div { class: "{props.class} art-blank", "aria-label": "{props.alt}" }
        };
    }

    rsx! {
        div { class: "{props.class}",
            img { src: "{props.src}", alt: "{props.alt}" }
        }
    }
}
