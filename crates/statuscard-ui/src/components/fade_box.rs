//! Fade Box Component
//!
//! Container whose class follows a [`QuoteFade`] phase. The stylesheet
//! animates opacity between `fade-exit-active` and `fade-enter-active`.

use dioxus::prelude::*;
use statuscard_core::render::QuoteFade;

/// Full class list for a box with base class `base` in phase `fade`.
pub fn fade_class(base: &str, fade: QuoteFade) -> String {
    match fade.class() {
        "" => base.to_string(),
        phase => format!("{} {}", base, phase),
    }
}

/// Properties for the FadeBox component
#[derive(Clone, PartialEq, Props)]
pub struct FadeBoxProps {
    pub fade: QuoteFade,
    /// Base CSS class
    #[props(default = "quote-box".to_string())]
    pub class: String,
    /// Marks the box as clickable for the cursor effect
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    pub children: Element,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FadeBox { fade: card.quote_fade, onclick: move |_| remote.next(),
///         p { "{card.quote_text}" }
///     }
/// }
/// ```
#[component]
pub fn FadeBox(props: FadeBoxProps) -> Element {
    let mut class = fade_class(&props.class, props.fade);
    if props.onclick.is_some() {
        class.push_str(" clickable");
    }

    rsx! {
        div {
            class: "{class}",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}
