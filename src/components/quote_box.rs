//! Quote Box Component
//!
//! Current quote with its fade phase, the list size and a click/space hint.

use dioxus::prelude::*;
use statuscard_ui::FadeBox;

use crate::components::Hoverable;
use crate::context::{use_card, use_quote_remote};

/// `"Quotes: N"` once the list has loaded, empty before.
pub fn quote_count_label(count: Option<usize>) -> String {
    count.map(|n| format!("Quotes: {}", n)).unwrap_or_default()
}

#[component]
pub fn QuoteBox() -> Element {
    let card = use_card();
    let remote = use_quote_remote();
    let card = card.read();
    let count = quote_count_label(card.quote_count);

    rsx! {
        section { class: "quote-section",
            Hoverable {
                FadeBox {
                    fade: card.quote_fade,
                    onclick: move |_| {
                        remote.next();
                    },
                    p { class: "quote-text", "{card.quote_text}" }
                }
            }
            div { class: "quote-footer muted",
                span { class: "quote-count", "{count}" }
                span { class: "quote-hint", "space for next" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_label() {
        assert_eq!(quote_count_label(None), "");
        assert_eq!(quote_count_label(Some(3)), "Quotes: 3");
    }
}
