use dioxus::prelude::*;
use statuscard_core::{
    is_quote_hotkey, quote_channel, CardState, HttpProvider, QuoteDeck, StatusCard, SystemClock,
};

use crate::components::{ActivityBlock, CursorDot, ProfileHeader, QuoteBox};
use crate::context::{get_card_config, CursorState, SignalSink};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the card state and the quote remote, and starts
/// the card loops once on mount.
#[component]
pub fn App() -> Element {
    let card: Signal<CardState> = use_signal(CardState::default);
    let mut cursor: Signal<CursorState> = use_signal(CursorState::default);

    use_context_provider(|| card);
    use_context_provider(|| cursor);

    // Start the card exactly once; the remote outlives every render.
    let remote = use_hook(|| {
        let (remote, commands) = quote_channel();
        let config = get_card_config();

        spawn(async move {
            let http = match HttpProvider::new(&config) {
                Ok(http) => http,
                Err(e) => {
                    tracing::error!("Failed to build HTTP client: {}", e);
                    return;
                }
            };

            let mut status_card = StatusCard::new(
                &config,
                http.clone(),
                http,
                QuoteDeck::new(),
                SignalSink(card),
                SystemClock,
            );
            status_card.run(commands).await;
        });

        remote
    });
    use_context_provider(|| remote.clone());

    let key_remote = remote.clone();

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            class: "page",
            tabindex: "0",
            autofocus: true,
            onkeydown: move |evt: KeyboardEvent| {
                if is_quote_hotkey(&evt.code().to_string(), None) {
                    evt.prevent_default();
                    key_remote.next();
                }
            },
            onmousemove: move |evt: MouseEvent| {
                let point = evt.client_coordinates();
                let mut state = cursor.write();
                state.x = point.x;
                state.y = point.y;
                state.visible = true;
            },
            main { class: "card",
                ProfileHeader {}
                ActivityBlock {}
                QuoteBox {}
            }
            CursorDot {}
        }
    }
}
