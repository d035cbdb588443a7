//! Card state context for the desktop page.
//!
//! The card state lives in a `Signal<CardState>`; [`SignalSink`] lets the
//! core renderer write into it, and components read it through
//! [`use_card`]. Writes go straight to the signal, so every region
//! re-renders as soon as the renderer touches it.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! let card = use_signal(CardState::default);
//! use_context_provider(|| card);
//!
//! // In child components
//! let card = use_card();
//! rsx! { "{card.read().display_name}" }
//! ```

use dioxus::prelude::*;
use statuscard_core::presence::StatusView;
use statuscard_core::{ActivityView, CardConfig, CardState, QuoteFade, QuoteRemote, ViewSink};

/// Get the card configuration chosen on the command line.
pub fn get_card_config() -> CardConfig {
    crate::get_card_config()
}

/// View sink backed by a reactive signal.
#[derive(Clone, Copy)]
pub struct SignalSink(pub Signal<CardState>);

impl ViewSink for SignalSink {
    fn set_avatar(&mut self, url: &str) {
        self.0.write().set_avatar(url);
    }

    fn set_identity(&mut self, name: &str, tagline: &str) {
        self.0.write().set_identity(name, tagline);
    }

    fn set_status(&mut self, status: &StatusView) {
        self.0.write().set_status(status);
    }

    fn replace_activity(&mut self, activity: &ActivityView) {
        self.0.write().replace_activity(activity);
    }

    fn set_last_updated(&mut self, text: &str) {
        self.0.write().set_last_updated(text);
    }

    fn set_quote_count(&mut self, count: usize) {
        self.0.write().set_quote_count(count);
    }

    fn set_quote_text(&mut self, text: &str) {
        self.0.write().set_quote_text(text);
    }

    fn set_quote_fade(&mut self, fade: QuoteFade) {
        self.0.write().set_quote_fade(fade);
    }

    fn commit(&mut self) {
        self.0.write().commit();
    }
}

/// Hook to access the card state from context.
pub fn use_card() -> Signal<CardState> {
    use_context::<Signal<CardState>>()
}

/// Hook to request the next quote from any component.
pub fn use_quote_remote() -> QuoteRemote {
    use_context::<QuoteRemote>()
}

/// Pointer position and hover state for the cursor dot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    /// Over an interactive element
    pub dimmed: bool,
    /// Pointer has moved at least once
    pub visible: bool,
}

pub fn use_cursor() -> Signal<CursorState> {
    use_context::<Signal<CursorState>>()
}
