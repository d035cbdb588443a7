//! Quote rotation controller.
//!
//! Owns the deck and a [`DebouncedTimer`]. Every advance, automatic or
//! manual, re-arms the timer, so a manual advance is always followed by a
//! full quiet period. With an empty deck the timer is never armed.

use std::time::Duration;

use tokio::sync::mpsc;

use crate::error::LoadError;
use crate::quotes::QuoteDeck;
use crate::render::{Renderer, ViewSink};
use crate::source::QuoteSource;
use crate::timer::DebouncedTimer;

/// Requests sent to a running rotation from input handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteCommand {
    /// Show the next quote now and restart the rotation period
    Next,
}

/// Sending half handed to input handlers.
#[derive(Debug, Clone)]
pub struct QuoteRemote {
    tx: mpsc::UnboundedSender<QuoteCommand>,
}

impl QuoteRemote {
    /// Ask for the next quote. Returns false once the rotation has stopped.
    pub fn next(&self) -> bool {
        self.tx.send(QuoteCommand::Next).is_ok()
    }
}

pub fn quote_channel() -> (QuoteRemote, mpsc::UnboundedReceiver<QuoteCommand>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (QuoteRemote { tx }, rx)
}

/// Whether a key press should advance the quote.
///
/// `code` is the physical key code (`"Space"`); `focused_tag` is the tag of
/// the focused element, if any. Typing into a text field never advances.
pub fn is_quote_hotkey(code: &str, focused_tag: Option<&str>) -> bool {
    let typing = focused_tag
        .map(|tag| tag.eq_ignore_ascii_case("input") || tag.eq_ignore_ascii_case("textarea"))
        .unwrap_or(false);
    code == "Space" && !typing
}

pub struct QuoteRotation<Q, S> {
    source: Q,
    deck: QuoteDeck,
    renderer: Renderer<S>,
    timer: DebouncedTimer,
    fade_delay: Duration,
}

impl<Q, S> QuoteRotation<Q, S>
where
    Q: QuoteSource,
    S: ViewSink,
{
    pub fn new(
        source: Q,
        deck: QuoteDeck,
        renderer: Renderer<S>,
        period: Duration,
        fade_delay: Duration,
    ) -> Self {
        Self {
            source,
            deck,
            renderer,
            timer: DebouncedTimer::new(period),
            fade_delay,
        }
    }

    /// Fetch, parse and shuffle the quote list.
    ///
    /// Shows the count on success and the failure text otherwise. Arms no timer.
    pub async fn load(&mut self) -> Result<usize, LoadError> {
        let loaded = match self.source.fetch_quotes().await {
            Ok(text) => self.deck.load_text(&text),
            Err(e) => Err(e),
        };

        match loaded {
            Ok(count) => {
                tracing::info!(count, "Quotes loaded");
                self.renderer.quote_count(count);
                Ok(count)
            }
            Err(e) => {
                tracing::error!(error = %e, "Quotes error");
                self.renderer.quotes_failed();
                Err(e)
            }
        }
    }

    /// Pick the next quote, re-arm the timer and play the fade transition.
    ///
    /// No-op returning `None` while the deck is empty.
    pub async fn advance(&mut self, is_first: bool) -> Option<String> {
        let text = self.deck.advance(is_first)?.to_string();
        self.timer.reset();

        self.renderer.quote_fade_out();
        tokio::time::sleep(self.fade_delay).await;
        self.renderer.quote_fade_in(&text);

        tracing::debug!(index = self.deck.current_index(), "Quote advanced");
        Some(text)
    }

    /// Serve timer firings and manual commands forever.
    ///
    /// Commands are processed one at a time; a command arriving during a
    /// fade waits for it to finish. If every remote is dropped the rotation
    /// keeps running on its timer alone.
    pub async fn run(&mut self, mut commands: mpsc::UnboundedReceiver<QuoteCommand>) {
        let mut commands_open = true;

        loop {
            let fired = self.timer.fired();
            let listening = commands_open;
            let command = async {
                if listening {
                    commands.recv().await
                } else {
                    std::future::pending().await
                }
            };

            tokio::select! {
                _ = fired => {
                    self.advance(false).await;
                }
                cmd = command => match cmd {
                    Some(QuoteCommand::Next) => {
                        self.advance(false).await;
                    }
                    None => {
                        tracing::debug!("Quote command channel closed");
                        commands_open = false;
                    }
                },
            }
        }
    }

    pub fn deck(&self) -> &QuoteDeck {
        &self.deck
    }

    pub fn is_armed(&self) -> bool {
        self.timer.is_armed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotkey() {
        assert!(is_quote_hotkey("Space", None));
        assert!(is_quote_hotkey("Space", Some("div")));
        assert!(!is_quote_hotkey("Space", Some("INPUT")));
        assert!(!is_quote_hotkey("Space", Some("textarea")));
        assert!(!is_quote_hotkey("Enter", None));
    }

    #[test]
    fn test_remote_reports_closed_channel() {
        let (remote, rx) = quote_channel();
        assert!(remote.next());
        drop(rx);
        assert!(!remote.next());
    }
}
