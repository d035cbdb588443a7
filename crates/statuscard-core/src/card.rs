//! Card orchestration: one-shot bootstrap, then the two independent loops.
//!
//! ```text
//! load quotes ─▶ first quote (random) ─┐
//!                                      ├─▶ presence poll loop (15s)
//! fetch presence once ─▶ render ───────┘   quote rotation loop (8s, re-armed)
//! ```
//!
//! Everything runs on the caller's task. Nothing here needs `Send`, so the
//! desktop page can drive it from its UI executor and the CLI from a
//! current-thread runtime.

use tokio::sync::mpsc;

use crate::clock::Clock;
use crate::config::CardConfig;
use crate::error::{LoadError, PresenceError};
use crate::poller::PresencePoller;
use crate::presence::{PresenceSnapshot, ViewModel};
use crate::quotes::QuoteDeck;
use crate::render::{Renderer, ViewSink};
use crate::rotation::{QuoteCommand, QuoteRotation};
use crate::source::{PresenceSource, QuoteSource};

/// Outcome of the bootstrap pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Bootstrap {
    pub quotes: Result<usize, LoadError>,
    pub first_quote: Option<String>,
    pub presence: Result<ViewModel, PresenceError>,
}

pub struct StatusCard<P, Q, S, C> {
    poller: PresencePoller<P, S, C>,
    rotation: QuoteRotation<Q, S>,
}

impl<P, Q, S, C> StatusCard<P, Q, S, C>
where
    P: PresenceSource,
    Q: QuoteSource,
    S: ViewSink + Clone,
    C: Clock,
{
    pub fn new(
        config: &CardConfig,
        presence: P,
        quotes: Q,
        deck: QuoteDeck,
        sink: S,
        clock: C,
    ) -> Self {
        Self {
            poller: PresencePoller::new(
                presence,
                Renderer::new(sink.clone()),
                clock,
                config.poll_interval(),
            ),
            rotation: QuoteRotation::new(
                quotes,
                deck,
                Renderer::new(sink),
                config.rotation_interval(),
                config.fade_delay(),
            ),
        }
    }

    /// Load quotes, then show the first quote while presence is fetched once.
    pub async fn bootstrap(&mut self) -> Bootstrap {
        let quotes = self.rotation.load().await;

        let (first_quote, presence) = tokio::join!(
            self.rotation.advance(true),
            self.poller.poll_once()
        );

        Bootstrap {
            quotes,
            first_quote,
            presence,
        }
    }

    /// Bootstrap, then run the poll loop and the quote rotation forever.
    pub async fn run(&mut self, commands: mpsc::UnboundedReceiver<QuoteCommand>) {
        let outcome = self.bootstrap().await;
        tracing::info!(
            quotes_loaded = outcome.quotes.is_ok(),
            presence_ok = outcome.presence.is_ok(),
            "Card bootstrapped"
        );

        tokio::join!(self.poller.run(), self.rotation.run(commands));
    }

    pub fn last_snapshot(&self) -> Option<&PresenceSnapshot> {
        self.poller.last_snapshot()
    }

    pub fn poller(&self) -> &PresencePoller<P, S, C> {
        &self.poller
    }

    pub fn rotation(&self) -> &QuoteRotation<Q, S> {
        &self.rotation
    }
}
