//! Fixed-period presence polling.
//!
//! Each tick fetches one snapshot, builds its view model and renders it.
//! Polls run one after another from a single loop, so a response can never
//! overtake a newer one. A failed poll degrades the status region and the
//! next tick simply tries again.

use std::time::Duration;

use tokio::time::MissedTickBehavior;

use crate::clock::Clock;
use crate::error::PresenceError;
use crate::presence::{build_view, PresenceSnapshot, ViewModel};
use crate::render::{Renderer, ViewSink};
use crate::source::PresenceSource;

pub struct PresencePoller<P, S, C> {
    source: P,
    renderer: Renderer<S>,
    clock: C,
    period: Duration,
    last_snapshot: Option<PresenceSnapshot>,
    sequence: u64,
}

impl<P, S, C> PresencePoller<P, S, C>
where
    P: PresenceSource,
    S: ViewSink,
    C: Clock,
{
    pub fn new(source: P, renderer: Renderer<S>, clock: C, period: Duration) -> Self {
        Self {
            source,
            renderer,
            clock,
            period,
            last_snapshot: None,
            sequence: 0,
        }
    }

    /// Fetch and render one snapshot.
    ///
    /// On failure the status is forced offline and the previous snapshot
    /// stays as the last known one.
    pub async fn poll_once(&mut self) -> Result<ViewModel, PresenceError> {
        self.sequence += 1;
        let seq = self.sequence;
        tracing::debug!(seq, "Polling presence");

        match self.source.fetch_presence().await {
            Ok(snapshot) => {
                let now = self.clock.now_ms();
                let model = build_view(&snapshot, now);
                self.renderer.render_at(&model, now);
                tracing::debug!(
                    seq,
                    status = %model.status.label,
                    variant = model.activity.variant_name(),
                    "Presence updated"
                );
                self.last_snapshot = Some(snapshot);
                Ok(model)
            }
            Err(e) => {
                tracing::error!(seq, error = %e, "Presence poll failed");
                self.renderer.render_degraded();
                Err(e)
            }
        }
    }

    /// Poll forever, one full period after the previous poll.
    ///
    /// The first poll happens one period from now; bootstrap performs the
    /// immediate one.
    pub async fn run(&mut self) {
        let start = tokio::time::Instant::now() + self.period;
        let mut ticker = tokio::time::interval_at(start, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            // Errors are already logged and rendered.
            let _ = self.poll_once().await;
        }
    }

    /// Most recent successfully fetched snapshot.
    pub fn last_snapshot(&self) -> Option<&PresenceSnapshot> {
        self.last_snapshot.as_ref()
    }

    /// Number of polls attempted so far.
    pub fn polls(&self) -> u64 {
        self.sequence
    }
}
