//! View sink that reprints the card whenever its text changes.

use std::io::Write;

use statuscard_core::presence::StatusView;
use statuscard_core::{ActivityView, CardState, QuoteFade, ViewSink};

use crate::text::render_text;

const SEPARATOR: &str = "----------------------------------------";

/// Keeps a [`CardState`] and writes a frame to `out` on every commit that
/// changes the rendered text. Fade-phase-only commits print nothing.
pub struct TerminalSink<W> {
    state: CardState,
    last_frame: String,
    frames: u64,
    out: W,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            state: CardState::default(),
            last_frame: String::new(),
            frames: 0,
            out,
        }
    }

    pub fn state(&self) -> &CardState {
        &self.state
    }

    /// Frames printed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ViewSink for TerminalSink<W> {
    fn set_avatar(&mut self, url: &str) {
        self.state.set_avatar(url);
    }

    fn set_identity(&mut self, name: &str, tagline: &str) {
        self.state.set_identity(name, tagline);
    }

    fn set_status(&mut self, status: &StatusView) {
        self.state.set_status(status);
    }

    fn replace_activity(&mut self, activity: &ActivityView) {
        self.state.replace_activity(activity);
    }

    fn set_last_updated(&mut self, text: &str) {
        self.state.set_last_updated(text);
    }

    fn set_quote_count(&mut self, count: usize) {
        self.state.set_quote_count(count);
    }

    fn set_quote_text(&mut self, text: &str) {
        self.state.set_quote_text(text);
    }

    fn set_quote_fade(&mut self, fade: QuoteFade) {
        self.state.set_quote_fade(fade);
    }

    fn commit(&mut self) {
        self.state.commit();

        let frame = render_text(&self.state);
        if frame == self.last_frame {
            return;
        }

        let written = if self.frames > 0 {
            writeln!(self.out, "{}\n{}", SEPARATOR, frame)
        } else {
            writeln!(self.out, "{}", frame)
        };
        if let Err(e) = written.and_then(|_| self.out.flush()) {
            tracing::warn!("Failed to print card: {}", e);
        }

        self.frames += 1;
        self.last_frame = frame;
    }
}
