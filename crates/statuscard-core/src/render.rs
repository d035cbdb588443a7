//! Applying view models to an output surface.
//!
//! A [`ViewSink`] is the set of already-resolved output regions of the
//! card (avatar, identity, status, activity, quote). The [`Renderer`]
//! writes whole regions on every call; it keeps no state of its own, so
//! whatever the sink shows is the only record of earlier renders.
//!
//! [`CardState`] is the in-memory sink used by tests and the headless CLI;
//! the desktop page wraps it in a reactive signal.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use crate::format::format_clock;
use crate::presence::{ActivityView, StatusView, ViewModel};

pub const QUOTES_FAILED_TEXT: &str = "Failed to load quotes.";
pub const QUOTES_LOADING_TEXT: &str = "Loading quotes…";

/// Presentation phase of the quote box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteFade {
    /// No transition applied yet
    #[default]
    None,
    /// Fading out before the text is swapped
    Exiting,
    /// New text visible, fading in
    Entering,
}

impl QuoteFade {
    /// CSS class tag for the quote box
    pub fn class(&self) -> &'static str {
        match self {
            QuoteFade::None => "",
            QuoteFade::Exiting => "fade-exit-active",
            QuoteFade::Entering => "fade-enter-active",
        }
    }
}

/// Output regions of the card.
///
/// Each setter replaces its region entirely. `commit` marks the end of a
/// logical update; sinks that repaint eagerly can ignore it.
pub trait ViewSink {
    fn set_avatar(&mut self, url: &str);
    fn set_identity(&mut self, name: &str, tagline: &str);
    fn set_status(&mut self, status: &StatusView);
    fn replace_activity(&mut self, activity: &ActivityView);
    fn set_last_updated(&mut self, text: &str);
    fn set_quote_count(&mut self, count: usize);
    fn set_quote_text(&mut self, text: &str);
    fn set_quote_fade(&mut self, fade: QuoteFade);

    fn commit(&mut self) {}
}

/// Snapshot of everything visible on the card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardState {
    pub avatar_url: String,
    pub display_name: String,
    pub tagline: String,
    pub status: StatusView,
    pub activity: ActivityView,
    pub last_updated: String,
    pub quote_text: String,
    pub quote_count: Option<usize>,
    pub quote_fade: QuoteFade,
    /// Number of commits applied so far
    pub commits: u64,
}

impl Default for CardState {
    fn default() -> Self {
        Self {
            avatar_url: String::new(),
            display_name: "Loading…".to_string(),
            tagline: String::new(),
            status: StatusView::degraded(),
            activity: ActivityView::Empty,
            last_updated: String::new(),
            quote_text: QUOTES_LOADING_TEXT.to_string(),
            quote_count: None,
            quote_fade: QuoteFade::None,
            commits: 0,
        }
    }
}

impl ViewSink for CardState {
    fn set_avatar(&mut self, url: &str) {
        self.avatar_url = url.to_string();
    }

    fn set_identity(&mut self, name: &str, tagline: &str) {
        self.display_name = name.to_string();
        self.tagline = tagline.to_string();
    }

    fn set_status(&mut self, status: &StatusView) {
        self.status = status.clone();
    }

    fn replace_activity(&mut self, activity: &ActivityView) {
        self.activity = activity.clone();
    }

    fn set_last_updated(&mut self, text: &str) {
        self.last_updated = text.to_string();
    }

    fn set_quote_count(&mut self, count: usize) {
        self.quote_count = Some(count);
    }

    fn set_quote_text(&mut self, text: &str) {
        self.quote_text = text.to_string();
    }

    fn set_quote_fade(&mut self, fade: QuoteFade) {
        self.quote_fade = fade;
    }

    fn commit(&mut self) {
        self.commits += 1;
    }
}

/// Shared single-threaded sink: the poller and the quote rotation each
/// hold a clone and write to the same card.
impl<S: ViewSink> ViewSink for Rc<RefCell<S>> {
    fn set_avatar(&mut self, url: &str) {
        self.borrow_mut().set_avatar(url);
    }

    fn set_identity(&mut self, name: &str, tagline: &str) {
        self.borrow_mut().set_identity(name, tagline);
    }

    fn set_status(&mut self, status: &StatusView) {
        self.borrow_mut().set_status(status);
    }

    fn replace_activity(&mut self, activity: &ActivityView) {
        self.borrow_mut().replace_activity(activity);
    }

    fn set_last_updated(&mut self, text: &str) {
        self.borrow_mut().set_last_updated(text);
    }

    fn set_quote_count(&mut self, count: usize) {
        self.borrow_mut().set_quote_count(count);
    }

    fn set_quote_text(&mut self, text: &str) {
        self.borrow_mut().set_quote_text(text);
    }

    fn set_quote_fade(&mut self, fade: QuoteFade) {
        self.borrow_mut().set_quote_fade(fade);
    }

    fn commit(&mut self) {
        self.borrow_mut().commit();
    }
}

/// Writes view models and quote transitions into a sink.
#[derive(Debug, Clone)]
pub struct Renderer<S> {
    sink: S,
}

impl<S: ViewSink> Renderer<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Replace every presence region with `model`.
    pub fn render(&mut self, model: &ViewModel) {
        self.sink.set_avatar(&model.avatar_url);
        self.sink
            .set_identity(&model.display_name, &model.tagline);
        self.sink.set_status(&model.status);
        self.sink.replace_activity(&model.activity);
        self.sink.commit();
    }

    /// `render`, plus the "Last updated" line for a successful poll at `updated_at_ms`.
    pub fn render_at(&mut self, model: &ViewModel, updated_at_ms: i64) {
        self.sink
            .set_last_updated(&format!("Last updated: {}", format_clock(updated_at_ms)));
        self.render(model);
    }

    /// Poll failure: force the status to offline/gray and clear since-text.
    ///
    /// Name, avatar and activity keep their last successful values.
    pub fn render_degraded(&mut self) {
        self.sink.set_status(&StatusView::degraded());
        self.sink.commit();
    }

    pub fn quote_count(&mut self, count: usize) {
        self.sink.set_quote_count(count);
        self.sink.commit();
    }

    pub fn quote_fade_out(&mut self) {
        self.sink.set_quote_fade(QuoteFade::Exiting);
        self.sink.commit();
    }

    /// Swap in the new quote and start the fade-in.
    pub fn quote_fade_in(&mut self, text: &str) {
        self.sink.set_quote_text(text);
        self.sink.set_quote_fade(QuoteFade::Entering);
        self.sink.commit();
    }

    pub fn quotes_failed(&mut self) {
        self.sink.set_quote_text(QUOTES_FAILED_TEXT);
        self.sink.commit();
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_inner(self) -> S {
        self.sink
    }
}
