//! Status Card Core Library
//!
//! A single-profile status card: live Discord presence polled from a public
//! presence API, plus a rotating quote loaded from a plain-text list.
//!
//! ## Overview
//!
//! - **Presence**: fetched every 15s, turned into a [`ViewModel`] by the pure
//!   [`build_view`], then written to a [`ViewSink`] through a [`Renderer`].
//!   Failures degrade the status line and keep everything else.
//! - **Quotes**: fetched once, shuffled, rotated every 8s with a fade. A
//!   manual advance restarts the period.
//!
//! Front ends provide the sink: the desktop page writes into a Dioxus signal,
//! the CLI into a terminal buffer.
//!
//! ## Quick Start
//!
//! ```ignore
//! use statuscard_core::{
//!     quote_channel, CardConfig, CardState, HttpProvider, QuoteDeck, StatusCard, SystemClock,
//! };
//! use std::{cell::RefCell, rc::Rc};
//!
//! let config = CardConfig::default();
//! let http = HttpProvider::new(&config)?;
//! let sink = Rc::new(RefCell::new(CardState::default()));
//! let (_remote, commands) = quote_channel();
//!
//! let mut card = StatusCard::new(&config, &http, &http, QuoteDeck::new(), sink, SystemClock);
//! card.run(commands).await;
//! ```

pub mod card;
pub mod clock;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod poller;
pub mod presence;
pub mod quotes;
pub mod render;
pub mod rotation;
pub mod source;
pub mod timer;

// Re-exports
pub use card::{Bootstrap, StatusCard};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::CardConfig;
pub use error::{ConfigError, LoadError, PresenceError};
pub use format::{format_absolute, format_clock, format_elapsed};
pub use logging::{read_entries, DiagnosticEntry, LoggingBuilder};
pub use poller::PresencePoller;
pub use presence::{build_view, parse_envelope, ActivityView, PresenceSnapshot, ViewModel};
pub use quotes::{parse_quotes, QuoteDeck};
pub use render::{CardState, QuoteFade, Renderer, ViewSink};
pub use rotation::{is_quote_hotkey, quote_channel, QuoteCommand, QuoteRemote, QuoteRotation};
pub use source::{HttpProvider, PresenceSource, QuoteSource};
pub use timer::DebouncedTimer;
