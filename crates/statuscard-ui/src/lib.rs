//! Status Card UI Components
//!
//! Small Dioxus primitives the desktop page assembles into the card. Each
//! one maps a piece of view-model data onto a fixed CSS class vocabulary;
//! the page's stylesheet owns the look.
//!
//! ## Class Vocabulary
//!
//! - `status-dot`, `status-text`, `status-since`: presence line
//! - `spotify-progress`, `spotify-progress-bar`: playback bar
//! - `quote-box` plus `fade-exit-active` / `fade-enter-active`: quote transitions
//! - `art`, `art-blank`: cover and activity images

pub mod components;

pub use components::*;
