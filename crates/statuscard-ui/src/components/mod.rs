//! Reusable card primitives.

mod artwork;
mod fade_box;
mod progress_bar;
mod status_orb;

pub use artwork::*;
pub use fade_box::*;
pub use progress_bar::*;
pub use status_orb::*;
