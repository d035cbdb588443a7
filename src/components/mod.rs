//! UI Components for the status card page.

mod activity_block;
mod cursor;
mod profile_header;
mod quote_box;

pub use activity_block::ActivityBlock;
pub use cursor::{cursor_style, CursorDot, Hoverable};
pub use profile_header::ProfileHeader;
pub use quote_box::{quote_count_label, QuoteBox};
