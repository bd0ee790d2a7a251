//! Text layout utilities.
//!
//! - [`wrap_text`] - Soft-wrap text to a column width
//! - [`visual_width`], [`truncate_to_width`] - Unicode-aware cell widths

mod width;
mod wrap;

pub use width::{truncate_to_width, visual_width};
pub use wrap::wrap_text;
