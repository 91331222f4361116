//! Presentation Layer
//!
//! Shapes the three lists into the page view model and renders it as HTML.

mod page;
mod render;

pub use page::ListsPage;
pub use render::{escape_html, render_index};
