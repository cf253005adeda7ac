//! Web UI components
//!
//! Page models and the HTML renderer for the browser interface.
//! Rendering is pure: records in, markup out.

pub mod page;
pub mod render;
pub mod theme;

pub use page::{Notice, NoticeLevel, Page, PageKind, Row};
pub use render::{render_detail, render_error, render_page, render_records};
pub use theme::Theme;
