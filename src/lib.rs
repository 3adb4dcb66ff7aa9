//! Incremental search over an in-memory item list.
//!
//! [`widget::SearchWidget`] filters items by case-insensitive substring match
//! on every keystroke and rewrites a result list of structured nodes. The
//! [`ui`] module puts it behind a terminal prompt.

pub mod app_dirs;
pub mod error;
pub mod logging;
pub mod search;
pub mod ui;
pub mod widget;

pub use error::SetupError;
pub use search::{Item, Navigation, Query, SearchOutcome, filter, load_items};
pub use ui::{App, SessionOptions, Theme, run};
pub use widget::{ResultList, SearchWidget, SessionState, WidgetConfig};
