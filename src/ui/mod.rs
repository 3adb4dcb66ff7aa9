//! Interactive terminal front end.
//!
//! [`App`] wires a [`SearchInput`] to a [`crate::widget::SearchWidget`] and
//! draws the widget's result list. [`run`] is the one-call entry point used by
//! the binary.

mod actions;
pub mod input;
mod render;
mod runtime;
mod state;
pub mod theme;

use anyhow::Result;

pub use input::SearchInput;
pub use state::App;
pub use theme::Theme;

use crate::search::{Item, SearchOutcome};
use crate::widget::WidgetConfig;

/// Options for an interactive session beyond the widget configuration.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
	pub input_title: Option<String>,
	pub initial_query: String,
	pub theme: Theme,
}

/// Build an [`App`] for `items` and run it to completion.
pub fn run(items: &[Item], config: WidgetConfig, options: SessionOptions) -> Result<SearchOutcome> {
	let mut app = App::new(items, config);
	app.set_theme(options.theme);
	app.set_input_title(options.input_title);
	if !options.initial_query.is_empty() {
		app.set_query(&options.initial_query);
	}
	app.run()
}
