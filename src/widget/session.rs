use ratatui::crossterm::event::KeyEvent;

use super::config::WidgetConfig;
use super::container::ResultList;
use super::render::{render, render_single};
use crate::search::{Item, Navigation, Query, filter};

/// Where the session is after the latest keystroke.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
	/// The input is empty and the results are cleared.
	#[default]
	EmptyQuery,
	/// The results show `matches` entries, or the no-results entry when
	/// `matches` is zero.
	ActiveQuery { query: Query, matches: usize },
}

/// The search filter widget: owns the result list and rewrites it on every
/// keystroke from the borrowed item collection.
#[derive(Debug)]
pub struct SearchWidget<'a> {
	items: &'a [Item],
	config: WidgetConfig,
	results: ResultList,
	state: SessionState,
}

impl<'a> SearchWidget<'a> {
	pub fn new(items: &'a [Item], config: WidgetConfig) -> Self {
		log::debug!("search widget set up with {} items", items.len());
		Self {
			items,
			config,
			results: ResultList::new(),
			state: SessionState::EmptyQuery,
		}
	}

	/// Handle a keystroke given the input's current value.
	pub fn on_keystroke(&mut self, input_value: &str) -> &SessionState {
		let query = Query::from_input(input_value);
		if query.is_empty() {
			self.results.clear();
			self.state = SessionState::EmptyQuery;
			return &self.state;
		}

		let display = filter(&query, self.items);
		let matches = display.len();
		if matches > 0 {
			render(&mut self.results, display, |item| {
				(self.config.item_renderer)(item)
			});
		} else {
			let node = (self.config.no_results_renderer)(&self.config.no_results_message);
			render_single(&mut self.results, node);
		}
		log::trace!("query {query:?} matched {matches} items");

		self.state = SessionState::ActiveQuery { query, matches };
		&self.state
	}

	/// Dispatch a key-up event to the rendered entry at `index`.
	pub fn key_up(&self, index: usize, event: &KeyEvent) -> Option<Navigation> {
		self.results.get(index)?.dispatch_key_up(event)
	}

	pub fn results(&self) -> &ResultList {
		&self.results
	}

	pub fn state(&self) -> &SessionState {
		&self.state
	}
}
