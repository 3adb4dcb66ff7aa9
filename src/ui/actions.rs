use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::App;
use crate::search::SearchOutcome;
use crate::widget::is_activation_key;

impl<'a> App<'a> {
	/// Process a key and return an outcome when the session ends.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<SearchOutcome> {
		if is_activation_key(&key) {
			return self.activate_focused(&key);
		}
		match key.code {
			KeyCode::Esc => {
				return Some(SearchOutcome::cancelled(self.search_input.text()));
			}
			KeyCode::Up | KeyCode::BackTab => self.move_focus_up(),
			KeyCode::Down | KeyCode::Tab => self.move_focus_down(),
			_ => {
				if self.search_input.input(key) {
					self.refresh_results();
				}
			}
		}
		None
	}

	fn activate_focused(&self, key: &KeyEvent) -> Option<SearchOutcome> {
		let index = self.list_state.selected()?;
		let navigation = self.widget.key_up(index, key)?;
		Some(SearchOutcome::navigated(self.search_input.text(), navigation))
	}

	fn move_focus_up(&mut self) {
		if let Some(selected) = self.list_state.selected()
			&& let Some(previous) = self
				.widget
				.results()
				.focusable_indices()
				.take_while(|&index| index < selected)
				.last()
		{
			self.list_state.select(Some(previous));
		}
	}

	fn move_focus_down(&mut self) {
		let selected = self.list_state.selected();
		let next = self
			.widget
			.results()
			.focusable_indices()
			.find(|&index| selected.is_none_or(|current| index > current));
		if next.is_some() {
			self.list_state.select(next);
		}
	}
}
