use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, ListState};

use super::input::SearchInput;
use super::theme::Theme;
use crate::search::Item;
use crate::widget::{SearchWidget, WidgetConfig};

/// Terminal front end around a [`SearchWidget`].
///
/// The input's value is fed into the widget after every edit; the list state
/// tracks which rendered entry holds keyboard focus.
pub struct App<'a> {
	pub(crate) widget: SearchWidget<'a>,
	pub search_input: SearchInput,
	pub list_state: ListState,
	pub(crate) input_title: Option<String>,
	pub theme: Theme,
}

impl<'a> App<'a> {
	pub fn new(items: &'a [Item], config: WidgetConfig) -> Self {
		let mut app = Self {
			widget: SearchWidget::new(items, config),
			search_input: SearchInput::new(""),
			list_state: ListState::default(),
			input_title: None,
			theme: Theme::default(),
		};
		app.apply_input_chrome();
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		self.apply_input_chrome();
	}

	pub fn set_input_title(&mut self, title: Option<String>) {
		self.input_title = title;
		self.apply_input_chrome();
	}

	/// Replace the input value and run the keystroke path for it.
	pub fn set_query(&mut self, value: &str) {
		self.search_input = SearchInput::new(value);
		self.apply_input_chrome();
		self.refresh_results();
	}

	pub fn widget(&self) -> &SearchWidget<'a> {
		&self.widget
	}

	/// Index of the focused result entry.
	pub fn focused(&self) -> Option<usize> {
		self.list_state.selected()
	}

	pub(crate) fn refresh_results(&mut self) {
		self.widget.on_keystroke(self.search_input.text());
		let first = self.widget.results().focusable_indices().next();
		self.list_state.select(first);
	}

	fn apply_input_chrome(&mut self) {
		let mut block = Block::default()
			.borders(Borders::BOTTOM)
			.border_style(self.theme.message);
		if let Some(title) = &self.input_title {
			block = block
				.title_bottom(Line::styled(title.clone(), self.theme.prompt));
		}
		self.search_input.set_block(block);
		self.search_input.set_style(Style::default());
	}
}
