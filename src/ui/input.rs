use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use tui_textarea::TextArea;

/// Single-line text input backing the search prompt.
#[derive(Debug, Clone)]
pub struct SearchInput {
	textarea: TextArea<'static>,
}

impl SearchInput {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(tui_textarea::CursorMove::End);
		Self { textarea }
	}

	/// The current value.
	pub fn text(&self) -> &str {
		self.textarea.lines().first().map(String::as_str).unwrap_or("")
	}

	/// Feed a key to the input. Returns whether the value changed.
	///
	/// Keys that would insert a line break are dropped so the value stays on
	/// one line.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if is_newline(&key) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn set_block(&mut self, block: Block<'static>) {
		self.textarea.set_block(block);
	}

	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn is_newline(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter | KeyCode::Char('\r') => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_and_deleting_updates_the_value() {
		let mut input = SearchInput::new("");
		assert!(input.input(key(KeyCode::Char('a'))));
		assert!(input.input(key(KeyCode::Char('l'))));
		assert_eq!(input.text(), "al");
		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "a");
	}

	#[test]
	fn enter_does_not_split_the_line() {
		let mut input = SearchInput::new("bob");
		assert!(!input.input(key(KeyCode::Enter)));
		assert_eq!(input.text(), "bob");
	}

	#[test]
	fn initial_value_keeps_cursor_at_end() {
		let mut input = SearchInput::new("al");
		input.input(key(KeyCode::Char('i')));
		assert_eq!(input.text(), "ali");
	}

	#[test]
	fn cursor_movement_is_not_a_change() {
		let mut input = SearchInput::new("al");
		assert!(!input.input(key(KeyCode::Left)));
	}
}
