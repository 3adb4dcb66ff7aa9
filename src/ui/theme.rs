use ratatui::style::{Color, Modifier, Style};

use crate::widget::class;

/// Styles for the prompt and the rendered result entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub prompt: Style,
	pub title: Style,
	pub category: Style,
	pub message: Style,
	pub focus: Style,
}

pub const SLATE: Theme = Theme {
	prompt: Style::new().fg(Color::LightCyan),
	title: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.add_modifier(Modifier::BOLD),
	category: Style::new().fg(Color::Rgb(148, 163, 184)),
	message: Style::new().fg(Color::DarkGray),
	focus: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
};

pub const LIGHT: Theme = Theme {
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	title: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	category: Style::new().fg(Color::Rgb(100, 100, 100)),
	message: Style::new().fg(Color::Rgb(100, 100, 100)),
	focus: Style::new()
		.bg(Color::Rgb(200, 200, 200))
		.fg(Color::Rgb(120, 120, 0)),
};

const THEMES: &[(&str, Theme)] = &[("slate", SLATE), ("light", LIGHT)];

impl Default for Theme {
	fn default() -> Self {
		SLATE
	}
}

impl Theme {
	/// Style for text inside an element of the given class.
	pub fn style_for_class(&self, class_name: Option<&str>) -> Style {
		match class_name {
			Some(class::TITLE) => self.title,
			Some(class::CATEGORY) => self.category,
			_ => self.message,
		}
	}
}

/// Look up a built-in theme, ignoring case.
pub fn by_name(name: &str) -> Option<Theme> {
	THEMES
		.iter()
		.find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
		.map(|(_, theme)| *theme)
}

pub fn names() -> impl Iterator<Item = &'static str> {
	THEMES.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_is_case_insensitive() {
		assert_eq!(by_name("LIGHT"), Some(LIGHT));
		assert_eq!(by_name("missing"), None);
		assert!(names().any(|name| name == "slate"));
	}
}
