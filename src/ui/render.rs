use ratatui::{
	Frame,
	layout::{Constraint, Direction, Layout, Margin, Rect},
	text::{Line, Span},
	widgets::{List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::App;
use super::theme::Theme;
use crate::widget::{Element, Node, class};

const INPUT_HEIGHT: u16 = 2;
const COLUMN_GAP: usize = 2;

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Length(INPUT_HEIGHT), Constraint::Min(1)])
			.split(area);

		self.search_input.render(frame, layout[0]);
		self.render_results(frame, layout[1]);
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		let nodes = self.widget.results().children();
		let title_width = nodes
			.iter()
			.filter_map(title_of)
			.map(|title| title.width())
			.max()
			.unwrap_or(0);

		let lines: Vec<ListItem> = nodes
			.iter()
			.map(|node| ListItem::new(entry_line(node, title_width, &self.theme)))
			.collect();

		let list = List::new(lines).highlight_style(self.theme.focus);
		frame.render_stateful_widget(list, area, &mut self.list_state);
	}
}

fn find_class<'n>(node: &'n Node, class_name: &str) -> Option<&'n Element> {
	node.as_element()?
		.find_descendant(|element| element.class_name() == Some(class_name))
}

fn title_of(node: &Node) -> Option<String> {
	find_class(node, class::TITLE).map(Element::text_content)
}

/// One line per entry: the title padded to a shared column, then the
/// category. Entries without a title render their text content.
fn entry_line(node: &Node, title_width: usize, theme: &Theme) -> Line<'static> {
	let Some(title) = title_of(node) else {
		let style = theme.style_for_class(node.as_element().and_then(Element::class_name));
		return Line::from(Span::styled(node.text_content(), style));
	};

	let mut spans = vec![Span::styled(title.clone(), theme.title)];
	if let Some(category) = find_class(node, class::CATEGORY).map(Element::text_content)
		&& !category.is_empty()
	{
		let padding = title_width.saturating_sub(title.width()) + COLUMN_GAP;
		spans.push(Span::raw(" ".repeat(padding)));
		spans.push(Span::styled(category, theme.category));
	}
	Line::from(spans)
}

#[cfg(test)]
mod tests {
	use ratatui::{Terminal, backend::TestBackend};

	use super::*;
	use crate::search::Item;
	use crate::widget::WidgetConfig;

	fn screen(app: &mut App<'_>, width: u16, height: u16) -> Vec<String> {
		let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
		terminal.draw(|frame| app.draw(frame)).unwrap();
		let buffer = terminal.backend().buffer();
		(0..height)
			.map(|y| {
				(0..width)
					.map(|x| buffer[(x, y)].symbol())
					.collect::<String>()
					.trim_end()
					.to_string()
			})
			.collect()
	}

	fn items() -> Vec<Item> {
		vec![
			Item::new("Alice", "Engineering", "/a"),
			Item::new("Bob", "Sales", "/b"),
			Item::new("Al", "Support", "/al"),
		]
	}

	#[test]
	fn matches_render_title_and_aligned_category() {
		let items = items();
		let mut app = App::new(&items, WidgetConfig::default());
		app.set_query("al");

		let rows = screen(&mut app, 40, 6);
		assert!(rows[0].contains("al"), "{rows:?}");
		assert_eq!(rows[2], " Alice  Engineering");
		assert_eq!(rows[3], " Al     Support");
		assert_eq!(rows[4], "");
	}

	#[test]
	fn no_results_message_is_rendered() {
		let items = items();
		let mut app = App::new(&items, WidgetConfig::default());
		app.set_query("zzz");

		let rows = screen(&mut app, 40, 5);
		assert_eq!(rows[2], " No items found matching that search term");
		assert_eq!(rows[3], "");
	}

	#[test]
	fn empty_query_renders_no_entries() {
		let items = items();
		let mut app = App::new(&items, WidgetConfig::default());
		app.set_query("b");
		app.set_query("");

		let rows = screen(&mut app, 40, 5);
		assert!(rows[2..].iter().all(String::is_empty), "{rows:?}");
	}

	#[test]
	fn input_title_is_shown_on_the_prompt() {
		let items = items();
		let mut app = App::new(&items, WidgetConfig::default());
		app.set_input_title(Some("People".into()));

		let rows = screen(&mut app, 40, 4);
		assert!(rows[1].contains("People"), "{rows:?}");
	}
}
