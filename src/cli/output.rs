use anyhow::Result;
use isearchr::widget::{Element, Node, ResultList, class, markup};
use isearchr::{SearchOutcome, SessionState};
use serde_json::{Value, json};

use super::OutputFormat;

/// Print the outcome of an interactive session.
pub(crate) fn print_outcome(format: OutputFormat, outcome: &SearchOutcome) -> Result<()> {
	match format {
		OutputFormat::Plain => println!("{}", format_outcome_plain(outcome)),
		OutputFormat::Json => println!("{}", format_outcome_json(outcome)?),
		OutputFormat::Markup => match outcome.url() {
			Some(url) => println!("{}", markup::to_markup(&Element::link(url).text(url).into())),
			None => println!("{}", format_outcome_plain(outcome)),
		},
	}
	Ok(())
}

/// Print the rendered results of a headless query.
pub(crate) fn print_results(
	format: OutputFormat,
	state: &SessionState,
	results: &ResultList,
) -> Result<()> {
	match format {
		OutputFormat::Plain => {
			for node in results.children() {
				println!("{}", format_entry_plain(node));
			}
		}
		OutputFormat::Json => println!("{}", format_results_json(state, results)?),
		OutputFormat::Markup => {
			if !results.is_empty() {
				println!("{}", markup::list_markup(results));
			}
		}
	}
	Ok(())
}

pub(crate) fn format_outcome_plain(outcome: &SearchOutcome) -> String {
	if !outcome.accepted {
		return format!("Search cancelled (query: '{}')", outcome.query);
	}
	match outcome.url() {
		Some(url) => url.to_string(),
		None => "No selection".to_string(),
	}
}

pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"url": outcome.url(),
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

fn class_text(node: &Node, class_name: &str) -> Option<String> {
	node.as_element()?
		.find_descendant(|element| element.class_name() == Some(class_name))
		.map(Element::text_content)
}

fn link_of(node: &Node) -> Option<&str> {
	node.as_element()?.first_link()?.href()
}

/// `title<TAB>category<TAB>url` for item entries, the text otherwise.
fn format_entry_plain(node: &Node) -> String {
	match (class_text(node, class::TITLE), link_of(node)) {
		(Some(title), Some(url)) => {
			let category = class_text(node, class::CATEGORY).unwrap_or_default();
			format!("{title}\t{category}\t{url}")
		}
		_ => node.text_content(),
	}
}

fn entry_json(node: &Node) -> Value {
	match link_of(node) {
		Some(url) => json!({
			"type": "item",
			"name": class_text(node, class::TITLE),
			"category": class_text(node, class::CATEGORY),
			"url": url,
		}),
		None => json!({
			"type": "message",
			"text": node.text_content(),
		}),
	}
}

pub(crate) fn format_results_json(state: &SessionState, results: &ResultList) -> Result<String> {
	let (query, matches) = match state {
		SessionState::EmptyQuery => (String::new(), 0),
		SessionState::ActiveQuery { query, matches } => (query.to_string(), *matches),
	};
	let entries: Vec<Value> = results.children().iter().map(entry_json).collect();
	let payload = json!({
		"query": query,
		"matches": matches,
		"entries": entries,
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

#[cfg(test)]
mod tests {
	use isearchr::{Item, Navigation, SearchWidget, WidgetConfig};

	use super::*;

	#[test]
	fn json_outcome_includes_url() {
		let outcome = SearchOutcome::navigated("al", Navigation { url: "/a".into() });

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["url"], "/a");
	}

	#[test]
	fn cancelled_outcome_plain_text() {
		let outcome = SearchOutcome::cancelled("bo");
		assert_eq!(format_outcome_plain(&outcome), "Search cancelled (query: 'bo')");
	}

	#[test]
	fn results_json_distinguishes_items_and_messages() {
		let items = vec![Item::new("Alice", "A", "/a"), Item::new("Bob", "B", "/b")];
		let mut widget = SearchWidget::new(&items, WidgetConfig::default());

		widget.on_keystroke("AL");
		let value: Value =
			serde_json::from_str(&format_results_json(widget.state(), widget.results()).unwrap())
				.unwrap();
		assert_eq!(value["query"], "al");
		assert_eq!(value["matches"], 1);
		assert_eq!(value["entries"][0]["type"], "item");
		assert_eq!(value["entries"][0]["name"], "Alice");
		assert_eq!(value["entries"][0]["url"], "/a");

		widget.on_keystroke("z");
		let value: Value =
			serde_json::from_str(&format_results_json(widget.state(), widget.results()).unwrap())
				.unwrap();
		assert_eq!(value["matches"], 0);
		assert_eq!(value["entries"][0]["type"], "message");
	}

	#[test]
	fn plain_entry_is_tab_separated() {
		let items = vec![Item::new("Alice", "A", "/a")];
		let mut widget = SearchWidget::new(&items, WidgetConfig::default());
		widget.on_keystroke("a");
		assert_eq!(format_entry_plain(&widget.results().children()[0]), "Alice\tA\t/a");
	}
}
