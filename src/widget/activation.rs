use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::node::{Element, Node};
use crate::search::Navigation;

/// Key-up handler attached to rendered entries.
///
/// Enter activates the first link inside `target`, the keyboard equivalent of
/// clicking it. Any other key, or a target without a link, does nothing.
pub fn on_key_up(event: &KeyEvent, target: &Node) -> Option<Navigation> {
	if !is_activation_key(event) {
		return None;
	}
	let link = target.as_element()?.first_link()?;
	activate(link)
}

/// Enter arrives as `KeyCode::Enter` from most terminals and as a raw carriage
/// return (code 13) from some.
pub fn is_activation_key(event: &KeyEvent) -> bool {
	matches!(event.code, KeyCode::Enter | KeyCode::Char('\r'))
}

fn activate(link: &Element) -> Option<Navigation> {
	let url = link.href()?;
	log::info!("activating link {url}");
	Some(Navigation {
		url: url.to_string(),
	})
}
