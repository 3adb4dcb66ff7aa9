//! Structured render nodes.
//!
//! Rendered results are trees of [`Node`]s rather than markup strings, so the
//! shape of the output can be inspected directly and text is never
//! reinterpreted as structure. [`super::markup`] serializes a tree with
//! escaping when a textual form is needed.

use ratatui::crossterm::event::KeyEvent;

use crate::search::Navigation;

/// Handler invoked when a key is released over a focusable entry. Receives the
/// entry the event was dispatched to.
pub type KeyUpHandler = fn(&KeyEvent, &Node) -> Option<Navigation>;

/// Element kinds understood by the terminal renderer and the markup
/// serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
	/// A result list entry (`li`).
	ListItem,
	/// A navigable link (`a`).
	Link,
	/// A grouping wrapper (`div`).
	Group,
	/// Heading text (`h3`).
	Title,
	/// Secondary text (`p`).
	Subtitle,
}

impl Tag {
	pub fn name(self) -> &'static str {
		match self {
			Self::ListItem => "li",
			Self::Link => "a",
			Self::Group => "div",
			Self::Title => "h3",
			Self::Subtitle => "p",
		}
	}
}

#[derive(Debug, Clone)]
pub enum Node {
	Element(Element),
	Text(String),
}

#[derive(Debug, Clone)]
pub struct Element {
	tag: Tag,
	class: Option<String>,
	href: Option<String>,
	focusable: bool,
	on_key_up: Option<KeyUpHandler>,
	children: Vec<Node>,
}

impl Element {
	pub fn new(tag: Tag) -> Self {
		Self {
			tag,
			class: None,
			href: None,
			focusable: false,
			on_key_up: None,
			children: Vec::new(),
		}
	}

	/// A link pointing at `href`.
	pub fn link(href: impl Into<String>) -> Self {
		let mut link = Self::new(Tag::Link);
		link.href = Some(href.into());
		link
	}

	#[must_use]
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}

	/// Make the element reachable by keyboard focus.
	#[must_use]
	pub fn focusable(mut self) -> Self {
		self.focusable = true;
		self
	}

	#[must_use]
	pub fn on_key_up(mut self, handler: KeyUpHandler) -> Self {
		self.on_key_up = Some(handler);
		self
	}

	#[must_use]
	pub fn child(mut self, node: impl Into<Node>) -> Self {
		self.children.push(node.into());
		self
	}

	#[must_use]
	pub fn text(self, text: impl Into<String>) -> Self {
		self.child(Node::Text(text.into()))
	}

	pub fn tag(&self) -> Tag {
		self.tag
	}

	pub fn class_name(&self) -> Option<&str> {
		self.class.as_deref()
	}

	pub fn href(&self) -> Option<&str> {
		self.href.as_deref()
	}

	pub fn is_focusable(&self) -> bool {
		self.focusable
	}

	pub fn key_up_handler(&self) -> Option<KeyUpHandler> {
		self.on_key_up
	}

	pub fn children(&self) -> &[Node] {
		&self.children
	}

	/// Depth-first search of the descendants, excluding `self`.
	pub fn find_descendant(&self, predicate: impl Fn(&Element) -> bool) -> Option<&Element> {
		let mut stack: Vec<&Node> = self.children.iter().rev().collect();
		while let Some(node) = stack.pop() {
			if let Node::Element(element) = node {
				if predicate(element) {
					return Some(element);
				}
				stack.extend(element.children.iter().rev());
			}
		}
		None
	}

	/// The first link below this element in document order.
	pub fn first_link(&self) -> Option<&Element> {
		self.find_descendant(|element| element.tag == Tag::Link)
	}

	/// Concatenated text of every descendant text node.
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		collect_text(&self.children, &mut out);
		out
	}
}

fn collect_text(nodes: &[Node], out: &mut String) {
	for node in nodes {
		match node {
			Node::Text(text) => out.push_str(text),
			Node::Element(element) => collect_text(&element.children, out),
		}
	}
}

impl Node {
	pub fn as_element(&self) -> Option<&Element> {
		match self {
			Self::Element(element) => Some(element),
			Self::Text(_) => None,
		}
	}

	pub fn text_content(&self) -> String {
		match self {
			Self::Text(text) => text.clone(),
			Self::Element(element) => element.text_content(),
		}
	}

	pub fn is_focusable(&self) -> bool {
		self.as_element().is_some_and(Element::is_focusable)
	}

	/// Deliver a key-up event to this node's handler, if it has one.
	pub fn dispatch_key_up(&self, event: &KeyEvent) -> Option<Navigation> {
		let handler = self.as_element()?.key_up_handler()?;
		handler(event, self)
	}
}

impl From<Element> for Node {
	fn from(element: Element) -> Self {
		Self::Element(element)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn first_link_is_found_in_document_order() {
		let tree = Element::new(Tag::ListItem)
			.child(Element::new(Tag::Group).child(Element::link("/deep")))
			.child(Element::link("/shallow"));
		assert_eq!(tree.first_link().and_then(Element::href), Some("/deep"));
	}

	#[test]
	fn first_link_ignores_the_element_itself() {
		let link = Element::link("/self").text("self");
		assert!(link.first_link().is_none());
	}

	#[test]
	fn text_content_joins_descendants() {
		let tree = Element::new(Tag::ListItem)
			.child(Element::new(Tag::Title).text("Alice"))
			.child(Element::new(Tag::Subtitle).text("A"));
		assert_eq!(tree.text_content(), "AliceA");
	}
}
