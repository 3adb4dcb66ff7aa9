use super::activation::on_key_up;
use super::container::ResultList;
use super::node::{Element, Node, Tag};
use crate::search::Item;

/// Class names carried by the default nodes.
pub mod class {
	pub const ITEM: &str = "isearchr__item";
	pub const INFO: &str = "isearchr__item-info";
	pub const TITLE: &str = "isearchr__item-title";
	pub const CATEGORY: &str = "isearchr__item-category";
}

/// Replace the container's children with one node per item, in order.
pub fn render<'a, I, F>(container: &mut ResultList, items: I, item_to_node: F)
where
	I: IntoIterator<Item = &'a Item>,
	F: Fn(&Item) -> Node,
{
	container.clear();
	for item in items {
		container.append(item_to_node(item));
	}
}

/// Replace the container's children with a single node.
///
/// The no-results path uses this so it follows the same clear-then-append
/// discipline as [`render`].
pub fn render_single(container: &mut ResultList, node: Node) {
	container.clear();
	container.append(node);
}

/// The default per-item node: a focusable entry wrapping a link to the item's
/// URL, with the name as title and the category as subtitle.
pub fn default_item_node(item: &Item) -> Node {
	let info = Element::new(Tag::Group)
		.class(class::INFO)
		.child(Element::new(Tag::Title).class(class::TITLE).text(&item.name))
		.child(
			Element::new(Tag::Subtitle)
				.class(class::CATEGORY)
				.text(&item.category),
		);

	Element::new(Tag::ListItem)
		.class(class::ITEM)
		.focusable()
		.on_key_up(on_key_up)
		.child(Element::link(&item.url).child(info))
		.into()
}

/// The default no-results node: one entry holding `message` verbatim.
pub fn default_no_results_node(message: &str) -> Node {
	Element::new(Tag::ListItem)
		.class(class::ITEM)
		.text(message)
		.into()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn items() -> Vec<Item> {
		vec![Item::new("Alice", "A", "/a"), Item::new("Bob", "B", "/b")]
	}

	#[test]
	fn render_replaces_previous_children() {
		let items = items();
		let mut container = ResultList::new();
		render(&mut container, &items, default_item_node);
		render(&mut container, &items[1..], default_item_node);

		assert_eq!(container.len(), 1);
		assert_eq!(container.children()[0].text_content(), "BobB");
	}

	#[test]
	fn default_item_node_shape() {
		let node = default_item_node(&Item::new("Alice", "A", "/a"));
		let entry = node.as_element().unwrap();

		assert_eq!(entry.tag(), Tag::ListItem);
		assert_eq!(entry.class_name(), Some(class::ITEM));
		assert!(entry.is_focusable());
		assert!(entry.key_up_handler().is_some());
		assert_eq!(entry.first_link().and_then(Element::href), Some("/a"));

		let title = entry
			.find_descendant(|el| el.class_name() == Some(class::TITLE))
			.unwrap();
		assert_eq!(title.tag(), Tag::Title);
		assert_eq!(title.text_content(), "Alice");
		let category = entry
			.find_descendant(|el| el.class_name() == Some(class::CATEGORY))
			.unwrap();
		assert_eq!(category.text_content(), "A");
	}

	#[test]
	fn no_results_node_keeps_message_verbatim() {
		let node = default_no_results_node("<b>nothing</b>");
		let entry = node.as_element().unwrap();
		assert_eq!(entry.text_content(), "<b>nothing</b>");
		assert!(!entry.is_focusable());
		assert!(entry.first_link().is_none());
	}
}
