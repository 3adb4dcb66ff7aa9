//! Serialize node trees as escaped HTML-style markup.

use super::container::ResultList;
use super::node::{Element, Node};

pub fn to_markup(node: &Node) -> String {
	let mut out = String::new();
	write_node(node, &mut out);
	out
}

/// Markup for every child of the container, one entry per line.
pub fn list_markup(list: &ResultList) -> String {
	list.children()
		.iter()
		.map(to_markup)
		.collect::<Vec<_>>()
		.join("\n")
}

fn write_node(node: &Node, out: &mut String) {
	match node {
		Node::Text(text) => escape_into(text, out),
		Node::Element(element) => write_element(element, out),
	}
}

fn write_element(element: &Element, out: &mut String) {
	let tag = element.tag().name();
	out.push('<');
	out.push_str(tag);
	if let Some(href) = element.href() {
		write_attr("href", href, out);
	}
	if let Some(class) = element.class_name() {
		write_attr("class", class, out);
	}
	if element.is_focusable() {
		write_attr("tabindex", "0", out);
	}
	out.push('>');
	for child in element.children() {
		write_node(child, out);
	}
	out.push_str("</");
	out.push_str(tag);
	out.push('>');
}

fn write_attr(name: &str, value: &str, out: &mut String) {
	out.push(' ');
	out.push_str(name);
	out.push_str("=\"");
	escape_into(value, out);
	out.push('"');
}

fn escape_into(text: &str, out: &mut String) {
	for ch in text.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(ch),
		}
	}
}
