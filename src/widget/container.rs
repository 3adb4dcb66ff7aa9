use super::node::Node;

/// The results anchor. Its children are owned and rewritten by the renderer;
/// nothing else mutates them.
#[derive(Debug, Clone, Default)]
pub struct ResultList {
	children: Vec<Node>,
}

impl ResultList {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn clear(&mut self) {
		self.children.clear();
	}

	pub fn append(&mut self, node: Node) {
		self.children.push(node);
	}

	pub fn children(&self) -> &[Node] {
		&self.children
	}

	pub fn get(&self, index: usize) -> Option<&Node> {
		self.children.get(index)
	}

	pub fn len(&self) -> usize {
		self.children.len()
	}

	pub fn is_empty(&self) -> bool {
		self.children.is_empty()
	}

	/// Indices of children that can take keyboard focus.
	pub fn focusable_indices(&self) -> impl Iterator<Item = usize> + '_ {
		self.children
			.iter()
			.enumerate()
			.filter(|(_, node)| node.is_focusable())
			.map(|(index, _)| index)
	}
}
