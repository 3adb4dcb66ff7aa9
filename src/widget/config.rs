use std::fmt;
use std::sync::Arc;

use super::node::Node;
use super::render::{default_item_node, default_no_results_node};
use crate::search::Item;

/// Message shown when a non-empty query matches nothing.
pub const DEFAULT_NO_RESULTS_MESSAGE: &str = "No items found matching that search term";

/// Builds the node for one matching item.
pub type ItemRenderer = Arc<dyn Fn(&Item) -> Node + Send + Sync>;

/// Builds the node shown in place of results when nothing matches.
pub type NoResultsRenderer = Arc<dyn Fn(&str) -> Node + Send + Sync>;

/// Widget configuration, resolved once when the widget is built.
///
/// Every field has a default:
/// - `item_renderer`: [`default_item_node`]
/// - `no_results_renderer`: [`default_no_results_node`]
/// - `no_results_message`: [`DEFAULT_NO_RESULTS_MESSAGE`]
#[derive(Clone)]
pub struct WidgetConfig {
	pub item_renderer: ItemRenderer,
	pub no_results_renderer: NoResultsRenderer,
	pub no_results_message: String,
}

impl Default for WidgetConfig {
	fn default() -> Self {
		Self {
			item_renderer: Arc::new(default_item_node),
			no_results_renderer: Arc::new(default_no_results_node),
			no_results_message: DEFAULT_NO_RESULTS_MESSAGE.to_string(),
		}
	}
}

impl WidgetConfig {
	#[must_use]
	pub fn with_item_renderer(
		mut self,
		renderer: impl Fn(&Item) -> Node + Send + Sync + 'static,
	) -> Self {
		self.item_renderer = Arc::new(renderer);
		self
	}

	#[must_use]
	pub fn with_no_results_renderer(
		mut self,
		renderer: impl Fn(&str) -> Node + Send + Sync + 'static,
	) -> Self {
		self.no_results_renderer = Arc::new(renderer);
		self
	}

	#[must_use]
	pub fn with_no_results_message(mut self, message: impl Into<String>) -> Self {
		self.no_results_message = message.into();
		self
	}
}

impl fmt::Debug for WidgetConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("WidgetConfig")
			.field("no_results_message", &self.no_results_message)
			.finish_non_exhaustive()
	}
}
