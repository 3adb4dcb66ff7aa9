//! The search filter widget.
//!
//! Input flows one way: [`SearchWidget::on_keystroke`] derives a query, runs
//! the filter, and rewrites the [`ResultList`] with nodes from the configured
//! renderers. Rendered entries carry a key-up handler ([`on_key_up`]) so Enter
//! on an entry activates its link.

mod activation;
mod config;
mod container;
pub mod markup;
mod node;
mod render;
mod session;

pub use activation::{is_activation_key, on_key_up};
pub use config::{DEFAULT_NO_RESULTS_MESSAGE, ItemRenderer, NoResultsRenderer, WidgetConfig};
pub use container::ResultList;
pub use node::{Element, KeyUpHandler, Node, Tag};
pub use render::{class, default_item_node, default_no_results_node, render, render_single};
pub use session::{SearchWidget, SessionState};
