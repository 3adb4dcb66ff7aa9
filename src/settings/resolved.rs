use std::path::PathBuf;

use isearchr::{Theme, WidgetConfig};

/// Application-ready configuration derived from config files, the
/// environment, and CLI arguments.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub items_path: PathBuf,
	pub title: Option<String>,
	pub initial_query: String,
	pub theme_name: String,
	pub theme: Theme,
	pub no_results_message: String,
	pub log_file: Option<PathBuf>,
}

impl ResolvedConfig {
	pub fn widget_config(&self) -> WidgetConfig {
		WidgetConfig::default().with_no_results_message(self.no_results_message.clone())
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Items file: {}", self.items_path.display());
		println!("  Theme: {}", self.theme_name);
		println!("  No-results message: {}", self.no_results_message);
		if let Some(title) = &self.title {
			println!("  Prompt title: {title}");
		}
		if !self.initial_query.is_empty() {
			println!("  Initial query: {}", self.initial_query);
		}
		match &self.log_file {
			Some(path) => println!("  Log file: {}", path.display()),
			None => println!("  Log file: (data directory)"),
		}
	}
}
