use std::path::PathBuf;

use thiserror::Error;

/// Failures that can occur while preparing a search session.
///
/// Filtering, rendering, and activation never fail; everything that can go
/// wrong happens before the widget is constructed.
#[derive(Debug, Error)]
pub enum SetupError {
	#[error("failed to read items file {}", path.display())]
	ReadItems {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error(
		"items file {} is not a JSON array of {{name, category, url}} objects",
		path.display()
	)]
	ParseItems {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
	#[error("no items file configured; pass --items or set [items].path")]
	MissingItems,
}
