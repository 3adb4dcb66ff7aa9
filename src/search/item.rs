use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SetupError;

/// A searchable record. Only `name` is inspected by the filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
	pub name: String,
	#[serde(default)]
	pub category: String,
	pub url: String,
}

impl Item {
	pub fn new(
		name: impl Into<String>,
		category: impl Into<String>,
		url: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			category: category.into(),
			url: url.into(),
		}
	}
}

/// Parse a JSON array of items.
pub fn parse_items(json: &str) -> Result<Vec<Item>, serde_json::Error> {
	serde_json::from_str(json)
}

/// Read and parse an items file.
pub fn load_items(path: &Path) -> Result<Vec<Item>, SetupError> {
	let contents = fs::read_to_string(path).map_err(|source| SetupError::ReadItems {
		path: path.to_path_buf(),
		source,
	})?;
	let items = parse_items(&contents).map_err(|source| SetupError::ParseItems {
		path: path.to_path_buf(),
		source,
	})?;
	log::debug!("loaded {} items from {}", items.len(), path.display());
	Ok(items)
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	#[test]
	fn category_defaults_to_empty() {
		let items = parse_items(r#"[{"name": "Alice", "url": "/a"}]"#).unwrap();
		assert_eq!(items, vec![Item::new("Alice", "", "/a")]);
	}

	#[test]
	fn load_reports_the_offending_path() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "not json").unwrap();

		let err = load_items(file.path()).unwrap_err();
		assert!(matches!(err, SetupError::ParseItems { .. }));
		assert!(err.to_string().contains(&file.path().display().to_string()));
	}

	#[test]
	fn missing_file_is_a_read_error() {
		let dir = tempfile::tempdir().unwrap();
		let err = load_items(&dir.path().join("absent.json")).unwrap_err();
		assert!(matches!(err, SetupError::ReadItems { .. }));
	}
}
