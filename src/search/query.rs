use std::fmt;

/// The lower-cased input value driving the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
	/// Derive a query from the raw input value.
	///
	/// Whitespace is preserved: `"al "` and `"al"` are different queries.
	pub fn from_input(value: &str) -> Self {
		Self(value.to_lowercase())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// An empty query clears the results instead of matching everything.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Display for Query {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for Query {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
