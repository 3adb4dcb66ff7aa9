/// Destination produced when a rendered link is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
	pub url: String,
}

/// Captures the outcome of an interactive search session.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
	pub accepted: bool,
	pub navigation: Option<Navigation>,
	pub query: String,
}

impl SearchOutcome {
	pub fn cancelled(query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			navigation: None,
			query: query.into(),
		}
	}

	pub fn navigated(query: impl Into<String>, navigation: Navigation) -> Self {
		Self {
			accepted: true,
			navigation: Some(navigation),
			query: query.into(),
		}
	}

	/// Return the activated URL, if the user navigated somewhere.
	#[must_use]
	pub fn url(&self) -> Option<&str> {
		self.navigation.as_ref().map(|nav| nav.url.as_str())
	}
}
