use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use isearchr::SetupError;
use isearchr::ui::theme;
use isearchr::widget::DEFAULT_NO_RESULTS_MESSAGE;

use crate::cli::CliArgs;

use super::resolved::ResolvedConfig;

/// Mirror of the configuration files before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	items: ItemsSection,
	ui: UiSection,
	log: LogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ItemsSection {
	path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	title: Option<String>,
	initial_query: Option<String>,
	theme: Option<String>,
	no_results_message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LogSection {
	file: Option<PathBuf>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the file and environment values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.items.clone() {
			self.items.path = Some(path);
		}
		if let Some(title) = cli.title.clone() {
			self.ui.title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(message) = cli.no_results_message.clone() {
			self.ui.no_results_message = Some(message);
		}
		if let Some(file) = cli.log_file.clone() {
			self.log.file = Some(file);
		}
	}

	/// Validate and fill defaults.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let mut items_path = self.items.path.ok_or(SetupError::MissingItems)?;
		if items_path.is_relative() {
			items_path = env::current_dir()
				.context("failed to resolve current directory for items file")?
				.join(items_path);
		}

		let theme_name = self.ui.theme.unwrap_or_else(|| "slate".to_string());
		let theme = theme::by_name(&theme_name).ok_or_else(|| {
			let known = theme::names().collect::<Vec<_>>().join(", ");
			anyhow!("unknown theme '{theme_name}' (available: {known})")
		})?;

		let no_results_message = self
			.ui
			.no_results_message
			.filter(|message| !message.trim().is_empty())
			.unwrap_or_else(|| DEFAULT_NO_RESULTS_MESSAGE.to_string());

		let title = self
			.ui
			.title
			.map(|title| title.trim().to_string())
			.filter(|title| !title.is_empty())
			.or_else(|| {
				items_path
					.file_stem()
					.and_then(|stem| stem.to_str())
					.map(str::to_string)
			});

		Ok(ResolvedConfig {
			items_path,
			title,
			initial_query: self.ui.initial_query.unwrap_or_default(),
			theme_name,
			theme,
			no_results_message,
			log_file: self.log.file,
		})
	}
}
