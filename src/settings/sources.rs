use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, Environment, File};

use crate::cli::CliArgs;
use isearchr::app_dirs::AppDirs;

const LOCAL_CONFIG: &str = ".isearchr.toml";
const ENV_PREFIX: &str = "isearchr";

/// Stack the settings layers, later ones winning: the user config file, the
/// project-local `.isearchr.toml`, each `--config` file in order, then
/// `ISEARCHR__SECTION__KEY` variables. CLI flags are applied afterwards.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let defaults = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};
	file_layers(&defaults, &cli.config)
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.separator("__")
				.try_parsing(true),
		)
		.build()
		.context("failed to assemble configuration")
}

/// Implicit config files, lowest precedence first. Missing ones are skipped.
pub(crate) fn default_config_files() -> Vec<PathBuf> {
	let user = AppDirs::resolve().ok().map(|dirs| dirs.config_file());
	let local = env::current_dir().ok().map(|dir| dir.join(LOCAL_CONFIG));
	user.into_iter().chain(local).collect()
}

/// Implicit files are optional; files named on the command line must exist.
fn file_layers(defaults: &[PathBuf], explicit: &[PathBuf]) -> ConfigBuilder<DefaultState> {
	let optional = defaults
		.iter()
		.map(|path| File::from(path.as_path()).required(false));
	let required = explicit
		.iter()
		.map(|path| File::from(path.as_path()).required(true));
	optional
		.chain(required)
		.fold(Config::builder(), |builder, file| builder.add_source(file))
}

#[cfg(test)]
mod tests {
	use std::fs;

	use super::*;

	#[test]
	fn local_file_overrides_user_file_and_explicit_overrides_both() {
		let dir = tempfile::tempdir().unwrap();
		let user = dir.path().join("config.toml");
		let local = dir.path().join(LOCAL_CONFIG);
		let explicit = dir.path().join("team.toml");
		fs::write(
			&user,
			"[items]\npath = \"/user.json\"\n[ui]\ntheme = \"light\"\ntitle = \"User\"\n",
		)
		.unwrap();
		fs::write(&local, "[items]\npath = \"/local.json\"\n[ui]\ntitle = \"Local\"\n").unwrap();
		fs::write(&explicit, "[ui]\ntitle = \"Team\"\n").unwrap();

		let config = file_layers(&[user, local], &[explicit]).build().unwrap();
		assert_eq!(config.get_string("items.path").unwrap(), "/local.json");
		assert_eq!(config.get_string("ui.theme").unwrap(), "light");
		assert_eq!(config.get_string("ui.title").unwrap(), "Team");
	}

	#[test]
	fn absent_implicit_files_are_skipped() {
		let dir = tempfile::tempdir().unwrap();
		let config = file_layers(&[dir.path().join("nowhere.toml")], &[])
			.build()
			.unwrap();
		assert!(config.get_string("items.path").is_err());
	}

	#[test]
	fn absent_explicit_file_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		assert!(file_layers(&[], &[dir.path().join("missing.toml")])
			.build()
			.is_err());
	}

	#[test]
	fn local_file_is_the_last_implicit_layer() {
		let files = default_config_files();
		assert!(files.last().is_some_and(|path| path.ends_with(LOCAL_CONFIG)));
	}
}
