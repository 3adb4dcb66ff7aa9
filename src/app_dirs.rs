//! Locations of the user config file and the log file.
//!
//! `ISEARCHR_CONFIG_DIR` and `ISEARCHR_DATA_DIR` each override one directory;
//! whichever is unset falls back to the platform location.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const CONFIG_DIR_ENV: &str = "ISEARCHR_CONFIG_DIR";
const DATA_DIR_ENV: &str = "ISEARCHR_DATA_DIR";
const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "isearchr.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
	config_dir: PathBuf,
	data_dir: PathBuf,
}

impl AppDirs {
	/// Resolve from the process environment.
	pub fn resolve() -> Result<Self> {
		Self::resolve_with(|name| env::var_os(name))
	}

	fn resolve_with(lookup: impl Fn(&str) -> Option<OsString>) -> Result<Self> {
		let config = dir_override(&lookup, CONFIG_DIR_ENV);
		let data = dir_override(&lookup, DATA_DIR_ENV);
		let (config_dir, data_dir) = match (config, data) {
			(Some(config_dir), Some(data_dir)) => (config_dir, data_dir),
			(config, data) => {
				let platform = ProjectDirs::from("", "", "isearchr")
					.ok_or_else(|| anyhow!("no home directory to place isearchr files in"))?;
				(
					config.unwrap_or_else(|| platform.config_dir().to_path_buf()),
					data.unwrap_or_else(|| platform.data_local_dir().to_path_buf()),
				)
			}
		};
		Ok(Self {
			config_dir,
			data_dir,
		})
	}

	/// The per-user config file, the lowest-precedence settings layer.
	pub fn config_file(&self) -> PathBuf {
		self.config_dir.join(CONFIG_FILE)
	}

	/// Where logs go unless `--log-file` says otherwise.
	pub fn log_file(&self) -> PathBuf {
		self.data_dir.join(LOG_FILE)
	}
}

/// An empty value counts as unset.
fn dir_override(lookup: &impl Fn(&str) -> Option<OsString>, name: &str) -> Option<PathBuf> {
	lookup(name)
		.filter(|value| !value.is_empty())
		.map(PathBuf::from)
}
