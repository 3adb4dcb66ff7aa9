//! Log setup. The terminal belongs to the UI, so records go to a file in the
//! data directory instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use crate::app_dirs::AppDirs;

/// Environment variable holding the `env_logger` filter.
pub const LOG_ENV: &str = "ISEARCHR_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Install the global logger, writing to `path` or the default log file.
///
/// Returns the file in use. Calling this twice leaves the first logger in
/// place.
pub fn initialize(path: Option<&Path>) -> Result<PathBuf> {
	let path = match path {
		Some(path) => path.to_path_buf(),
		None => AppDirs::resolve()?.log_file(),
	};
	let file = open_log_file(&path)?;

	let mut builder = Builder::from_env(Env::default().filter_or(LOG_ENV, DEFAULT_FILTER));
	builder.target(Target::Pipe(Box::new(file)));
	if builder.try_init().is_err() {
		log::debug!("logger already initialized");
	}
	Ok(path)
}

fn open_log_file(path: &Path) -> Result<File> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn creates_missing_directories() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("nested/logs/isearchr.log");
		let used = initialize(Some(&path)).unwrap();
		assert_eq!(used, path);
		assert!(path.exists());
	}
}
