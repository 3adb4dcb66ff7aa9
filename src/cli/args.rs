use std::path::{Path, PathBuf};

use clap::{ArgAction, ColorChoice, Parser, ValueEnum};
use isearchr::app_dirs::AppDirs;

use crate::settings::default_config_files;

/// `--version` output: the version plus the files this build reads settings
/// from and logs to.
fn long_version() -> &'static str {
	let log_file = AppDirs::resolve().map(|dirs| dirs.log_file()).ok();
	let details = version_details(&default_config_files(), log_file.as_deref());
	Box::leak(details.into_boxed_str())
}

fn version_details(config_files: &[PathBuf], log_file: Option<&Path>) -> String {
	let mut lines = vec![env!("CARGO_PKG_VERSION").to_string()];
	lines.push("settings layers (later wins):".to_string());
	lines.extend(
		config_files
			.iter()
			.map(|path| format!("  {}", path.display())),
	);
	lines.push("  --config FILE...".to_string());
	lines.push("  ISEARCHR__<SECTION>__<KEY>".to_string());
	lines.push(match log_file {
		Some(path) => format!("log file: {}", path.display()),
		None => "log file: unavailable (pass --log-file)".to_string(),
	});
	lines.join("\n")
}

/// Parse command line arguments into [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
	name = "isearchr",
	version,
	long_version = long_version(),
	about = "Incremental search over a list of named links",
	color = ColorChoice::Auto
)]
/// Command-line arguments accepted by the `isearchr` binary.
pub(crate) struct CliArgs {
	#[arg(
		short = 'i',
		long,
		value_name = "FILE",
		help = "JSON file holding an array of {name, category, url} items"
	)]
	pub(crate) items: Option<PathBuf>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "ISEARCHR_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the input prompt title (default: items file name)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "QUERY",
		help = "Prefill the interactive prompt (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		short = 'm',
		long,
		value_name = "MESSAGE",
		help = "Text shown when nothing matches"
	)]
	pub(crate) no_results_message: Option<String>,
	#[arg(long, value_name = "THEME", help = "Select a theme by name (default: slate)")]
	pub(crate) theme: Option<String>,
	#[arg(long, help = "List available themes and exit")]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Run a single query without the interface and print the rendered results"
	)]
	pub(crate) query: Option<String>,
	#[arg(long, value_name = "FILE", help = "Write logs to FILE instead of the data directory")]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(long, help = "Print the effective configuration before running")]
	pub(crate) print_config: bool,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats for the final result.
pub(crate) enum OutputFormat {
	Plain,
	Json,
	Markup,
}

#[cfg(test)]
mod tests {
	use clap::{CommandFactory, FromArgMatches};

	use super::*;

	#[test]
	fn command_has_about_text() {
		assert!(CliArgs::command().get_about().is_some());
	}

	#[test]
	fn version_details_list_layers_in_precedence_order() {
		let files = [
			PathBuf::from("/home/u/.config/isearchr/config.toml"),
			PathBuf::from("/work/.isearchr.toml"),
		];
		let details = version_details(&files, Some(Path::new("/data/isearchr.log")));
		let lines: Vec<_> = details.lines().collect();

		assert_eq!(lines[0], env!("CARGO_PKG_VERSION"));
		assert_eq!(lines[2], "  /home/u/.config/isearchr/config.toml");
		assert_eq!(lines[3], "  /work/.isearchr.toml");
		assert_eq!(lines[4], "  --config FILE...");
		assert_eq!(lines.last(), Some(&"log file: /data/isearchr.log"));
	}

	#[test]
	fn version_details_without_log_location() {
		let details = version_details(&[], None);
		assert!(details.ends_with("log file: unavailable (pass --log-file)"));
	}

	#[test]
	fn parse_cli_accepts_default_arguments() {
		let command = CliArgs::command();
		let mut matches = command.get_matches_from(vec!["isearchr"]);
		let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
		assert_eq!(parsed.output, OutputFormat::Plain);
		assert!(parsed.items.is_none());
	}

	#[test]
	fn headless_query_and_markup_output() {
		let command = CliArgs::command();
		let mut matches = command.get_matches_from(vec![
			"isearchr", "--items", "people.json", "-q", "al", "-o", "markup",
		]);
		let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
		assert_eq!(parsed.query.as_deref(), Some("al"));
		assert_eq!(parsed.output, OutputFormat::Markup);
		assert_eq!(parsed.items, Some(PathBuf::from("people.json")));
	}

	#[test]
	fn cli_definition_is_consistent() {
		CliArgs::command().debug_assert();
	}
}
