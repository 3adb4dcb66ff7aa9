mod cli;
mod settings;

use anyhow::{Context, Result};
use cli::{OutputFormat, parse_cli, print_outcome, print_results};
use isearchr::{SearchWidget, SessionOptions, load_items, logging};
use settings::ResolvedConfig;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in isearchr::ui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if let Err(err) = logging::initialize(resolved.log_file.as_deref()) {
		eprintln!("warning: logging disabled: {err:#}");
	}

	match cli.query.as_deref() {
		Some(query) => run_headless(query, cli.output, &resolved),
		None => run_interactive(cli.output, resolved),
	}
}

/// Run one keystroke with `query` and print what the widget rendered.
fn run_headless(query: &str, format: OutputFormat, settings: &ResolvedConfig) -> Result<()> {
	let items = load_items(&settings.items_path)?;
	let mut widget = SearchWidget::new(&items, settings.widget_config());
	widget.on_keystroke(query);
	print_results(format, widget.state(), widget.results())
}

/// Run the terminal interface and print the outcome in the chosen format.
fn run_interactive(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let items = load_items(&settings.items_path)?;
	let options = SessionOptions {
		input_title: settings.title.clone(),
		initial_query: settings.initial_query.clone(),
		theme: settings.theme,
	};
	let outcome = isearchr::run(&items, settings.widget_config(), options)
		.context("search session failed")?;
	print_outcome(format, &outcome)
}
