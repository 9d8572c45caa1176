use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use edi::{app::App, config::EditorConfig, logging, paths};

/// A small terminal text editor.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
	/// File to open. Created on first save if it does not exist.
	file: Option<PathBuf>,

	/// Config file to use instead of the per-user one.
	#[arg(long, value_name = "PATH")]
	config: Option<PathBuf>,
}

fn main() {
	if let Err(err) = run() {
		eprintln!("{:#}", err);
		std::process::exit(1);
	}
}

fn run() -> Result<()> {
	let args = Args::parse();
	logging::init_logging(&paths::log_dir()).context("initialize logging failed")?;
	let config = EditorConfig::load_with_override(args.config.as_deref()).context("load config failed")?;

	let mut app = App::new(config);
	if let Some(path) = args.file {
		let display = path.display().to_string();
		app.open_file(path).with_context(|| format!("open {} failed", display))?;
	}
	app.run().context("run editor failed")
}
