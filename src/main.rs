#![allow(missing_docs)]

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cmd;

/// Environment variable holding the log filter (`debug`, `glbdoc=trace`, ...).
const LOG_ENV: &str = "GLBDOC_LOG";

#[derive(Parser)]
#[command(name = "glbdoc", about = "Binary glTF (.glb) inspection tools")]
struct Cli {
	#[command(flatten)]
	inspect: cmd::inspect::Args,
}

fn main() {
	init_tracing();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> glbdoc::glb::Result<()> {
	let cli = Cli::parse();
	cmd::inspect::run(cli.inspect)
}

fn init_tracing() {
	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.with_ansi(std::io::stderr().is_terminal())
		.try_init();
}
