#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tspath::path::ParserOptions;

mod cmd;

#[derive(Parser)]
#[command(name = "tspath", about = "Time-series path expression tools")]
struct Cli {
	/// Log parser decisions at debug level.
	#[arg(short, long, global = true)]
	verbose: bool,
	/// Tokens the fast pass may inspect before deferring to the exhaustive pass.
	#[arg(long = "fast-lookahead", global = true, default_value_t = ParserOptions::default().fast_lookahead)]
	fast_lookahead: usize,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Split(cmd::split::Args),
	Check(cmd::check::Args),
	Join(cmd::join::Args),
	Encrypt(cmd::encrypt::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> cmd::Result<()> {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	let options = ParserOptions {
		fast_lookahead: cli.fast_lookahead,
	};
	tracing::debug!(fast_lookahead = options.fast_lookahead, "parser options");

	match cli.command {
		Commands::Split(args) => cmd::split::run(args, options),
		Commands::Check(args) => cmd::check::run(args, options),
		Commands::Join(args) => cmd::join::run(args),
		Commands::Encrypt(args) => cmd::encrypt::run(args),
	}
}

fn init_tracing(verbose: bool) {
	let filter = if verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
	};
	let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}
