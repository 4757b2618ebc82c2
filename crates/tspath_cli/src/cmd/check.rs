use serde::Serialize;
use tspath::path::{ParserOptions, PathParser};

use crate::cmd::util::emit_json;
use crate::cmd::{CliError, Result};

#[derive(clap::Args)]
pub struct Args {
	#[arg(required = true)]
	pub paths: Vec<String>,
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct CheckRow {
	path: String,
	valid: bool,
}

/// Validate each path; fails when any path is illegal.
pub fn run(args: Args, options: ParserOptions) -> Result<()> {
	let Args { paths, json } = args;
	let parser = PathParser::new(options);

	let rows: Vec<CheckRow> = paths
		.into_iter()
		.map(|path| CheckRow {
			valid: parser.check(&path).is_ok(),
			path,
		})
		.collect();

	if json {
		emit_json(&rows)?;
	} else {
		for row in &rows {
			println!("{}: {}", row.path, if row.valid { "ok" } else { "invalid" });
		}
	}

	let count = rows.iter().filter(|row| !row.valid).count();
	if count > 0 {
		return Err(CliError::InvalidPaths { count, total: rows.len() });
	}
	Ok(())
}
