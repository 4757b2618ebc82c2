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
struct SplitRow {
	path: String,
	valid: bool,
	nodes: Option<Vec<String>>,
	pass: Option<&'static str>,
}

/// Split each path into nodes and print them.
///
/// Every path is reported; illegal ones are also named on stderr and make the command fail.
pub fn run(args: Args, options: ParserOptions) -> Result<()> {
	let Args { paths, json } = args;
	let parser = PathParser::new(options);

	let mut rows = Vec::with_capacity(paths.len());
	for path in paths {
		let row = match parser.parse(&path) {
			Ok(parsed) => SplitRow {
				path,
				valid: true,
				nodes: Some(parsed.nodes),
				pass: Some(parsed.pass.as_str()),
			},
			Err(err) => {
				eprintln!("error: {err}");
				SplitRow {
					path,
					valid: false,
					nodes: None,
					pass: None,
				}
			}
		};
		rows.push(row);
	}

	if json {
		emit_json(&rows)?;
	} else {
		for row in &rows {
			println!("path: {}", row.path);
			let (Some(pass), Some(nodes)) = (row.pass, &row.nodes) else {
				println!("invalid");
				continue;
			};
			println!("pass: {pass}");
			println!("nodes:");
			for node in nodes {
				println!("  {node}");
			}
		}
	}

	let count = rows.iter().filter(|row| !row.valid).count();
	if count > 0 {
		return Err(CliError::InvalidPaths { count, total: rows.len() });
	}
	Ok(())
}
