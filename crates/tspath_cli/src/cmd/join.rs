use tspath::path::join_nodes;

use crate::cmd::Result;

#[derive(clap::Args)]
pub struct Args {
	#[arg(required = true)]
	pub nodes: Vec<String>,
}

/// Join nodes into one path, quoting nodes that need it.
pub fn run(args: Args) -> Result<()> {
	println!("{}", join_nodes(&args.nodes));
	Ok(())
}
