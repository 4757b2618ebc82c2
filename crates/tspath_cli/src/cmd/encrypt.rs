use serde::Serialize;
use tspath::encrypt::{EncryptionType, encryptor_for};

use crate::cmd::Result;
use crate::cmd::util::{emit_json, parse_hex};

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum Kind {
	Aes128,
	Unencrypted,
}

impl From<Kind> for EncryptionType {
	fn from(kind: Kind) -> Self {
		match kind {
			Kind::Aes128 => Self::Aes128,
			Kind::Unencrypted => Self::Unencrypted,
		}
	}
}

#[derive(clap::Args)]
pub struct Args {
	pub data: String,
	#[arg(long = "key-hex", default_value = "")]
	pub key_hex: String,
	#[arg(long = "type", value_enum, default_value_t = Kind::Aes128)]
	pub kind: Kind,
	#[arg(long, requires = "length")]
	pub offset: Option<usize>,
	#[arg(long)]
	pub length: Option<usize>,
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct EncryptRow {
	encryption_type: &'static str,
	input_len: usize,
	output: String,
}

/// Encrypt hex-encoded data and print the result as hex.
pub fn run(args: Args) -> Result<()> {
	let Args {
		data,
		key_hex,
		kind,
		offset,
		length,
		json,
	} = args;

	let data = parse_hex("data", &data)?;
	let key = parse_hex("key", &key_hex)?;
	let encryptor = encryptor_for(kind.into(), &key)?;

	let output = match length {
		Some(length) => encryptor.encrypt_range(&data, offset.unwrap_or(0), length)?,
		None => encryptor.encrypt(&data),
	};

	if json {
		return emit_json(&EncryptRow {
			encryption_type: encryptor.encryption_type().as_str(),
			input_len: data.len(),
			output: hex::encode(&output),
		});
	}

	println!("{}", hex::encode(&output));
	Ok(())
}
