use serde::Serialize;

use crate::cmd::{CliError, Result};

/// Print `value` as pretty JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(value: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}

/// Decode an even-length hex string, ignoring an optional `0x` prefix.
pub(crate) fn parse_hex(what: &'static str, value: &str) -> Result<Vec<u8>> {
	let digits = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")).unwrap_or(value);
	hex::decode(digits).map_err(|source| CliError::InvalidHex {
		what,
		value: value.to_owned(),
		source,
	})
}
