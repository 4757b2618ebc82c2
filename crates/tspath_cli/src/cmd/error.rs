use thiserror::Error;
use tspath::encrypt::EncryptError;
use tspath::path::PathParseError;

/// Command result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Path rejected by the parser.
	#[error(transparent)]
	Path(#[from] PathParseError),
	/// Encryptor construction or invocation failure.
	#[error(transparent)]
	Encrypt(#[from] EncryptError),
	/// Hex argument was malformed.
	#[error("invalid hex for {what}: {value} ({source})")]
	InvalidHex {
		/// Argument being parsed.
		what: &'static str,
		/// User-provided text.
		value: String,
		/// Decoder failure.
		source: hex::FromHexError,
	},
	/// `check` found illegal paths.
	#[error("{count} of {total} path(s) are not legal")]
	InvalidPaths {
		/// Rejected path count.
		count: usize,
		/// Checked path count.
		total: usize,
	},
	/// JSON rendering failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
}
