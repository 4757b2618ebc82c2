use thiserror::Error;

use crate::path::TokenKind;

/// Crate-local result type for path operations.
pub type Result<T> = std::result::Result<T, PathParseError>;

/// A path string rejected by both prediction passes.
///
/// Only the offending input is carried; per-attempt diagnostics stay internal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path} is not a legal path")]
pub struct PathParseError {
	/// Original user-provided path string.
	pub path: String,
}

impl PathParseError {
	pub(crate) fn new(path: &str) -> Self {
		Self { path: path.to_owned() }
	}
}

/// Signal that aborts a single parse attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Cancel {
	/// Character outside every token pattern.
	#[error("lexical error at {offset}: unexpected character {found:?}")]
	Lexical {
		/// Byte offset of the character.
		offset: usize,
		/// Offending character.
		found: char,
	},
	/// Quoted identifier still open at end of input.
	#[error("lexical error at {offset}: unterminated {delimiter} quote")]
	UnterminatedQuote {
		/// Byte offset of the opening delimiter.
		offset: usize,
		/// Opening delimiter character.
		delimiter: char,
	},
	/// Token sequence matched no grammar alternative.
	#[error("syntax error at {offset}: expected {expected}, found {found}")]
	Syntax {
		/// Byte offset of the offending token.
		offset: usize,
		/// Human-readable description of what would have matched.
		expected: &'static str,
		/// Kind of the offending token.
		found: TokenKind,
	},
	/// Fast prediction could not choose an alternative inside its lookahead window.
	#[error("ambiguity at {offset}: cannot predict {decision} within {lookahead} token(s)")]
	Ambiguity {
		/// Byte offset where prediction started.
		offset: usize,
		/// Grammar decision that could not be resolved.
		decision: &'static str,
		/// Configured lookahead window.
		lookahead: usize,
	},
}

impl Cancel {
	/// Byte offset the cancellation points at.
	pub fn offset(&self) -> usize {
		match self {
			Self::Lexical { offset, .. }
			| Self::UnterminatedQuote { offset, .. }
			| Self::Syntax { offset, .. }
			| Self::Ambiguity { offset, .. } => *offset,
		}
	}
}
