use std::fmt;

/// Classified lexeme kinds produced by the path lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
	/// `root` keyword in any ASCII case.
	Root,
	/// Unquoted run of name characters.
	Identifier,
	/// Backquoted or double-quoted identifier, delimiters included.
	QuotedIdentifier,
	/// Run of ASCII digits only; no node accepts it unquoted.
	Integer,
	/// Node separator `.`.
	Dot,
	/// Single-level wildcard `*`.
	WildcardSingle,
	/// Multi-level wildcard `**`.
	WildcardDouble,
	/// End of input.
	End,
}

impl TokenKind {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Root => "root",
			Self::Identifier => "identifier",
			Self::QuotedIdentifier => "quoted identifier",
			Self::Integer => "integer",
			Self::Dot => "'.'",
			Self::WildcardSingle => "'*'",
			Self::WildcardDouble => "'**'",
			Self::End => "end of input",
		}
	}

	/// Whether this kind is one of the two wildcard tokens.
	pub fn is_wildcard(self) -> bool {
		matches!(self, Self::WildcardSingle | Self::WildcardDouble)
	}

	/// Whether this kind can stand as the identifier part of a node.
	pub fn is_identifier(self) -> bool {
		matches!(self, Self::Identifier | Self::QuotedIdentifier)
	}
}

impl fmt::Display for TokenKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Byte range of a token in its source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
	/// Inclusive start offset.
	pub start: usize,
	/// Exclusive end offset.
	pub end: usize,
}

/// One classified lexeme borrowed from the source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
	/// Token classification.
	pub kind: TokenKind,
	/// Raw lexeme, quote delimiters included.
	pub text: &'a str,
	/// Location in the source.
	pub span: Span,
}

impl<'a> Token<'a> {
	/// Build a token covering `source[start..end]`.
	pub fn new(kind: TokenKind, source: &'a str, start: usize, end: usize) -> Self {
		Self {
			kind,
			text: &source[start..end],
			span: Span { start, end },
		}
	}
}
