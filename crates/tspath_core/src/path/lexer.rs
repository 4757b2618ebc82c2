use crate::path::{Cancel, ErrorSink, Token, TokenKind};

/// Backquote delimiter used when re-escaping nodes.
pub const BACK_QUOTE: char = '`';
/// Double-quote delimiter, accepted on input only.
pub const DOUBLE_QUOTE: char = '"';

/// Whether `ch` may appear in an unquoted identifier.
pub fn is_name_char(ch: char) -> bool {
	ch.is_ascii_alphanumeric() || matches!(ch, '_' | ':' | '@' | '#' | '$' | '{' | '}') || ('\u{2E80}'..='\u{9FFF}').contains(&ch)
}

fn is_whitespace(ch: char) -> bool {
	matches!(ch, ' ' | '\t' | '\r' | '\n')
}

/// Single-pass scanner turning a path string into classified tokens.
pub struct Lexer<'a> {
	source: &'a str,
	pos: usize,
}

impl<'a> Lexer<'a> {
	/// Create a lexer positioned at the start of `source`.
	pub fn new(source: &'a str) -> Self {
		Self { source, pos: 0 }
	}

	/// Scan the whole input into tokens terminated by [`TokenKind::End`].
	///
	/// The first unrecognized character is reported to `sink` and returned.
	pub fn tokenize(mut self, sink: &mut impl ErrorSink) -> Result<Vec<Token<'a>>, Cancel> {
		let mut tokens = Vec::new();
		loop {
			let token = self.next_token(sink)?;
			let done = token.kind == TokenKind::End;
			tokens.push(token);
			if done {
				return Ok(tokens);
			}
		}
	}

	fn peek(&self) -> Option<char> {
		self.source[self.pos..].chars().next()
	}

	fn next_token(&mut self, sink: &mut impl ErrorSink) -> Result<Token<'a>, Cancel> {
		while let Some(ch) = self.peek()
			&& is_whitespace(ch)
		{
			self.pos += ch.len_utf8();
		}

		let start = self.pos;
		let Some(ch) = self.peek() else {
			return Ok(Token::new(TokenKind::End, self.source, start, start));
		};

		match ch {
			'.' => {
				self.pos += 1;
				Ok(Token::new(TokenKind::Dot, self.source, start, self.pos))
			}
			'*' => {
				self.pos += 1;
				let kind = if self.peek() == Some('*') {
					self.pos += 1;
					TokenKind::WildcardDouble
				} else {
					TokenKind::WildcardSingle
				};
				Ok(Token::new(kind, self.source, start, self.pos))
			}
			BACK_QUOTE | DOUBLE_QUOTE => self.quoted(ch, sink),
			c if is_name_char(c) => Ok(self.name()),
			found => Err(report(sink, Cancel::Lexical { offset: start, found })),
		}
	}

	fn quoted(&mut self, delimiter: char, sink: &mut impl ErrorSink) -> Result<Token<'a>, Cancel> {
		let start = self.pos;
		self.pos += delimiter.len_utf8();
		loop {
			match self.peek() {
				None => return Err(report(sink, Cancel::UnterminatedQuote { offset: start, delimiter })),
				Some(ch) if ch == delimiter => {
					self.pos += ch.len_utf8();
					// doubled delimiter is an escaped literal
					if self.peek() == Some(delimiter) {
						self.pos += ch.len_utf8();
					} else {
						break;
					}
				}
				Some(ch) => self.pos += ch.len_utf8(),
			}
		}
		Ok(Token::new(TokenKind::QuotedIdentifier, self.source, start, self.pos))
	}

	fn name(&mut self) -> Token<'a> {
		let start = self.pos;
		while let Some(ch) = self.peek()
			&& is_name_char(ch)
		{
			self.pos += ch.len_utf8();
		}

		let text = &self.source[start..self.pos];
		let kind = if text.eq_ignore_ascii_case("root") {
			TokenKind::Root
		} else if text.bytes().all(|byte| byte.is_ascii_digit()) {
			TokenKind::Integer
		} else {
			TokenKind::Identifier
		};
		Token::new(kind, self.source, start, self.pos)
	}
}

fn report(sink: &mut impl ErrorSink, cancel: Cancel) -> Cancel {
	sink.report(&cancel);
	cancel
}

#[cfg(test)]
mod tests;
