use crate::path::{Cancel, ErrorSink, Span, Token, TokenKind};

/// Lookahead strategy used to choose between grammar alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredictionMode {
	/// Predict from a bounded token window, commit, never backtrack.
	Fast,
	/// Speculatively try every alternative in order and keep the first viable one.
	Exhaustive,
}

impl PredictionMode {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Fast => "fast",
			Self::Exhaustive => "exhaustive",
		}
	}
}

/// Accepted parse of a whole path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTree<'a> {
	/// Whether the path starts with the `root` keyword.
	pub rooted: bool,
	/// One entry per `.`-delimited node, in source order.
	pub nodes: Vec<NodeTree<'a>>,
}

/// Tokens matched by one `node` rule instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeTree<'a> {
	/// Matched tokens in source order (optional wildcard, identifier, optional wildcard).
	pub tokens: Vec<Token<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeAlt {
	/// `wildcard identifier wildcard?`
	WrappedIdentifier,
	/// `wildcard`
	Wildcard,
}

const NODE_DECISION: &str = "wildcard node";
const FOLLOW_NODE: &str = "'.' or end of input";

/// Recursive-descent parser over one token buffer.
///
/// ```text
/// path := ROOT ('.' node)* END | node ('.' node)* END
/// node := wildcard | wildcard? identifier wildcard?
/// ```
pub struct Parser<'t, 'a> {
	tokens: &'t [Token<'a>],
	cursor: usize,
	mode: PredictionMode,
	lookahead: usize,
}

impl<'t, 'a> Parser<'t, 'a> {
	/// Create a parser; `lookahead` bounds the prediction window in [`PredictionMode::Fast`].
	pub fn new(tokens: &'t [Token<'a>], mode: PredictionMode, lookahead: usize) -> Self {
		Self {
			tokens,
			cursor: 0,
			mode,
			lookahead,
		}
	}

	/// Parse the whole token buffer as a path.
	///
	/// The cancellation that ends a failed attempt is reported to `sink` and returned.
	pub fn parse_path(mut self, sink: &mut impl ErrorSink) -> Result<PathTree<'a>, Cancel> {
		self.path().inspect_err(|cancel| sink.report(cancel))
	}

	fn path(&mut self) -> Result<PathTree<'a>, Cancel> {
		let rooted = self.peek().kind == TokenKind::Root;
		let first = if rooted { NodeTree { tokens: vec![self.bump()] } } else { self.node()? };

		let mut nodes = vec![first];
		loop {
			match self.peek().kind {
				TokenKind::Dot => {
					self.bump();
					nodes.push(self.node()?);
				}
				TokenKind::End => break,
				_ => return Err(self.syntax(FOLLOW_NODE)),
			}
		}

		Ok(PathTree { rooted, nodes })
	}

	fn node(&mut self) -> Result<NodeTree<'a>, Cancel> {
		let kind = self.peek().kind;
		if kind.is_identifier() {
			let identifier = self.bump();
			return Ok(self.trailing_wildcard(vec![identifier]));
		}
		if !kind.is_wildcard() {
			return Err(self.syntax("node"));
		}

		match self.mode {
			PredictionMode::Fast => {
				let alt = self.predict_bounded()?;
				self.alternative(alt)
			}
			PredictionMode::Exhaustive => self.speculate(),
		}
	}

	fn predict_bounded(&self) -> Result<NodeAlt, Cancel> {
		if self.lookahead < 2 {
			return Err(Cancel::Ambiguity {
				offset: self.peek().span.start,
				decision: NODE_DECISION,
				lookahead: self.lookahead,
			});
		}

		let second = self.peek_at(1);
		match second.kind {
			kind if kind.is_identifier() => Ok(NodeAlt::WrappedIdentifier),
			TokenKind::Dot | TokenKind::End => Ok(NodeAlt::Wildcard),
			found => Err(Cancel::Syntax {
				offset: second.span.start,
				expected: "identifier, '.' or end of input",
				found,
			}),
		}
	}

	fn speculate(&mut self) -> Result<NodeTree<'a>, Cancel> {
		let saved = self.cursor;
		let mut furthest: Option<Cancel> = None;

		for alt in [NodeAlt::WrappedIdentifier, NodeAlt::Wildcard] {
			let attempt = self.alternative(alt).and_then(|node| match self.peek().kind {
				TokenKind::Dot | TokenKind::End => Ok(node),
				_ => Err(self.syntax(FOLLOW_NODE)),
			});
			match attempt {
				Ok(node) => return Ok(node),
				Err(cancel) => {
					self.cursor = saved;
					if furthest.as_ref().is_none_or(|best| cancel.offset() > best.offset()) {
						furthest = Some(cancel);
					}
				}
			}
		}

		Err(furthest.unwrap_or_else(|| self.syntax("node")))
	}

	fn alternative(&mut self, alt: NodeAlt) -> Result<NodeTree<'a>, Cancel> {
		let wildcard = self.bump();
		match alt {
			NodeAlt::Wildcard => Ok(NodeTree { tokens: vec![wildcard] }),
			NodeAlt::WrappedIdentifier => {
				if !self.peek().kind.is_identifier() {
					return Err(self.syntax("identifier"));
				}
				let identifier = self.bump();
				Ok(self.trailing_wildcard(vec![wildcard, identifier]))
			}
		}
	}

	fn trailing_wildcard(&mut self, mut tokens: Vec<Token<'a>>) -> NodeTree<'a> {
		if self.peek().kind.is_wildcard() {
			tokens.push(self.bump());
		}
		NodeTree { tokens }
	}

	fn peek(&self) -> Token<'a> {
		self.peek_at(0)
	}

	fn peek_at(&self, distance: usize) -> Token<'a> {
		if let Some(token) = self.tokens.get(self.cursor + distance) {
			return *token;
		}

		let end = self.tokens.last().map_or(0, |token| token.span.end);
		Token {
			kind: TokenKind::End,
			text: "",
			span: Span { start: end, end },
		}
	}

	fn bump(&mut self) -> Token<'a> {
		let token = self.peek();
		if self.cursor < self.tokens.len() {
			self.cursor += 1;
		}
		token
	}

	fn syntax(&self, expected: &'static str) -> Cancel {
		let found = self.peek();
		Cancel::Syntax {
			offset: found.span.start,
			expected,
			found: found.kind,
		}
	}
}
