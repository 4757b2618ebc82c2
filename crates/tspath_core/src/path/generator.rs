use crate::path::{CancelLog, Lexer, PATH_NODE_EXTRACTOR, Parser, PathParseError, PathTree, PredictionMode, Result};

/// Tuning knobs for [`PathParser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
	/// Token window the fast pass may inspect before it gives up on a decision.
	pub fast_lookahead: usize,
}

impl Default for ParserOptions {
	fn default() -> Self {
		Self { fast_lookahead: 2 }
	}
}

/// Node sequence together with the pass that accepted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPath {
	/// Decoded nodes in source order; never empty.
	pub nodes: Vec<String>,
	/// Prediction mode of the accepting attempt.
	pub pass: PredictionMode,
}

/// Two-pass path parser: fast prediction first, exhaustive prediction only after a cancellation.
///
/// Holds configuration only; each call builds its own lexer, token buffer, and parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathParser {
	/// Parser configuration.
	pub options: ParserOptions,
}

impl PathParser {
	/// Create a parser with explicit options.
	pub fn new(options: ParserOptions) -> Self {
		Self { options }
	}

	/// Split `path` into decoded nodes and report which pass accepted it.
	pub fn parse(&self, path: &str) -> Result<ParsedPath> {
		if path.is_empty() {
			return Ok(ParsedPath {
				nodes: vec![String::new()],
				pass: PredictionMode::Fast,
			});
		}

		let (nodes, pass) = self.run(path, |tree| PATH_NODE_EXTRACTOR.extract(tree))?;
		Ok(ParsedPath { nodes, pass })
	}

	/// Split `path` into decoded nodes.
	pub fn split(&self, path: &str) -> Result<Vec<String>> {
		self.parse(path).map(|parsed| parsed.nodes)
	}

	/// Validate `path` without materializing its nodes.
	pub fn check(&self, path: &str) -> Result<()> {
		if path.is_empty() {
			return Ok(());
		}
		self.run(path, |_| ()).map(|_| ())
	}

	fn run<T>(&self, path: &str, accept: impl Fn(&PathTree<'_>) -> T) -> Result<(T, PredictionMode)> {
		let fast = match self.attempt(path, PredictionMode::Fast, &accept) {
			Ok(value) => return Ok((value, PredictionMode::Fast)),
			Err(log) => log,
		};
		tracing::debug!(
			path,
			cancel = ?fast.first(),
			"fast prediction cancelled, retrying with exhaustive prediction"
		);

		match self.attempt(path, PredictionMode::Exhaustive, &accept) {
			Ok(value) => Ok((value, PredictionMode::Exhaustive)),
			Err(log) => {
				tracing::debug!(path, cancel = ?log.first(), "path rejected by both passes");
				Err(PathParseError::new(path))
			}
		}
	}

	fn attempt<T>(&self, path: &str, mode: PredictionMode, accept: &impl Fn(&PathTree<'_>) -> T) -> std::result::Result<T, CancelLog> {
		let mut sink = CancelLog::new();
		let Ok(tokens) = Lexer::new(path).tokenize(&mut sink) else {
			return Err(sink);
		};

		match Parser::new(&tokens, mode, self.options.fast_lookahead).parse_path(&mut sink) {
			Ok(tree) => Ok(accept(&tree)),
			Err(_) => Err(sink),
		}
	}
}

/// Split `path` into decoded nodes with default options.
///
/// The empty string is a valid path whose only node is the empty string.
pub fn split_path_to_nodes(path: &str) -> Result<Vec<String>> {
	PathParser::default().split(path)
}

/// Fail if `path` is not a legal path; accepts exactly what [`split_path_to_nodes`] accepts.
pub fn check_path(path: &str) -> Result<()> {
	PathParser::default().check(path)
}
