mod error;
mod escape;
mod extract;
mod generator;
mod lexer;
mod parser;
mod sink;
mod token;

/// Error and result aliases.
pub use error::{Cancel, PathParseError, Result};
/// Node quoting helpers used for round-tripping node sequences.
pub use escape::{escape_node, join_nodes, unquote};
/// Stateless parse-tree walker and its shared instance.
pub use extract::{PATH_NODE_EXTRACTOR, PathNodeExtractor};
/// Two-pass parsing entry points and options.
pub use generator::{ParsedPath, ParserOptions, PathParser, check_path, split_path_to_nodes};
/// Path lexer and character classes.
pub use lexer::{BACK_QUOTE, DOUBLE_QUOTE, Lexer, is_name_char};
/// Grammar parser, prediction modes, and parse-tree types.
pub use parser::{NodeTree, Parser, PathTree, PredictionMode};
/// Cancellation listener types.
pub use sink::{CancelLog, ErrorSink};
/// Token types.
pub use token::{Span, Token, TokenKind};
