use crate::path::{NodeTree, PathTree, TokenKind, unquote};

/// Shared extractor instance; it carries no state, so concurrent use needs no locking.
pub static PATH_NODE_EXTRACTOR: PathNodeExtractor = PathNodeExtractor;

/// Walks an accepted [`PathTree`] and emits one decoded string per node.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathNodeExtractor;

impl PathNodeExtractor {
	/// Decode every node of `tree` in source order.
	pub fn extract(&self, tree: &PathTree<'_>) -> Vec<String> {
		tree.nodes.iter().map(|node| self.node_text(node)).collect()
	}

	/// Decode one node: quoted identifiers are unescaped, other tokens kept verbatim.
	pub fn node_text(&self, node: &NodeTree<'_>) -> String {
		let mut out = String::new();
		for token in &node.tokens {
			match token.kind {
				TokenKind::QuotedIdentifier => out.push_str(&unquote(token.text)),
				_ => out.push_str(token.text),
			}
		}
		out
	}
}
