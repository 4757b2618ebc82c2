use std::borrow::Cow;

use crate::path::lexer::{BACK_QUOTE, DOUBLE_QUOTE, is_name_char};

/// Strip the delimiters of a quoted lexeme and collapse doubled delimiters.
///
/// Text that is not wrapped in a matching quote pair is returned unchanged.
pub fn unquote(lexeme: &str) -> Cow<'_, str> {
	let (single, pair) = match lexeme.chars().next() {
		Some(BACK_QUOTE) => ("`", "``"),
		Some(DOUBLE_QUOTE) => ("\"", "\"\""),
		_ => return Cow::Borrowed(lexeme),
	};
	if lexeme.len() < 2 || !lexeme.ends_with(single) {
		return Cow::Borrowed(lexeme);
	}

	let inner = &lexeme[1..lexeme.len() - 1];
	if inner.contains(pair) {
		Cow::Owned(inner.replace(pair, single))
	} else {
		Cow::Borrowed(inner)
	}
}

/// Render one node so that it lexes and parses back to the same text at `position`.
///
/// Nodes that already read back verbatim are borrowed; the rest are backquoted
/// with internal backquotes doubled.
pub fn escape_node(node: &str, position: usize) -> Cow<'_, str> {
	if reads_back_unquoted(node, position) {
		return Cow::Borrowed(node);
	}

	let mut out = String::with_capacity(node.len() + 2);
	out.push(BACK_QUOTE);
	for ch in node.chars() {
		if ch == BACK_QUOTE {
			out.push(BACK_QUOTE);
		}
		out.push(ch);
	}
	out.push(BACK_QUOTE);
	Cow::Owned(out)
}

/// Join nodes with `.`, escaping each one as needed.
pub fn join_nodes<S: AsRef<str>>(nodes: &[S]) -> String {
	let mut out = String::new();
	for (position, node) in nodes.iter().enumerate() {
		if position > 0 {
			out.push('.');
		}
		out.push_str(&escape_node(node.as_ref(), position));
	}
	out
}

fn reads_back_unquoted(node: &str, position: usize) -> bool {
	if node == "*" || node == "**" {
		return true;
	}
	if position == 0 && node.eq_ignore_ascii_case("root") {
		return true;
	}

	let body = node.strip_prefix("**").or_else(|| node.strip_prefix('*')).unwrap_or(node);
	let body = body.strip_suffix("**").or_else(|| body.strip_suffix('*')).unwrap_or(body);
	is_plain_identifier(body)
}

fn is_plain_identifier(text: &str) -> bool {
	!text.is_empty()
		&& text.chars().all(is_name_char)
		&& !text.bytes().all(|byte| byte.is_ascii_digit())
		&& !text.eq_ignore_ascii_case("root")
}
