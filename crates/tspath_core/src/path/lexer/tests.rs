use crate::path::{Cancel, CancelLog, Lexer, TokenKind};

fn kinds(input: &str) -> Vec<TokenKind> {
	let mut sink = CancelLog::new();
	Lexer::new(input)
		.tokenize(&mut sink)
		.expect("input should lex")
		.into_iter()
		.map(|token| token.kind)
		.collect()
}

#[test]
fn lexes_prefix_path_with_wildcards() {
	assert_eq!(
		kinds("root.*.d1.**"),
		vec![
			TokenKind::Root,
			TokenKind::Dot,
			TokenKind::WildcardSingle,
			TokenKind::Dot,
			TokenKind::Identifier,
			TokenKind::Dot,
			TokenKind::WildcardDouble,
			TokenKind::End,
		]
	);
}

#[test]
fn triple_star_is_double_then_single() {
	assert_eq!(kinds("***"), vec![TokenKind::WildcardDouble, TokenKind::WildcardSingle, TokenKind::End]);
}

#[test]
fn root_keyword_is_case_insensitive_and_whole_word_only() {
	assert_eq!(kinds("RoOt"), vec![TokenKind::Root, TokenKind::End]);
	assert_eq!(kinds("rooted"), vec![TokenKind::Identifier, TokenKind::End]);
}

#[test]
fn digit_runs_are_integers() {
	assert_eq!(kinds("123"), vec![TokenKind::Integer, TokenKind::End]);
	assert_eq!(kinds("1d"), vec![TokenKind::Identifier, TokenKind::End]);
}

#[test]
fn quoted_identifier_keeps_dots_and_escaped_delimiters() {
	let mut sink = CancelLog::new();
	let tokens = Lexer::new("\"a.\"\"b\"").tokenize(&mut sink).expect("quoted input should lex");
	assert_eq!(tokens[0].kind, TokenKind::QuotedIdentifier);
	assert_eq!(tokens[0].text, "\"a.\"\"b\"");
	assert_eq!(tokens[1].kind, TokenKind::End);
}

#[test]
fn whitespace_between_tokens_is_skipped() {
	assert_eq!(kinds(" root .\tsg "), vec![TokenKind::Root, TokenKind::Dot, TokenKind::Identifier, TokenKind::End]);
}

#[test]
fn cjk_characters_are_name_characters() {
	assert_eq!(kinds("温度"), vec![TokenKind::Identifier, TokenKind::End]);
}

#[test]
fn token_spans_point_into_source() {
	let mut sink = CancelLog::new();
	let tokens = Lexer::new("root.`s 1`").tokenize(&mut sink).expect("input should lex");
	assert_eq!((tokens[2].span.start, tokens[2].span.end), (5, 10));
	assert_eq!((tokens[3].span.start, tokens[3].span.end), (10, 10));
}

#[test]
fn reports_unrecognized_character_to_sink() {
	let mut sink = CancelLog::new();
	let err = Lexer::new("root.a-b").tokenize(&mut sink).expect_err("'-' is not a name character");
	assert_eq!(err, Cancel::Lexical { offset: 6, found: '-' });
	assert_eq!(sink.reported(), &[err]);
}

#[test]
fn reports_unterminated_quote_at_opening_delimiter() {
	let mut sink = CancelLog::new();
	let err = Lexer::new("root.\"unterminated").tokenize(&mut sink).expect_err("open quote should fail");
	assert_eq!(err, Cancel::UnterminatedQuote { offset: 5, delimiter: '"' });
	assert_eq!(sink.first(), Some(&err));
}

#[test]
fn successful_scan_reports_nothing() {
	let mut sink = CancelLog::new();
	Lexer::new("root.`a``b`.**").tokenize(&mut sink).expect("input should lex");
	assert!(sink.is_empty());
	assert_eq!(sink.first(), None);
}
