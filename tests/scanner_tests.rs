#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use tagtree::{scan, ErrorKind, Scanner, TokenKind};

fn kinds(input: &str) -> Vec<TokenKind> {
    scan(input)
        .expect("document should scan")
        .iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn test_tokens_in_acceptance_order() {
    use TokenKind::{Content, EndTag, StartTag};
    assert_eq!(
        kinds("<a>\n  <b>x</b>\n  <c></c>\n</a>"),
        vec![StartTag, StartTag, Content, EndTag, StartTag, EndTag, EndTag]
    );
}

#[test]
fn test_content_character_set() {
    let tokens = scan("<u>https://example.com/a_b/c.d,e-f:1</u>").unwrap();
    let content = tokens.iter().find(|t| t.kind == TokenKind::Content).unwrap();
    assert_eq!(content.value, "https://example.com/a_b/c.d,e-f:1");
}

#[test]
fn test_mismatched_tags() {
    let err = scan("<a></b>").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::InvalidSyntax);
    assert!(err.message().contains("mismatched end tag </b>"));
}

#[test]
fn test_start_tag_after_content() {
    let err = scan("<a>text<b></b></a>").unwrap_err();
    assert!(err.is_syntax());
    assert_eq!(err.span().start.col, 8);
}

#[test]
fn test_unmatched_end_tag() {
    let err = scan("</a>").unwrap_err();
    assert!(err.is_syntax());
    assert!(err.message().contains("unmatched"));
}

#[test]
fn test_unclosed_tag() {
    let err = scan("<a><b></b>").unwrap_err();
    assert!(err.is_syntax());
    assert!(err.message().contains("unclosed start tag <a>"));
}

#[test]
fn test_content_at_top_level() {
    assert!(scan("hello").unwrap_err().is_syntax());
}

#[test]
fn test_whitespace_inside_content() {
    assert!(scan("<a>two words</a>").unwrap_err().is_syntax());
}

#[test]
fn test_tag_split_across_lines() {
    assert!(scan("<a\n></a>").unwrap_err().is_syntax());
}

#[test]
fn test_attributes_not_supported() {
    assert!(scan("<a id=1></a>").unwrap_err().is_syntax());
}

#[test]
fn test_blank_input_has_no_tokens() {
    assert!(scan("").unwrap().is_empty());
    assert!(scan("  \n\t\n").unwrap().is_empty());
}

#[test]
fn test_end_tag_closes_single_pending_content() {
    let tokens = scan("<a>\n<b>1</b>\n</a>").unwrap();
    assert_eq!(tokens.len(), 5);
}

#[test]
fn test_scanner_accepts_sibling_top_level_elements() {
    // single-root enforcement happens while building the tree
    assert_eq!(kinds("<a></a><b></b>").len(), 4);
}

#[test]
fn test_fixture_scans() {
    let input = include_str!("input/server.xml");
    let tokens = Scanner::new(input).scan().unwrap();
    assert_eq!(tokens.first().map(|t| t.value.as_str()), Some("config"));
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndTag));
}
