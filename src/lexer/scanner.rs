//! Line-oriented scanner producing a nesting-validated token stream

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::collections::{BoundedStack, Collection};
use crate::config::Config;
use crate::error::{Error, Pos, Result, Span};
use crate::lexer::token::{Token, TokenKind};

static BLANK_LINE: Lazy<Regex> = Lazy::new(|| compile(r"^\s*$"));
static START_TAG: Lazy<Regex> = Lazy::new(|| compile(r"^<([A-Za-z0-9_]+)>"));
static CONTENT: Lazy<Regex> = Lazy::new(|| compile(r"^[A-Za-z0-9_:/.,\-]+"));
static END_TAG: Lazy<Regex> = Lazy::new(|| compile(r"^</([A-Za-z0-9_]+)>"));

#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("lexical pattern must compile")
}

/// One pattern match at the current scan position
#[derive(Debug, PartialEq, Eq)]
struct Lexeme<'a> {
    kind: TokenKind,
    value: &'a str,
    len: usize,
}

impl<'a> Lexeme<'a> {
    const UNKNOWN: Self = Self {
        kind: TokenKind::Unknown,
        value: "",
        len: 0,
    };

    /// Try start tag, content, end tag in that order against the head of `rest`
    fn match_head(rest: &'a str) -> Self {
        if let Some((value, len)) = tag_name(&START_TAG, rest) {
            return Self {
                kind: TokenKind::StartTag,
                value,
                len,
            };
        }
        if let Some(m) = CONTENT.find(rest) {
            return Self {
                kind: TokenKind::Content,
                value: m.as_str(),
                len: m.end(),
            };
        }
        if let Some((value, len)) = tag_name(&END_TAG, rest) {
            return Self {
                kind: TokenKind::EndTag,
                value,
                len,
            };
        }
        Self::UNKNOWN
    }
}

fn tag_name<'a>(pattern: &Regex, rest: &'a str) -> Option<(&'a str, usize)> {
    let caps = pattern.captures(rest)?;
    Some((caps.get(1)?.as_str(), caps.get(0)?.end()))
}

/// Scanner over a fully materialized document
#[derive(Debug)]
pub struct Scanner<'a> {
    input: &'a str,
    config: Config,
    stack: BoundedStack<Token>,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner with default configuration
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, Config::default())
    }

    /// Create a new scanner with custom configuration
    pub fn with_config(input: &'a str, config: Config) -> Self {
        Self {
            input,
            config,
            stack: BoundedStack::new(),
            tokens: Vec::new(),
        }
    }

    /// Scan the whole document, failing on the first violation
    pub fn scan(mut self) -> Result<Vec<Token>> {
        self.config.check_size(self.input.len())?;

        let mut line_offset = 0;
        for (index, line) in self.input.split('\n').enumerate() {
            let next_offset = line_offset + line.len() + 1;
            if !BLANK_LINE.is_match(line) {
                self.scan_line(line, line_offset, index + 1)?;
            }
            line_offset = next_offset;
        }

        if let Some(open) = self.stack.iter().rev().find(|t| t.is_start_tag()) {
            return Err(Error::syntax(
                open.pos,
                format!("unclosed start tag <{}>", open.value),
            ));
        }

        debug!(tokens = self.tokens.len(), "scan complete");
        Ok(self.tokens)
    }

    fn scan_line(&mut self, line: &str, line_offset: usize, line_no: usize) -> Result<()> {
        let lead = line.len() - line.trim_start().len();
        let trimmed = line.trim();

        let mut idx = 0;
        while let Some(rest) = trimmed.get(idx..).filter(|r| !r.is_empty()) {
            let pos = Pos::new(line_offset + lead + idx, line_no, lead + idx + 1);
            let lexeme = Lexeme::match_head(rest);
            // unrecognized input spans the rest of the line
            let len = if lexeme.len > 0 { lexeme.len } else { rest.len() };
            let span = Span::new(pos, Pos::new(pos.offset + len, line_no, pos.col + len));
            match lexeme.kind {
                TokenKind::StartTag => self.start_tag(lexeme.value, span)?,
                TokenKind::Content => self.content(lexeme.value, span)?,
                TokenKind::EndTag => self.end_tag(lexeme.value, span)?,
                TokenKind::Unknown | TokenKind::Comment => {
                    return Err(Error::syntax_span(
                        span,
                        format!("unrecognized input {rest:?}"),
                    ));
                }
            }
            idx += lexeme.len;
        }
        Ok(())
    }

    fn start_tag(&mut self, name: &str, span: Span) -> Result<()> {
        if let Some(top) = self.stack.peek().filter(|t| t.is_content()) {
            return Err(Error::syntax_span(
                span,
                format!("start tag <{name}> cannot follow content {:?}", top.value),
            ));
        }
        let token = Token::new(TokenKind::StartTag, name, span.start);
        self.stack.offer(token.clone())?;
        self.accept(token);
        Ok(())
    }

    fn content(&mut self, text: &str, span: Span) -> Result<()> {
        match self.stack.peek() {
            Some(top) if top.is_start_tag() => {}
            Some(top) => {
                return Err(Error::syntax_span(
                    span,
                    format!("content {text:?} must directly follow a start tag, found {top}"),
                ));
            }
            None => {
                return Err(Error::syntax_span(
                    span,
                    format!("content {text:?} outside of any element"),
                ));
            }
        }
        let token = Token::new(TokenKind::Content, text, span.start);
        self.stack.offer(token.clone())?;
        self.accept(token);
        Ok(())
    }

    fn end_tag(&mut self, name: &str, span: Span) -> Result<()> {
        let unmatched = || Error::syntax_span(span, format!("unmatched end tag </{name}>"));

        let mut open = self.stack.poll().map_err(|_| unmatched())?;
        if open.is_content() {
            open = self.stack.poll().map_err(|_| unmatched())?;
        }
        if !open.is_start_tag() || open.value != name {
            return Err(Error::syntax_span(
                span,
                format!("mismatched end tag </{name}>, expected </{}>", open.value),
            ));
        }

        self.accept(Token::new(TokenKind::EndTag, name, span.start));
        Ok(())
    }

    fn accept(&mut self, token: Token) {
        trace!(token = %token, line = token.pos.line, "accepted");
        self.tokens.push(token);
    }
}

/// Scan `input` with default configuration
pub fn scan(input: &str) -> Result<Vec<Token>> {
    Scanner::new(input).scan()
}
