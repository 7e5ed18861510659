//! Token types for the tag scanner

use std::fmt;

use crate::error::Pos;

/// Tag token types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// No lexical pattern matched
    Unknown,
    /// `<name>`
    StartTag,
    /// A single text run
    Content,
    /// `</name>`
    EndTag,
    /// Reserved; never produced by the scanner
    Comment,
}

impl TokenKind {
    /// Get token name for error messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::StartTag => "start tag",
            Self::Content => "content",
            Self::EndTag => "end tag",
            Self::Comment => "comment",
        }
    }
}

/// Token with its kind, bare value and source position
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Tag name for start/end tags, literal text for content
    pub value: String,
    pub pos: Pos,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, pos: Pos) -> Self {
        Self {
            kind,
            value: value.into(),
            pos,
        }
    }

    pub const fn is_start_tag(&self) -> bool {
        matches!(self.kind, TokenKind::StartTag)
    }

    pub const fn is_content(&self) -> bool {
        matches!(self.kind, TokenKind::Content)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::StartTag => write!(f, "<{}>", self.value),
            TokenKind::EndTag => write!(f, "</{}>", self.value),
            TokenKind::Content => write!(f, "{}", self.value),
            TokenKind::Unknown | TokenKind::Comment => {
                write!(f, "{} {:?}", self.kind.name(), self.value)
            }
        }
    }
}
