//! Error types for tagtree

use std::fmt;
use std::io;
use thiserror::Error;

/// Position in source text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    /// Byte offset from the start of the document
    pub offset: usize,
    /// 1-based line number
    pub line: usize,
    /// 1-based column, counted in bytes
    pub col: usize,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.offset, self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: usize, col: usize) -> Self {
        Self { offset, line, col }
    }
}

/// Span representing a range in source text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub const fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    pub const fn at(pos: Pos) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub const fn empty() -> Self {
        Self {
            start: Pos::new(0, 0, 0),
            end: Pos::new(0, 0, 0),
        }
    }
}

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Any lexical or structural violation of the grammar
    InvalidSyntax,
    /// Push onto a bounded stack that is already full
    CapacityExceeded { capacity: usize },
    /// Pop from an empty stack
    EmptyStack,
    /// Token kind the tree builder does not handle
    UnknownToken,
    MaxDepthExceeded { max: usize },
    MaxSizeExceeded { max: usize },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSyntax => write!(f, "invalid syntax"),
            Self::CapacityExceeded { capacity } => {
                write!(f, "stack capacity exceeded: {capacity}")
            }
            Self::EmptyStack => write!(f, "stack is empty"),
            Self::UnknownToken => write!(f, "unknown token"),
            Self::MaxDepthExceeded { max } => write!(f, "max depth exceeded: {max}"),
            Self::MaxSizeExceeded { max } => write!(f, "max size exceeded: {max}"),
        }
    }
}

/// Main error type for tagtree
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    span: Span,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            span,
            message,
        }
    }

    pub fn with_message(kind: ErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }

    /// Syntax error anchored at a single position
    pub fn syntax(pos: Pos, message: impl Into<String>) -> Self {
        Self::syntax_span(Span::at(pos), message)
    }

    /// Syntax error covering the offending text
    pub fn syntax_span(span: Span, message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::InvalidSyntax, span, message)
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_syntax(&self) -> bool {
        self.kind == ErrorKind::InvalidSyntax
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error at {}: {}", self.span.start, self.message)
    }
}

/// Result type alias for tagtree
pub type Result<T> = std::result::Result<T, Error>;

/// Failure while loading and parsing a document from disk
#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Parse(#[from] Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_display() {
        let pos = Pos::new(42, 10, 5);
        assert_eq!(pos.to_string(), "42:10:5");
    }

    #[test]
    fn test_error_defaults_message_to_kind() {
        let err = Error::new(ErrorKind::EmptyStack, Span::empty());
        assert_eq!(err.kind(), &ErrorKind::EmptyStack);
        assert_eq!(err.message(), "stack is empty");
    }

    #[test]
    fn test_syntax_error_display() {
        let err = Error::syntax(Pos::new(7, 2, 3), "unmatched end tag </a>");
        assert!(err.is_syntax());
        assert_eq!(err.to_string(), "error at 7:2:3: unmatched end tag </a>");
    }

    #[test]
    fn test_load_error_is_transparent() {
        let io = io::Error::new(io::ErrorKind::NotFound, "missing.xml");
        let err = LoadError::from(io);
        assert_eq!(err.to_string(), "missing.xml");
    }
}
