//! tagtree: a strict parser for a minimal tag-only XML dialect
//!
//! Documents consist of bare start tags `<name>`, bare end tags `</name>` and
//! single text runs. Parsing runs in two phases:
//! - the [`Scanner`] turns text into a nesting-validated token stream
//! - the [`TreeBuilder`] turns tokens into a [`Document`] whose elements are
//!   keyed by tag name under their parent
//!
//! Any violation aborts the parse; there is no recovery.
//!
//! # Examples
//! ```
//! # fn main() -> Result<(), tagtree::Error> {
//! let doc = tagtree::from_str("<a><b>x</b></a>")?;
//! assert_eq!(doc.root().name(), "a");
//! assert_eq!(doc.select("a/b").and_then(|n| n.value()), Some("x"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

use std::path::Path;

use tracing::{debug, instrument, warn};

pub mod collections;
pub mod config;
pub mod error;
pub mod lexer;
pub mod tree;

// Re-exports
pub use collections::{BoundedStack, Collection};
pub use config::Config;
pub use error::{Error, ErrorKind, LoadError, Pos, Result, Span};
pub use lexer::scanner::scan;
pub use lexer::{Scanner, Token, TokenKind};
pub use tree::{Document, Node, NodeId, TreeBuilder};

/// Parse a document with default configuration
pub fn from_str(s: &str) -> Result<Document> {
    from_str_with_config(s, Config::default())
}

/// Parse with custom configuration
pub fn from_str_with_config(s: &str, config: Config) -> Result<Document> {
    let tokens = Scanner::with_config(s, config).scan().inspect_err(|e| {
        warn!(error = %e, "document rejected by scanner");
    })?;
    TreeBuilder::with_config(config)
        .build(&tokens)
        .inspect_err(|e| warn!(error = %e, "document rejected by tree builder"))
}

/// Parse from bytes, which must be UTF-8
pub fn from_bytes(bytes: &[u8]) -> Result<Document> {
    let s = std::str::from_utf8(bytes)
        .map_err(|e| Error::syntax(byte_pos(bytes, e.valid_up_to()), "invalid utf-8"))?;
    from_str(s)
}

/// 1-based line and column of byte `offset`
fn byte_pos(bytes: &[u8], offset: usize) -> Pos {
    let head = bytes.get(..offset).unwrap_or(bytes);
    let line = head.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = head.iter().rposition(|&b| b == b'\n').map_or(0, |i| i + 1);
    Pos::new(offset, line, offset - line_start + 1)
}

/// Read and parse a file; I/O failures are returned as-is
#[instrument(skip(config))]
pub fn parse_file_with_config(
    path: &Path,
    config: Config,
) -> std::result::Result<Document, LoadError> {
    debug!("Reading file");
    let content = std::fs::read_to_string(path)?;
    let doc = from_str_with_config(&content, config)?;
    debug!(nodes = doc.len(), "Parsing completed");
    Ok(doc)
}

/// Read and parse a file with default configuration
pub fn parse_file(path: impl AsRef<Path>) -> std::result::Result<Document, LoadError> {
    parse_file_with_config(path.as_ref(), Config::default())
}
