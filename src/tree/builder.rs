//! Tree builder turning a token stream into a [`Document`]

use tracing::debug;

use crate::collections::{BoundedStack, Collection};
use crate::config::Config;
use crate::error::{Error, ErrorKind, Pos, Result, Span};
use crate::lexer::{Token, TokenKind};
use crate::tree::node::{Document, Node, NodeId};

/// Builds the node tree while tracking the chain of open ancestors
#[derive(Clone, Copy, Debug, Default)]
pub struct TreeBuilder {
    config: Config,
}

/// State for a single build
struct Build {
    doc: Document,
    /// Open elements with the position of their start tag
    ancestors: BoundedStack<(NodeId, Pos)>,
}

impl TreeBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a new builder with custom configuration
    pub const fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Build the tree, stopping at the first violation
    pub fn build(&self, tokens: &[Token]) -> Result<Document> {
        let mut build = Build {
            doc: Document::new(),
            ancestors: BoundedStack::with_capacity(self.config.max_depth),
        };

        for token in tokens {
            match token.kind {
                TokenKind::StartTag => build.open(token)?,
                TokenKind::Content => build.text(token)?,
                TokenKind::EndTag => build.close(token)?,
                TokenKind::Unknown | TokenKind::Comment => {
                    return Err(Error::with_message(
                        ErrorKind::UnknownToken,
                        Span::at(token.pos),
                        format!("unknown token {token}"),
                    ));
                }
            }
        }

        build.finish()
    }
}

impl Build {
    fn open(&mut self, token: &Token) -> Result<()> {
        let parent = self.ancestors.peek().map(|(id, _)| *id);
        if parent.is_none() && !self.doc.is_empty() {
            return Err(Error::syntax(
                token.pos,
                format!("multiple root elements: <{}>", token.value),
            ));
        }

        let id = self.doc.push(Node::new(token.value.as_str(), parent));
        if let Some(parent) = parent {
            let node = self.node_mut(parent, token.pos)?;
            if !node.insert_child(&token.value, id) {
                return Err(Error::syntax(
                    token.pos,
                    format!(
                        "duplicate child <{}> in element <{}>",
                        token.value,
                        node.name()
                    ),
                ));
            }
        }

        self.ancestors.offer((id, token.pos)).map_err(|err| {
            if let ErrorKind::CapacityExceeded { capacity } = *err.kind() {
                Error::new(
                    ErrorKind::MaxDepthExceeded { max: capacity },
                    Span::at(token.pos),
                )
            } else {
                err
            }
        })
    }

    fn text(&mut self, token: &Token) -> Result<()> {
        let Some(id) = self.ancestors.peek().map(|(id, _)| *id) else {
            return Err(Error::syntax(
                token.pos,
                format!("content {:?} outside of any element", token.value),
            ));
        };

        let node = self.node_mut(id, token.pos)?;
        if node.has_children() || node.value().is_some() {
            return Err(Error::syntax(
                token.pos,
                format!(
                    "element <{}> cannot hold both children and text",
                    node.name()
                ),
            ));
        }
        node.set_value(token.value.as_str());
        Ok(())
    }

    fn close(&mut self, token: &Token) -> Result<()> {
        let (id, _) = self.ancestors.poll().map_err(|_| {
            Error::syntax(token.pos, format!("unmatched end tag </{}>", token.value))
        })?;

        let node = self.node_mut(id, token.pos)?;
        if node.name() != token.value {
            return Err(Error::syntax(
                token.pos,
                format!(
                    "mismatched end tag </{}>, expected </{}>",
                    token.value,
                    node.name()
                ),
            ));
        }
        Ok(())
    }

    fn finish(self) -> Result<Document> {
        if self.doc.is_empty() {
            return Err(Error::syntax(
                Pos::new(0, 1, 1),
                "document has no root element",
            ));
        }
        if let Some((id, pos)) = self.ancestors.peek() {
            let name = self.doc.get(*id).map(Node::name).unwrap_or_default();
            return Err(Error::syntax(*pos, format!("unclosed element <{name}>")));
        }

        debug!(nodes = self.doc.len(), "tree built");
        Ok(self.doc)
    }

    fn node_mut(&mut self, id: NodeId, pos: Pos) -> Result<&mut Node> {
        self.doc
            .get_mut(id)
            .ok_or_else(|| Error::syntax(pos, format!("dangling node {}", id.index())))
    }
}
