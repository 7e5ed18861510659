//! Node tree built from a validated token stream

pub mod builder;
pub mod node;

pub use builder::TreeBuilder;
pub use node::{Document, Node, NodeId};
