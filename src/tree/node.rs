//! Arena-backed node tree

use std::fmt;

use indexmap::IndexMap;

/// Handle to a node inside its [`Document`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Element created from one start tag
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    name: String,
    value: Option<String>,
    parent: Option<NodeId>,
    children: IndexMap<String, NodeId>,
}

impl Node {
    pub(crate) fn new(name: impl Into<String>, parent: Option<NodeId>) -> Self {
        Self {
            name: name.into(),
            value: None,
            parent,
            children: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text content, if the element held a text run
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Enclosing element; `None` for the root
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children keyed by tag name
    pub const fn children(&self) -> &IndexMap<String, NodeId> {
        &self.children
    }

    pub fn child(&self, name: &str) -> Option<NodeId> {
        self.children.get(name).copied()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub(crate) fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    /// Returns `false` when a child of that name already exists
    pub(crate) fn insert_child(&mut self, name: &str, id: NodeId) -> bool {
        if self.children.contains_key(name) {
            return false;
        }
        self.children.insert(name.to_string(), id);
        true
    }
}

/// Parsed document; owns every node, the first one being the root
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub(crate) const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    pub const fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    /// The root element
    ///
    /// # Panics
    ///
    /// Never for a document returned by the tree builder, which always
    /// holds at least the root.
    #[allow(clippy::indexing_slicing)]
    pub fn root(&self) -> &Node {
        &self.nodes[0]
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Number of elements in the document
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in document order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    pub fn parent(&self, id: NodeId) -> Option<&Node> {
        self.get(id)?.parent.and_then(|p| self.get(p))
    }

    pub fn child(&self, id: NodeId, name: &str) -> Option<&Node> {
        self.get(id)?.child(name).and_then(|c| self.get(c))
    }

    /// Look up a node by a slash-separated path of names starting at the root,
    /// e.g. `"config/server/port"`
    pub fn select(&self, path: &str) -> Option<&Node> {
        let mut names = path.split('/').filter(|s| !s.is_empty());
        let root = self.nodes.first()?;
        if names.next()? != root.name {
            return None;
        }
        names.try_fold(root, |node, name| node.child(name).and_then(|c| self.get(c)))
    }
}

/// Indentation stops growing past this depth; deeper lines carry a `[depth]` marker
const MAX_INDENT_DEPTH: usize = 32;

fn write_indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth.min(MAX_INDENT_DEPTH) {
        f.write_str("  ")?;
    }
    if depth > MAX_INDENT_DEPTH {
        write!(f, "[{depth}] ")?;
    }
    Ok(())
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending: Vec<(NodeId, usize)> = Vec::new();
        if !self.nodes.is_empty() {
            pending.push((self.root_id(), 0));
        }

        while let Some((id, depth)) = pending.pop() {
            let Some(node) = self.get(id) else {
                continue;
            };
            write_indent(f, depth)?;
            f.write_str(&node.name)?;
            match &node.value {
                Some(value) => writeln!(f, " = {value}")?,
                None => writeln!(f)?,
            }
            pending.extend(node.children.values().rev().map(|c| (*c, depth + 1)));
        }
        Ok(())
    }
}
