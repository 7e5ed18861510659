//! Property-based tests for the scanner and tree builder
//!
//! These tests use proptest to verify:
//! 1. Well-formed documents always parse and keep their shape
//! 2. Layout (line breaks, indentation) never changes the resulting tree
//! 3. Arbitrary input never panics

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use tagtree::{from_str, Document, NodeId};

#[derive(Clone, Debug)]
enum Shape {
    Leaf(Option<String>),
    Branch(Vec<Shape>),
}

impl Shape {
    fn count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Branch(children) => 1 + children.iter().map(Self::count).sum::<usize>(),
        }
    }
}

fn shape() -> impl Strategy<Value = Shape> {
    let leaf = prop::option::of("[A-Za-z0-9_:/.,-]{1,12}").prop_map(Shape::Leaf);
    leaf.prop_recursive(4, 48, 4, |inner| {
        prop::collection::vec(inner, 1..4).prop_map(Shape::Branch)
    })
}

/// Siblings are named by position so they are always distinct
fn render(name: &str, shape: &Shape, depth: usize, pretty: bool, out: &mut String) {
    let indent = if pretty { "  ".repeat(depth) } else { String::new() };
    let newline = if pretty { "\n" } else { "" };
    match shape {
        Shape::Leaf(text) => {
            let text = text.as_deref().unwrap_or_default();
            out.push_str(&format!("{indent}<{name}>{text}</{name}>{newline}"));
        }
        Shape::Branch(children) => {
            out.push_str(&format!("{indent}<{name}>{newline}"));
            for (i, child) in children.iter().enumerate() {
                render(&format!("e{i}"), child, depth + 1, pretty, out);
            }
            out.push_str(&format!("{indent}</{name}>{newline}"));
        }
    }
}

fn matches_shape(doc: &Document, id: NodeId, shape: &Shape) -> bool {
    let Some(node) = doc.get(id) else {
        return false;
    };
    match shape {
        Shape::Leaf(text) => !node.has_children() && node.value() == text.as_deref(),
        Shape::Branch(children) => {
            node.value().is_none()
                && node.children().len() == children.len()
                && children.iter().enumerate().all(|(i, child)| {
                    node.child(&format!("e{i}"))
                        .is_some_and(|c| matches_shape(doc, c, child))
                })
        }
    }
}

proptest! {
    #[test]
    fn well_formed_documents_parse(name in "[A-Za-z_][A-Za-z0-9_]{0,8}", shape in shape()) {
        let mut input = String::new();
        render(&name, &shape, 0, true, &mut input);

        let doc = from_str(&input).unwrap();
        prop_assert_eq!(doc.root().name(), name.as_str());
        prop_assert_eq!(doc.len(), shape.count());
        prop_assert!(matches_shape(&doc, doc.root_id(), &shape));
    }

    #[test]
    fn layout_does_not_change_tree(shape in shape()) {
        let mut pretty = String::new();
        let mut compact = String::new();
        render("root", &shape, 0, true, &mut pretty);
        render("root", &shape, 0, false, &mut compact);

        prop_assert_eq!(from_str(&pretty).unwrap(), from_str(&compact).unwrap());
    }

    #[test]
    fn arbitrary_input_never_panics(input in "\\PC*") {
        let _ = from_str(&input);
    }

    #[test]
    fn tag_soup_never_panics(input in "(<[ab]>|</[ab]>|[xy]|\n| ){0,24}") {
        let _ = from_str(&input);
    }
}
