//! # Spec Tree
//!
//! A parsed spec is stored as an arena of slots addressed by [`NodeId`].
//! Each slot is either a literal (a leaf holding its raw text) or an op (a
//! name plus the ids of its children, in argument order).
//!
//! Callers never touch slots directly. They work with borrowed views:
//!
//! - [`Node`] - either a [`Literal`] or an [`Op`]
//! - [`Op`] - a named call and its ordered arguments
//! - [`Literal`] - a leaf argument
//!
//! The root is always an op, so [`SpecTree::root`] returns an [`Op`].
//!
//! Slots are laid out in pre-order (the root first, each op before its
//! arguments), which is the order the parser meets them in the source text.
//! Two trees are equal exactly when they have the same shape and values.

use crate::error::SpecError;

/// Position of a node inside its [`SpecTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root of every tree.
    pub const ROOT: NodeId = NodeId(0);

    /// Pre-order index of this node.
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    Literal(String),
    Op { name: String, children: Vec<NodeId> },
}

/// An immutable, validated spec tree.
///
/// Produced by [`parse`](crate::parse) or [`Parser::parse`](crate::Parser::parse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecTree {
    slots: Vec<Slot>,
}

impl SpecTree {
    /// The root call.
    pub fn root(&self) -> Op<'_> {
        match self.node(NodeId::ROOT) {
            Node::Op(op) => op,
            // The builder only ever finishes a tree whose first slot is an op.
            Node::Literal(_) => unreachable!("spec tree root is always an op"),
        }
    }

    /// Looks up a node by id.
    pub fn get(&self, id: NodeId) -> Option<Node<'_>> {
        (id.0 < self.slots.len()).then(|| self.node(id))
    }

    /// Total number of nodes, literals included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`; a tree holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All nodes in pre-order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Node<'_>> + ExactSizeIterator {
        (0..self.slots.len()).map(move |i| self.node(NodeId(i)))
    }

    fn node(&self, id: NodeId) -> Node<'_> {
        match &self.slots[id.0] {
            Slot::Literal(value) => Node::Literal(Literal { id, value }),
            Slot::Op { name, children } => Node::Op(Op {
                tree: self,
                id,
                name,
                children,
            }),
        }
    }
}

/// A node view: either a leaf literal or a named call.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// A leaf argument.
    Literal(Literal<'a>),
    /// A named call.
    Op(Op<'a>),
}

impl<'a> Node<'a> {
    /// Id of this node in its tree.
    pub fn id(&self) -> NodeId {
        match self {
            Node::Literal(lit) => lit.id,
            Node::Op(op) => op.id,
        }
    }

    /// The literal text, or the op name.
    pub fn value(&self) -> &'a str {
        match self {
            Node::Literal(lit) => lit.value,
            Node::Op(op) => op.name,
        }
    }

    /// Children in argument order. Always empty for a literal.
    pub fn children(&self) -> Children<'a> {
        match self {
            Node::Literal(_) => Children::empty(),
            Node::Op(op) => op.children(),
        }
    }

    /// Returns `true` for a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Literal(_))
    }

    /// Returns `true` for an op.
    pub fn is_op(&self) -> bool {
        matches!(self, Node::Op(_))
    }

    /// The op view, if this is an op.
    pub fn as_op(&self) -> Option<Op<'a>> {
        match self {
            Node::Op(op) => Some(*op),
            Node::Literal(_) => None,
        }
    }

    /// The literal view, if this is a literal.
    pub fn as_literal(&self) -> Option<Literal<'a>> {
        match self {
            Node::Literal(lit) => Some(*lit),
            Node::Op(_) => None,
        }
    }
}

/// A leaf argument holding raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal<'a> {
    id: NodeId,
    value: &'a str,
}

impl<'a> Literal<'a> {
    /// Id of this literal in its tree.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The raw text.
    pub fn value(&self) -> &'a str {
        self.value
    }
}

/// A named call with ordered arguments.
#[derive(Clone, Copy)]
pub struct Op<'a> {
    tree: &'a SpecTree,
    id: NodeId,
    name: &'a str,
    children: &'a [NodeId],
}

impl<'a> Op<'a> {
    /// Id of this op in its tree.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The call name.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` for a call without arguments, such as `any()`.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The argument at `index`.
    pub fn child(&self, index: usize) -> Option<Node<'a>> {
        self.children.get(index).map(|id| self.tree.node(*id))
    }

    /// Arguments in order.
    pub fn children(&self) -> Children<'a> {
        Children {
            tree: Some(self.tree),
            ids: self.children.iter(),
        }
    }

    /// Text of the literal arguments, in order, skipping nested calls.
    pub fn literals(self) -> impl DoubleEndedIterator<Item = &'a str> + 'a {
        self.children()
            .filter_map(|child| child.as_literal().map(|lit| lit.value()))
    }

    /// The tree this op belongs to.
    pub fn tree(&self) -> &'a SpecTree {
        self.tree
    }
}

impl std::fmt::Debug for Op<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Op")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("children", &self.children)
            .finish()
    }
}

/// Iterator over the arguments of a node.
#[derive(Debug, Clone)]
pub struct Children<'a> {
    tree: Option<&'a SpecTree>,
    ids: std::slice::Iter<'a, NodeId>,
}

impl<'a> Children<'a> {
    fn empty() -> Self {
        let ids: &'a [NodeId] = &[];
        Self {
            tree: None,
            ids: ids.iter(),
        }
    }
}

impl<'a> Iterator for Children<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree?;
        self.ids.next().map(|id| tree.node(*id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl DoubleEndedIterator for Children<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let tree = self.tree?;
        self.ids.next_back().map(|id| tree.node(*id))
    }
}

impl ExactSizeIterator for Children<'_> {}

/// Incremental arena builder used by the parser.
#[derive(Debug, Default)]
pub(crate) struct TreeBuilder {
    slots: Vec<Slot>,
}

impl TreeBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn has_root(&self) -> bool {
        !self.slots.is_empty()
    }

    pub(crate) fn push_op(&mut self, name: String) -> NodeId {
        self.push(Slot::Op {
            name,
            children: Vec::new(),
        })
    }

    pub(crate) fn push_literal(&mut self, value: String) -> NodeId {
        self.push(Slot::Literal(value))
    }

    fn push(&mut self, slot: Slot) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(slot);
        id
    }

    /// Appends `child` to the argument list of `parent`.
    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<(), SpecError> {
        match self.slots.get_mut(parent.0) {
            Some(Slot::Op { children, .. }) => {
                children.push(child);
                Ok(())
            }
            Some(Slot::Literal(_)) => Err(SpecError::InvariantViolation(
                "a literal is a leaf and cannot have children",
            )),
            None => Err(SpecError::InvariantViolation("attach to an unknown node")),
        }
    }

    pub(crate) fn finish(self) -> Result<SpecTree, SpecError> {
        match self.slots.first() {
            Some(Slot::Op { .. }) => Ok(SpecTree { slots: self.slots }),
            Some(Slot::Literal(_)) => Err(SpecError::InvariantViolation(
                "spec tree root must be an op",
            )),
            None => Err(SpecError::InvariantViolation("spec tree has no root")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SpecTree {
        // a(b,c(d))
        let mut builder = TreeBuilder::new();
        let a = builder.push_op("a".into());
        let b = builder.push_literal("b".into());
        builder.attach(a, b).unwrap();
        let c = builder.push_op("c".into());
        builder.attach(a, c).unwrap();
        let d = builder.push_literal("d".into());
        builder.attach(c, d).unwrap();
        builder.finish().unwrap()
    }

    #[test]
    fn test_attach_to_literal_is_invariant_violation() {
        let mut builder = TreeBuilder::new();
        let root = builder.push_op("a".into());
        let leaf = builder.push_literal("b".into());
        builder.attach(root, leaf).unwrap();
        let extra = builder.push_literal("c".into());

        let err = builder.attach(leaf, extra).unwrap_err();
        assert!(matches!(err, SpecError::InvariantViolation(_)));
    }

    #[test]
    fn test_finish_rejects_literal_root() {
        let mut builder = TreeBuilder::new();
        builder.push_literal("a".into());
        assert!(matches!(
            builder.finish(),
            Err(SpecError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_views() {
        let tree = sample();
        let root = tree.root();
        assert_eq!(root.name(), "a");
        assert_eq!(root.len(), 2);
        assert_eq!(root.literals().collect::<Vec<_>>(), vec!["b"]);

        let c = root.child(1).and_then(|n| n.as_op()).unwrap();
        assert_eq!(c.name(), "c");
        assert_eq!(c.literals().collect::<Vec<_>>(), vec!["d"]);
        assert!(root.child(2).is_none());

        let leaf = root.child(0).unwrap();
        assert!(leaf.is_literal());
        assert_eq!(leaf.children().count(), 0);
    }

    #[test]
    fn test_iter_is_pre_order() {
        let tree = sample();
        let values: Vec<_> = tree.iter().map(|n| n.value()).collect();
        assert_eq!(values, vec!["a", "b", "c", "d"]);
        assert_eq!(tree.len(), 4);
        assert!(tree.get(NodeId(4)).is_none());
    }
}
