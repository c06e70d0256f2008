//! # Tree Traversal
//!
//! Depth-first, pre-order traversal over a [`SpecTree`] with two hooks per
//! node: [`Visitor::enter`] and [`Visitor::exit`]. Each hook returns a
//! [`Visit`] signal that steers the walk.
//!
//! | hook    | signal          | effect                                          |
//! |---------|-----------------|-------------------------------------------------|
//! | `enter` | `Continue`      | descend into the children                       |
//! | `enter` | other           | skip the children, `exit` still runs            |
//! | `exit`  | `StopSiblings`  | skip the remaining siblings of this node        |
//! | `exit`  | other           | carry on with the next sibling                  |
//!
//! `StopSiblings` only ends the sibling list it was returned in. An ancestor
//! stops early only if its own `exit` asks for it.
//!
//! The walk keeps its frames on the heap, so arbitrarily deep trees are safe.
//!
//! Two visitors ship with the crate: [`Dump`] for debugging output and
//! [`Render`], which writes the canonical `name(arg,arg)` form and backs the
//! `Display` impl of [`SpecTree`].

use crate::node::{Node, NodeId, SpecTree};
use std::fmt::{self, Write};

/// Traversal control signal returned by [`Visitor`] hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visit {
    /// Keep going.
    #[default]
    Continue,
    /// From `enter`: do not visit this node's children.
    SkipChildren,
    /// From `exit`: do not visit the rest of this node's siblings.
    StopSiblings,
}

/// A depth-first tree visitor.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a spec tree `Visitor`",
    label = "missing `Visitor` implementation",
    note = "Visitors implement `enter` and `exit`, both returning a `Visit` signal."
)]
pub trait Visitor {
    /// Called before the children of `node`.
    fn enter(&mut self, node: Node<'_>) -> Visit;

    /// Called after the children of `node` (or after `enter` skipped them).
    fn exit(&mut self, node: Node<'_>) -> Visit;
}

impl<V: Visitor + ?Sized> Visitor for &mut V {
    fn enter(&mut self, node: Node<'_>) -> Visit {
        (**self).enter(node)
    }

    fn exit(&mut self, node: Node<'_>) -> Visit {
        (**self).exit(node)
    }
}

struct Frame {
    id: NodeId,
    next: usize,
    descend: bool,
}

impl SpecTree {
    /// Walks the tree from the root and returns the root's `exit` signal.
    pub fn walk<V: Visitor>(&self, mut visitor: V) -> Visit {
        let root = self.root();
        let descend = visitor.enter(Node::Op(root)) == Visit::Continue;
        let mut stack = vec![Frame {
            id: root.id(),
            next: 0,
            descend,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(node) = self.get(frame.id) else {
                break;
            };
            if frame.descend {
                if let Some(child) = node.as_op().and_then(|op| op.child(frame.next)) {
                    frame.next += 1;
                    let descend = visitor.enter(child) == Visit::Continue;
                    stack.push(Frame {
                        id: child.id(),
                        next: 0,
                        descend,
                    });
                    continue;
                }
            }

            stack.pop();
            let signal = visitor.exit(node);
            match stack.last_mut() {
                Some(parent) if signal == Visit::StopSiblings => parent.descend = false,
                Some(_) => {}
                None => return signal,
            }
        }
        Visit::Continue
    }

    /// Renders the tree with [`Dump`].
    pub fn dump(&self) -> String {
        let mut dump = Dump::new(String::new());
        self.walk(&mut dump);
        // Writing into a `String` never fails.
        dump.into_inner().unwrap_or_default()
    }
}

/// Writes one line per node, indented by depth and tagged `(lit)` or `(op)`.
///
/// ```text
///   a (op)
///     b (lit)
///     c (op)
///       d (lit)
/// ```
///
/// The dump stops at the first write error, which
/// [`into_inner`](Dump::into_inner) hands back.
pub struct Dump<W> {
    out: W,
    depth: usize,
    result: fmt::Result,
}

impl<W: Write> Dump<W> {
    /// Dump into `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            depth: 0,
            result: Ok(()),
        }
    }

    /// Returns the writer, or the first write error.
    pub fn into_inner(self) -> Result<W, fmt::Error> {
        self.result.map(|()| self.out)
    }
}

impl<W: Write> Visitor for Dump<W> {
    fn enter(&mut self, node: Node<'_>) -> Visit {
        self.depth += 1;
        if self.result.is_err() {
            return Visit::SkipChildren;
        }
        let tag = if node.is_literal() { "lit" } else { "op" };
        let indent = "  ".repeat(self.depth);
        self.result = writeln!(self.out, "{indent}{} ({tag})", node.value());
        if self.result.is_ok() {
            Visit::Continue
        } else {
            Visit::SkipChildren
        }
    }

    fn exit(&mut self, _node: Node<'_>) -> Visit {
        self.depth = self.depth.saturating_sub(1);
        if self.result.is_ok() {
            Visit::Continue
        } else {
            Visit::StopSiblings
        }
    }
}

/// Writes the canonical `name(arg,arg)` form of a tree.
pub struct Render<W> {
    out: W,
    /// Arguments written so far, one entry per open call.
    open: Vec<usize>,
    result: fmt::Result,
}

impl<W: Write> Render<W> {
    /// Render into `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            open: Vec::new(),
            result: Ok(()),
        }
    }

    /// Returns the writer, or the first write error.
    pub fn finish(self) -> Result<W, fmt::Error> {
        self.result.map(|()| self.out)
    }

    fn write(&mut self, s: &str) -> Visit {
        if self.result.is_ok() {
            self.result = self.out.write_str(s);
        }
        if self.result.is_ok() {
            Visit::Continue
        } else {
            Visit::SkipChildren
        }
    }
}

impl<W: Write> Visitor for Render<W> {
    fn enter(&mut self, node: Node<'_>) -> Visit {
        if let Some(written) = self.open.last_mut() {
            *written += 1;
            if *written > 1 {
                self.write(",");
            }
        }
        self.write(node.value());
        if node.is_op() {
            self.open.push(0);
            self.write("(")
        } else {
            Visit::Continue
        }
    }

    fn exit(&mut self, node: Node<'_>) -> Visit {
        if node.is_op() {
            self.open.pop();
            self.write(")");
        }
        if self.result.is_ok() {
            Visit::Continue
        } else {
            Visit::StopSiblings
        }
    }
}

impl fmt::Display for SpecTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut render = Render::new(f);
        self.walk(&mut render);
        render.finish().map(|_| ())
    }
}
