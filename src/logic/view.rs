use std::fmt;

use super::{BinaryConnective, LogicTree, Node, NodeId, NodeKind};

/// Printed in place of a child slot that has not been filled.
pub const MISSING_CHILD: &str = "?";

/// Read-only handle to one node of a [`LogicTree`].
#[derive(Clone, Copy)]
pub struct NodeRef<'t> {
    tree: &'t LogicTree,
    id: NodeId,
}

impl<'t> NodeRef<'t> {
    pub(crate) fn new(tree: &'t LogicTree, id: NodeId) -> Self {
        NodeRef { tree, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn node(&self) -> &'t Node {
        self.tree.node(self.id)
    }

    pub fn kind(&self) -> NodeKind {
        self.node().kind()
    }

    /// The uppercase letter of an atomic node.
    pub fn letter(&self) -> Option<char> {
        match self.node() {
            Node::Atomic { letter } => Some(*letter),
            _ => None,
        }
    }

    pub fn connective(&self) -> Option<BinaryConnective> {
        match self.node() {
            Node::Binary { connective, .. } => Some(*connective),
            _ => None,
        }
    }

    pub fn parent(&self) -> Option<NodeRef<'t>> {
        self.tree
            .parent_of(self.id)
            .map(|parent| NodeRef::new(self.tree, parent))
    }

    pub fn children(&self) -> impl Iterator<Item = NodeRef<'t>> + 't {
        let tree = self.tree;
        self.node()
            .slots()
            .into_iter()
            .flatten()
            .map(move |id| NodeRef::new(tree, id))
    }

    // child of the root
    pub fn primary(&self) -> Option<NodeRef<'t>> {
        match self.node() {
            Node::Root { child } => self.resolve(*child),
            _ => None,
        }
    }

    // operand of a negation
    pub fn secondary(&self) -> Option<NodeRef<'t>> {
        match self.node() {
            Node::Negation { child } => self.resolve(*child),
            _ => None,
        }
    }

    pub fn left(&self) -> Option<NodeRef<'t>> {
        match self.node() {
            Node::Binary { left, .. } => self.resolve(*left),
            _ => None,
        }
    }

    pub fn right(&self) -> Option<NodeRef<'t>> {
        match self.node() {
            Node::Binary { right, .. } => self.resolve(*right),
            _ => None,
        }
    }

    fn resolve(&self, slot: Option<NodeId>) -> Option<NodeRef<'t>> {
        slot.map(|id| NodeRef::new(self.tree, id))
    }

    fn fmt_slot(&self, f: &mut fmt::Formatter<'_>, slot: Option<NodeId>) -> fmt::Result {
        match self.resolve(slot) {
            Some(child) => fmt::Display::fmt(&child, f),
            None => f.write_str(MISSING_CHILD),
        }
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("node", self.node())
            .finish()
    }
}

// (Root child|_), (Negation _|child), (Conjunction left|right), atoms print their letter
impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind();
        match self.node() {
            Node::Atomic { letter } => write!(f, "{letter}"),
            Node::Root { child } => {
                write!(f, "({kind} ")?;
                self.fmt_slot(f, *child)?;
                f.write_str("|_)")
            }
            Node::Negation { child } => {
                write!(f, "({kind} _|")?;
                self.fmt_slot(f, *child)?;
                f.write_str(")")
            }
            Node::Binary { left, right, .. } => {
                write!(f, "({kind} ")?;
                self.fmt_slot(f, *left)?;
                f.write_str("|")?;
                self.fmt_slot(f, *right)?;
                f.write_str(")")
            }
        }
    }
}
