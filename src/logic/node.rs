use std::fmt;

use super::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    Root,
    Atomic,
    Negation,
    Conjunction,
    Disjunction,
    Conditional,
    Biconditional,
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Root => "Root",
            NodeKind::Atomic => "Atomic",
            NodeKind::Negation => "Negation",
            NodeKind::Conjunction => "Conjunction",
            NodeKind::Disjunction => "Disjunction",
            NodeKind::Conditional => "Conditional",
            NodeKind::Biconditional => "Biconditional",
        }
    }

    // number of child slots a node of this kind owns
    pub fn arity(&self) -> usize {
        match self {
            NodeKind::Atomic => 0,
            NodeKind::Root | NodeKind::Negation => 1,
            NodeKind::Conjunction
            | NodeKind::Disjunction
            | NodeKind::Conditional
            | NodeKind::Biconditional => 2,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryConnective {
    Conjunction,
    Disjunction,
    Conditional,
    Biconditional,
}

impl BinaryConnective {
    pub fn symbol(&self) -> char {
        match self {
            BinaryConnective::Conjunction => '∧',
            BinaryConnective::Disjunction => '∨',
            BinaryConnective::Conditional => '→',
            BinaryConnective::Biconditional => '↔',
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            BinaryConnective::Conjunction => NodeKind::Conjunction,
            BinaryConnective::Disjunction => NodeKind::Disjunction,
            BinaryConnective::Conditional => NodeKind::Conditional,
            BinaryConnective::Biconditional => NodeKind::Biconditional,
        }
    }
}

/// Operator characters accepted by the formula grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connective {
    Negation,
    Binary(BinaryConnective),
}

impl Connective {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '¬' => Some(Connective::Negation),
            '∧' => Some(Connective::Binary(BinaryConnective::Conjunction)),
            '∨' => Some(Connective::Binary(BinaryConnective::Disjunction)),
            '→' => Some(Connective::Binary(BinaryConnective::Conditional)),
            '↔' => Some(Connective::Binary(BinaryConnective::Biconditional)),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Connective::Negation => '¬',
            Connective::Binary(binary) => binary.symbol(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Connective::Negation => NodeKind::Negation,
            Connective::Binary(binary) => binary.kind(),
        }
    }
}

// Child slots are `None` only while the builder is still filling them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Root {
        child: Option<NodeId>,
    },
    Atomic {
        letter: char,
    },
    Negation {
        child: Option<NodeId>,
    },
    Binary {
        connective: BinaryConnective,
        left: Option<NodeId>,
        right: Option<NodeId>,
    },
}

impl Node {
    pub fn root() -> Self {
        Node::Root { child: None }
    }

    pub fn atomic(letter: char) -> Self {
        Node::Atomic { letter }
    }

    pub fn negation() -> Self {
        Node::Negation { child: None }
    }

    pub fn binary(connective: BinaryConnective) -> Self {
        Node::Binary {
            connective,
            left: None,
            right: None,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Root { .. } => NodeKind::Root,
            Node::Atomic { .. } => NodeKind::Atomic,
            Node::Negation { .. } => NodeKind::Negation,
            Node::Binary { connective, .. } => connective.kind(),
        }
    }

    // slots in the order they are filled; Atomic has none
    pub(crate) fn slots(&self) -> [Option<NodeId>; 2] {
        match self {
            Node::Root { child } | Node::Negation { child } => [*child, None],
            Node::Atomic { .. } => [None, None],
            Node::Binary { left, right, .. } => [*left, *right],
        }
    }

    // first empty slot, or None when the node is full
    pub(crate) fn next_free_slot(&mut self) -> Option<&mut Option<NodeId>> {
        match self {
            Node::Root { child } | Node::Negation { child } => {
                child.is_none().then_some(child)
            }
            Node::Atomic { .. } => None,
            Node::Binary { left, right, .. } => {
                if left.is_none() {
                    Some(left)
                } else if right.is_none() {
                    Some(right)
                } else {
                    None
                }
            }
        }
    }

    pub(crate) fn is_complete(&self) -> bool {
        let filled = self.slots().iter().filter(|slot| slot.is_some()).count();
        filled == self.kind().arity()
    }
}
