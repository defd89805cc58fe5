use thiserror::Error;

use super::grammars::formula::Rule;
use crate::logic::NodeKind;

pub type Result<T> = std::result::Result<T, ParseError>;

/// Every error aborts the build; no partial tree is ever returned.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The input has no derivation under the formula grammar.
    #[error("formula does not match the grammar\n{0}")]
    Grammar(Box<pest::error::Error<Rule>>),

    /// Parentheses and negations nest deeper than the parser recurses.
    #[error("formula nests {depth} levels deep, at most {limit} are supported")]
    NestingTooDeep { depth: usize, limit: usize },

    /// A syntax tree node without children where an inner node was expected.
    #[error("syntax tree node has no children")]
    InvalidSyntaxTree,

    /// An inner node where a leaf was expected.
    #[error("expected a leaf in the syntax tree")]
    NoLeafFound,

    #[error("syntax tree leaf covers an empty substring")]
    EmptySubstring,

    /// Neither a letter nor a connective, or a connective in the wrong position.
    #[error("unrecognized character '{0}'")]
    InvalidCharacter(char),

    #[error("syntax tree leaf '{0}' holds more than one character")]
    MultiCharacterLeaf(String),

    #[error("syntax tree node has {0} children, expected 1, 2, 3 or 5")]
    UnsupportedChildCount(usize),

    #[error("{0} node can't take another child")]
    ChildLimit(NodeKind),

    #[error("{0} node is missing a child")]
    IncompleteNode(NodeKind),
}

impl From<pest::error::Error<Rule>> for ParseError {
    fn from(value: pest::error::Error<Rule>) -> Self {
        ParseError::Grammar(Box::new(value))
    }
}
