//! Parsing of propositional logic formulas into typed syntax trees.
//!
//! Formulas are built from single letter atoms, the connectives `¬ ∧ ∨ → ↔`
//! and parentheses. Every binary connective must be parenthesized, the input
//! as a whole is not required to be. Whitespace is ignored.
//!
//! ```
//! let tree = propositional_formula_parser::parse("(p ∧ ¬q)").unwrap();
//! assert_eq!(tree.to_string(), "(Root (Conjunction P|(Negation _|Q))|_)");
//! ```

pub mod log;
pub mod logic;
pub mod parsers;

pub use logic::{
    BinaryConnective, Connective, Diagnostic, LogicTree, Node, NodeId, NodeKind, NodeRef,
};
pub use parsers::{normalize, parse, ParseError, Result};
