use crate::log::targets::BUILDER;
use crate::logic::{Connective, Diagnostic, LogicTree, Node, NodeId};

use super::syntax_tree::SyntaxTree;
use super::{ParseError, Result};

/// Converts a [`SyntaxTree`] into a [`LogicTree`].
///
/// Dispatch depends only on the number of children of each syntax node:
///
/// | children | production            | result                               |
/// |----------|-----------------------|--------------------------------------|
/// | 1        | `atom`                | atomic node                          |
/// | 2        | `¬ formula`           | negation node, operand as its child  |
/// | 3        | `( formula )`         | nothing, the operand joins the parent|
/// | 5        | `( formula op formula )` | binary node, left then right      |
pub struct TreeBuilder {
    tree: LogicTree,
}

impl TreeBuilder {
    /// Builds the whole tree below a fresh root node.
    pub fn build(syntax: &SyntaxTree) -> Result<LogicTree> {
        let mut builder = TreeBuilder {
            tree: LogicTree::new(),
        };
        let root = builder.tree.root_id();
        builder.build_node(syntax, root)?;
        builder.tree.check_complete()?;
        Ok(builder.tree)
    }

    // builds `syntax` and attaches it as the next child of `parent`
    fn build_node(&mut self, syntax: &SyntaxTree, parent: NodeId) -> Result<()> {
        let children = syntax.children().ok_or(ParseError::InvalidSyntaxTree)?;
        match children {
            [atom] => {
                let node = self.build_atom(atom)?;
                self.tree.attach(parent, node)
            }
            [operator, operand] => {
                let symbol = TreeBuilder::leaf_char(operator)?.0;
                match Connective::from_symbol(symbol) {
                    Some(Connective::Negation) => {}
                    _ => return Err(ParseError::InvalidCharacter(symbol)),
                }
                let negation = self.tree.push(Node::negation());
                log::debug!(target: BUILDER, "Negation {negation:?} under {parent:?}");
                self.build_node(operand, negation)?;
                self.tree.attach(parent, negation)
            }
            // parentheses only group, the operand goes straight to the parent
            [_, operand, _] => self.build_node(operand, parent),
            [_, left, operator, right, _] => {
                let symbol = TreeBuilder::leaf_char(operator)?.0;
                let connective = match Connective::from_symbol(symbol) {
                    Some(Connective::Binary(connective)) => connective,
                    _ => return Err(ParseError::InvalidCharacter(symbol)),
                };
                let binary = self.tree.push(Node::binary(connective));
                log::debug!(target: BUILDER, "{} {binary:?} under {parent:?}", connective.kind());
                self.build_node(left, binary)?;
                self.build_node(right, binary)?;
                self.tree.attach(parent, binary)
            }
            children => {
                log::warn!(target: BUILDER, "Syntax node with {} children", children.len());
                Err(ParseError::UnsupportedChildCount(children.len()))
            }
        }
    }

    fn build_atom(&mut self, atom: &SyntaxTree) -> Result<NodeId> {
        let (letter, offset) = TreeBuilder::leaf_char(atom)?;
        if !letter.is_alphabetic() {
            return Err(ParseError::InvalidCharacter(letter));
        }
        let upper = TreeBuilder::uppercase(letter);
        // titlecase letters such as 'ǅ' change too without being lowercase
        if letter.is_lowercase() || upper != letter {
            log::info!(target: BUILDER, "Atom '{letter}' at {offset} is not uppercase");
            self.tree.report(Diagnostic::LowercaseAtom { letter, offset });
        }
        let node = self.tree.push(Node::atomic(upper));
        log::debug!(target: BUILDER, "Atomic {node:?} '{letter}'");
        Ok(node)
    }

    // the single character of a leaf and its byte offset
    fn leaf_char(syntax: &SyntaxTree) -> Result<(char, usize)> {
        let span = syntax.leaf().ok_or(ParseError::NoLeafFound)?;
        let text = span.as_str();
        let mut chars = text.chars();
        let letter = chars.next().ok_or(ParseError::EmptySubstring)?;
        if chars.next().is_some() {
            return Err(ParseError::MultiCharacterLeaf(text.to_owned()));
        }
        Ok((letter, span.start()))
    }

    // letters without a single-character uppercase form are kept as they are
    fn uppercase(letter: char) -> char {
        let mut upper = letter.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(single), None) => single,
            _ => letter,
        }
    }
}
