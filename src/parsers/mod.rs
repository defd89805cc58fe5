use pest::Parser as PestParser;

use crate::log::targets::GRAMMAR;
use crate::logic::LogicTree;

pub mod builder;
pub mod error;
pub mod grammars;
pub mod syntax_tree;

pub use builder::TreeBuilder;
pub use error::{ParseError, Result};
pub use grammars::formula::{FormulaPestParser, Rule};
pub use syntax_tree::SyntaxTree;

/// Wraps the input in one pair of parentheses and drops all whitespace, so the
/// top level always matches the parenthetical production.
pub fn normalize(input: &str) -> String {
    let mut normalized = String::with_capacity(input.len() + 2);
    normalized.push('(');
    normalized.extend(input.chars().filter(|c| !c.is_whitespace()));
    normalized.push(')');
    normalized
}

/// Deepest nesting accepted by [`syntax_tree`]. Grammar, builder and
/// description all recurse once per level.
pub const MAX_NESTING: usize = 256;

// Open parentheses plus pending negations, maximized over the input. A run of
// negations stays pending until its operand ends: an atom at the same level,
// or the closing parenthesis of a group opened right after it.
pub fn nesting_depth(normalized: &str) -> usize {
    let mut deepest = 0;
    // negations pending at each enclosing level
    let mut stack: Vec<usize> = vec![];
    let mut stacked = 0;
    let mut pending = 0;
    for c in normalized.chars() {
        match c {
            '(' => {
                stack.push(pending);
                stacked += pending;
                pending = 0;
            }
            ')' => {
                stacked -= stack.pop().unwrap_or(0);
                pending = 0;
            }
            '¬' => pending += 1,
            c if c.is_alphabetic() => pending = 0,
            _ => {}
        }
        deepest = deepest.max(stack.len() + stacked + pending);
    }
    deepest
}

/// Runs the formula grammar over an already normalized input.
pub fn syntax_tree(normalized: &str) -> Result<SyntaxTree<'_>> {
    log::debug!(target: GRAMMAR, "Parsing {normalized}");
    let depth = nesting_depth(normalized);
    if depth > MAX_NESTING {
        log::warn!(target: GRAMMAR, "Nesting depth {depth} over {MAX_NESTING}");
        return Err(ParseError::NestingTooDeep {
            depth,
            limit: MAX_NESTING,
        });
    }
    let mut pairs = FormulaPestParser::parse(Rule::input, normalized)?;
    let formula = pairs.next().ok_or(ParseError::InvalidSyntaxTree)?;
    Ok(SyntaxTree::from(formula))
}

/// Parses a propositional formula into its [`LogicTree`].
pub fn parse(input: &str) -> Result<LogicTree> {
    let normalized = normalize(input);
    let syntax = syntax_tree(&normalized)?;
    TreeBuilder::build(&syntax)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{nesting_depth, normalize, parse, syntax_tree, ParseError, MAX_NESTING};
    use crate::logic::NodeKind;

    #[test]
    fn normalize_sanity() {
        assert_eq!(normalize("p"), "(p)");
        assert_eq!(normalize(" ( p ∧\tq )\n"), "((p∧q))");
        assert_eq!(normalize(""), "()");
    }

    #[test]
    fn normalize_twice() {
        for input in ["p", "¬ p", "(p ∧ q)", " ((p∧q) → r)"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), format!("({once})"));
        }
    }

    #[test]
    fn top_level_is_parenthetical() {
        for input in ["p", "¬p", "(p∨q)"] {
            let normalized = normalize(input);
            let syntax = syntax_tree(&normalized).unwrap();
            assert_eq!(syntax.children().unwrap().len(), 3);
        }
    }

    #[test]
    fn parse_sanity() {
        let tree = parse("((p∧q)→r)").unwrap();
        assert_eq!(tree.to_string(), "(Root (Conditional (Conjunction P|Q)|R)|_)");
        let conditional = tree.root().primary().unwrap();
        assert_eq!(conditional.kind(), NodeKind::Conditional);
        assert_eq!(conditional.left().unwrap().kind(), NodeKind::Conjunction);
    }

    #[test]
    fn nesting_depth_sanity() {
        assert_eq!(nesting_depth("(p)"), 1);
        assert_eq!(nesting_depth("((p∧q))"), 2);
        // the negation run ends at 'p', the group after it at its ')'
        assert_eq!(nesting_depth("(¬¬p∧¬(q∨r))"), 3);
        assert_eq!(nesting_depth("(¬¬(¬q∨r))"), 5);
        assert_eq!(nesting_depth("((p∧q)∨(r∧s))"), 2);
    }

    #[test]
    fn deep_nesting_is_rejected() {
        let negations = format!("{}p", "¬".repeat(100_000));
        assert!(matches!(
            parse(&negations),
            Err(ParseError::NestingTooDeep {
                depth: 100_001,
                limit: MAX_NESTING
            })
        ));

        let parentheses = format!("{}p{}", "(".repeat(1000), ")".repeat(1000));
        assert!(matches!(
            parse(&parentheses),
            Err(ParseError::NestingTooDeep { depth: 1001, .. })
        ));

        let at_limit = format!("{}p", "¬".repeat(MAX_NESTING - 1));
        assert!(parse(&at_limit).is_ok());
    }

    #[test]
    fn grammar_errors() {
        for input in ["", "(p∧q", "p∧q)", "(p∧)", "(p∧1)", "p q", "(p & q)", "¬"] {
            assert!(
                matches!(parse(input), Err(ParseError::Grammar(_))),
                "{input} was accepted"
            );
        }
    }
}
