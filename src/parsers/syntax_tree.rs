use pest::iterators::Pair;
use pest::{RuleType, Span};

/// Untyped parse tree handed over by the grammar engine.
///
/// Inner nodes keep their children in the order of the matched production,
/// leaves keep the span of the input they matched. The grammar rule names are
/// deliberately dropped: the tree builder dispatches on shape alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxTree<'i> {
    Leaf(Span<'i>),
    Node(Vec<SyntaxTree<'i>>),
}

impl<'i> SyntaxTree<'i> {
    pub fn children(&self) -> Option<&[SyntaxTree<'i>]> {
        match self {
            SyntaxTree::Node(children) => Some(children.as_slice()),
            SyntaxTree::Leaf(_) => None,
        }
    }

    pub fn leaf(&self) -> Option<&Span<'i>> {
        match self {
            SyntaxTree::Leaf(span) => Some(span),
            SyntaxTree::Node(_) => None,
        }
    }
}

// a pair without inner pairs becomes a leaf
impl<'i, R: RuleType> From<Pair<'i, R>> for SyntaxTree<'i> {
    fn from(pair: Pair<'i, R>) -> Self {
        let span = pair.as_span();
        let mut inner = pair.into_inner().peekable();
        if inner.peek().is_none() {
            SyntaxTree::Leaf(span)
        } else {
            SyntaxTree::Node(inner.map(SyntaxTree::from).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use pest::Parser;

    use super::SyntaxTree;
    use crate::parsers::grammars::formula::{FormulaPestParser, Rule};

    fn syntax_tree(input: &str) -> SyntaxTree<'_> {
        let mut pairs = FormulaPestParser::parse(Rule::formula, input).unwrap();
        SyntaxTree::from(pairs.next().unwrap())
    }

    fn shape(tree: &SyntaxTree) -> String {
        match tree {
            SyntaxTree::Leaf(span) => span.as_str().to_owned(),
            SyntaxTree::Node(children) => {
                let inner: Vec<String> = children.iter().map(shape).collect();
                format!("[{}]", inner.join(" "))
            }
        }
    }

    #[test]
    fn atom_is_single_leaf() {
        let tree = syntax_tree("q");
        let children = tree.children().unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].leaf().unwrap().as_str(), "q");
        assert!(tree.leaf().is_none());
    }

    #[test]
    fn child_counts_follow_productions() {
        assert_eq!(syntax_tree("¬p").children().unwrap().len(), 2);
        assert_eq!(syntax_tree("(p)").children().unwrap().len(), 3);
        assert_eq!(syntax_tree("(p↔q)").children().unwrap().len(), 5);
    }

    #[test]
    fn nested_shape() {
        assert_eq!(
            shape(&syntax_tree("((p∧q)→¬r)")),
            "[( [( [p] ∧ [q] )] → [¬ [r]] )]"
        );
    }

    #[test]
    fn leaf_spans_point_into_input() {
        let input = "(p∨q)";
        let tree = syntax_tree(input);
        let operator = tree.children().unwrap()[2].leaf().unwrap();
        assert_eq!((operator.start(), operator.end()), (2, 5));
        assert_eq!(&input[operator.start()..operator.end()], "∨");
    }
}
