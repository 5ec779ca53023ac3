//! Result categories and the normalized value an evaluation produces.

/// The result categories a caller can request, with the DOM `XPathResult` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum XPathResultType {
    /// Let the evaluator pick the natural category of the expression.
    #[default]
    Any,
    Number,
    String,
    Boolean,
    UnorderedNodeIterator,
    OrderedNodeIterator,
    UnorderedNodeSnapshot,
    OrderedNodeSnapshot,
    AnyUnorderedNode,
    FirstOrderedNode,
}

impl XPathResultType {
    pub const fn code(self) -> u16 {
        match self {
            XPathResultType::Any => 0,
            XPathResultType::Number => 1,
            XPathResultType::String => 2,
            XPathResultType::Boolean => 3,
            XPathResultType::UnorderedNodeIterator => 4,
            XPathResultType::OrderedNodeIterator => 5,
            XPathResultType::UnorderedNodeSnapshot => 6,
            XPathResultType::OrderedNodeSnapshot => 7,
            XPathResultType::AnyUnorderedNode => 8,
            XPathResultType::FirstOrderedNode => 9,
        }
    }

    pub const fn from_code(code: u16) -> Option<Self> {
        Some(match code {
            0 => XPathResultType::Any,
            1 => XPathResultType::Number,
            2 => XPathResultType::String,
            3 => XPathResultType::Boolean,
            4 => XPathResultType::UnorderedNodeIterator,
            5 => XPathResultType::OrderedNodeIterator,
            6 => XPathResultType::UnorderedNodeSnapshot,
            7 => XPathResultType::OrderedNodeSnapshot,
            8 => XPathResultType::AnyUnorderedNode,
            9 => XPathResultType::FirstOrderedNode,
            _ => return None,
        })
    }

    pub fn is_iterator(self) -> bool {
        matches!(
            self,
            XPathResultType::UnorderedNodeIterator | XPathResultType::OrderedNodeIterator
        )
    }

    pub fn is_snapshot(self) -> bool {
        matches!(
            self,
            XPathResultType::UnorderedNodeSnapshot | XPathResultType::OrderedNodeSnapshot
        )
    }

    pub fn is_single_node(self) -> bool {
        matches!(
            self,
            XPathResultType::AnyUnorderedNode | XPathResultType::FirstOrderedNode
        )
    }
}

/// Represents the normalized result of an evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum XPathValue<N> {
    Number(f64),
    String(String),
    Boolean(bool),
    /// Iterator and snapshot results, collected eagerly in the order the host gave them.
    Nodes(Vec<N>),
    /// Single-node results.
    Node(Option<N>),
}

impl<N> XPathValue<N> {
    /// The nodes of a node-shaped result; empty for scalar results.
    pub fn into_nodes(self) -> Vec<N> {
        match self {
            XPathValue::Nodes(nodes) => nodes,
            XPathValue::Node(node) => node.into_iter().collect(),
            XPathValue::Number(_) | XPathValue::String(_) | XPathValue::Boolean(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for code in 0..=9 {
            let kind = XPathResultType::from_code(code).unwrap();
            assert_eq!(kind.code(), code);
        }
        assert_eq!(XPathResultType::from_code(10), None);
        assert_eq!(XPathResultType::default().code(), 0);
    }

    #[test]
    fn categories() {
        assert!(XPathResultType::OrderedNodeIterator.is_iterator());
        assert!(XPathResultType::UnorderedNodeSnapshot.is_snapshot());
        assert!(XPathResultType::FirstOrderedNode.is_single_node());
        assert!(!XPathResultType::Any.is_iterator());
    }

    #[test]
    fn into_nodes_flattens_node_shapes() {
        assert_eq!(XPathValue::Nodes(vec![1, 2]).into_nodes(), vec![1, 2]);
        assert_eq!(XPathValue::Node(Some(3)).into_nodes(), vec![3]);
        assert!(XPathValue::<i32>::Node(None).into_nodes().is_empty());
        assert!(XPathValue::<i32>::Number(1.0).into_nodes().is_empty());
    }
}
