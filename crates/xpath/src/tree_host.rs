//! A native host for trees that only speak locator paths.

use crate::error::XPathError;
use crate::host::{HostXPathResult, XPathHost};
use crate::result::XPathResultType;
use dropbot_dom::LocatorNode;
use dropbot_locator::resolve_xpath;

/// Evaluates locator paths (the id-anchored and chain forms) against any
/// [`LocatorNode`] document. Other expressions are rejected as invalid.
#[derive(Debug, Clone)]
pub struct TreeHost<N> {
    document: N,
}

impl<N: LocatorNode> TreeHost<N> {
    /// Binds the host to the document containing `node`.
    pub fn new(node: &N) -> Self {
        Self {
            document: node.root(),
        }
    }
}

impl<N: LocatorNode> XPathHost for TreeHost<N> {
    type Node = N;
    type Result = NodeSetResult<N>;

    fn document_node(&self) -> N {
        self.document.clone()
    }

    fn evaluate_raw(
        &self,
        expression: &str,
        context: &N,
        result_type: XPathResultType,
    ) -> Result<NodeSetResult<N>, XPathError> {
        let nodes = resolve_xpath(context, expression)?;
        // Locator paths are node-sets; `Any` resolves the way browsers report it.
        let result_type = match result_type {
            XPathResultType::Any => XPathResultType::UnorderedNodeIterator,
            other => other,
        };
        Ok(NodeSetResult::new(nodes, result_type))
    }
}

/// A node-set viewed through the requested result category.
#[derive(Debug, Clone)]
pub struct NodeSetResult<N> {
    nodes: Vec<N>,
    result_type: XPathResultType,
    cursor: usize,
}

impl<N: LocatorNode> NodeSetResult<N> {
    pub fn new(nodes: Vec<N>, result_type: XPathResultType) -> Self {
        Self {
            nodes,
            result_type,
            cursor: 0,
        }
    }

    fn require(&self, requested: &'static str, ok: bool) -> Result<(), XPathError> {
        if ok {
            Ok(())
        } else {
            Err(XPathError::TypeMismatch {
                requested,
                actual: self.result_type,
            })
        }
    }

    fn first_string(&self) -> String {
        self.nodes
            .first()
            .map(|n| n.string_value())
            .unwrap_or_default()
    }
}

impl<N: LocatorNode> HostXPathResult<N> for NodeSetResult<N> {
    fn result_type(&self) -> XPathResultType {
        self.result_type
    }

    fn number_value(&self) -> Result<f64, XPathError> {
        self.require("number", self.result_type == XPathResultType::Number)?;
        Ok(self.first_string().trim().parse().unwrap_or(f64::NAN))
    }

    fn string_value(&self) -> Result<String, XPathError> {
        self.require("string", self.result_type == XPathResultType::String)?;
        Ok(self.first_string())
    }

    fn boolean_value(&self) -> Result<bool, XPathError> {
        self.require("boolean", self.result_type == XPathResultType::Boolean)?;
        Ok(!self.nodes.is_empty())
    }

    fn iterate_next(&mut self) -> Result<Option<N>, XPathError> {
        self.require("iterator", self.result_type.is_iterator())?;
        let next = self.nodes.get(self.cursor).cloned();
        if next.is_some() {
            self.cursor += 1;
        }
        Ok(next)
    }

    fn snapshot_length(&self) -> Result<usize, XPathError> {
        self.require("snapshot", self.result_type.is_snapshot())?;
        Ok(self.nodes.len())
    }

    fn snapshot_item(&self, index: usize) -> Result<Option<N>, XPathError> {
        self.require("snapshot", self.result_type.is_snapshot())?;
        Ok(self.nodes.get(index).cloned())
    }

    fn single_node_value(&self) -> Result<Option<N>, XPathError> {
        self.require("single node", self.result_type.is_single_node())?;
        Ok(self.nodes.first().cloned())
    }
}
