//! The browser DOM as a [`LocatorNode`] tree.

use dropbot_dom::{LocatorNode, NodeType, QName};
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};

/// A live DOM node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebNode(Node);

impl WebNode {
    pub fn new(node: Node) -> Self {
        Self(node)
    }

    pub fn as_node(&self) -> &Node {
        &self.0
    }

    pub fn into_node(self) -> Node {
        self.0
    }

    fn as_element(&self) -> Option<&Element> {
        self.0.dyn_ref::<Element>()
    }
}

impl From<Node> for WebNode {
    fn from(node: Node) -> Self {
        Self(node)
    }
}

impl LocatorNode for WebNode {
    fn node_type(&self) -> NodeType {
        match self.0.node_type() {
            Node::ELEMENT_NODE => NodeType::Element,
            Node::DOCUMENT_NODE | Node::DOCUMENT_FRAGMENT_NODE => NodeType::Root,
            Node::DOCUMENT_TYPE_NODE => NodeType::DocumentType,
            Node::COMMENT_NODE => NodeType::Comment,
            Node::PROCESSING_INSTRUCTION_NODE => NodeType::ProcessingInstruction,
            // Text, CDATA and the attribute kinds that never appear among children.
            _ => NodeType::Text,
        }
    }

    fn name(&self) -> Option<QName> {
        if let Some(element) = self.as_element() {
            let local_part = element.local_name();
            return Some(match element.prefix() {
                Some(prefix) => QName::prefixed(prefix, local_part),
                None => QName::new(local_part),
            });
        }
        match self.node_type() {
            NodeType::DocumentType | NodeType::ProcessingInstruction => {
                Some(QName::new(self.0.node_name()))
            }
            _ => None,
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.as_element()?.get_attribute(name)
    }

    fn string_value(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent_node().map(Self)
    }

    fn previous_sibling(&self) -> Option<Self> {
        self.0.previous_sibling().map(Self)
    }

    fn next_sibling(&self) -> Option<Self> {
        self.0.next_sibling().map(Self)
    }

    fn first_child(&self) -> Option<Self> {
        self.0.first_child().map(Self)
    }
}
