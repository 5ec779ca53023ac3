//! Defines the core capability contract for a navigable, read-only document tree.
use std::fmt;

/// A qualified name, consisting of an optional prefix and a local part.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    pub prefix: Option<String>,
    pub local_part: String,
}

impl QName {
    pub fn new(local_part: impl Into<String>) -> Self {
        Self {
            prefix: None,
            local_part: local_part.into(),
        }
    }

    pub fn prefixed(prefix: impl Into<String>, local_part: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            local_part: local_part.into(),
        }
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.prefix {
            Some(prefix) if !prefix.is_empty() => write!(f, "{}:{}", prefix, self.local_part),
            _ => f.write_str(&self.local_part),
        }
    }
}

/// The type of a node in the tree, aligned with the DOM `nodeType` categories that
/// matter for locator work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// The document itself (or a fragment standing in for one).
    Root,
    /// A `<!DOCTYPE ...>` declaration. Can appear as a leading sibling of the root element.
    DocumentType,
    Element,
    Text,
    Comment,
    ProcessingInstruction,
}

/// The universal contract for a node in a read-only, hierarchical document.
///
/// Locator derivation walks parent and sibling links; resolution walks child links.
/// Both are written exclusively against this trait, so any tree that can answer these
/// questions can be used, whether it lives in Rust memory or behind a JS handle.
pub trait LocatorNode: Clone + PartialEq + fmt::Debug {
    /// The type of the node.
    fn node_type(&self) -> NodeType;

    /// The node name in the DOM `nodeName` sense.
    /// - For an element, its qualified name (`svg:rect`).
    /// - For a document type, the doctype name (`html` for `<!DOCTYPE html>`).
    /// - For a processing instruction, its target.
    /// - `None` for text, comment and root nodes.
    fn name(&self) -> Option<QName>;

    /// The value of the named attribute. Always `None` for non-element nodes.
    fn attribute(&self, name: &str) -> Option<String>;

    /// The string value of the node: concatenated descendant text for elements and the
    /// document, the content for text and comment nodes.
    fn string_value(&self) -> String;

    fn parent(&self) -> Option<Self>;

    fn previous_sibling(&self) -> Option<Self>;

    fn next_sibling(&self) -> Option<Self>;

    fn first_child(&self) -> Option<Self>;

    /// An iterator over the child nodes of this node, in document order.
    fn children(&self) -> Children<Self> {
        Children {
            next: self.first_child(),
        }
    }

    /// Walks parent links up to the topmost node.
    fn root(&self) -> Self {
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    fn is_element(&self) -> bool {
        self.node_type() == NodeType::Element
    }

    /// The non-empty `id` attribute of an element.
    fn element_id(&self) -> Option<String> {
        if !self.is_element() {
            return None;
        }
        self.attribute("id").filter(|id| !id.is_empty())
    }
}

/// Iterator over a node's children, following `next_sibling` links.
#[derive(Debug, Clone)]
pub struct Children<N> {
    next: Option<N>,
}

impl<N: LocatorNode> Iterator for Children<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let current = self.next.take()?;
        self.next = current.next_sibling();
        Some(current)
    }
}

/// Collects every element below `node` in document order, excluding `node` itself.
pub fn descendant_elements<N: LocatorNode>(node: &N) -> Vec<N> {
    let mut out = Vec::new();
    let mut stack: Vec<N> = node.children().collect();
    stack.reverse();
    while let Some(current) = stack.pop() {
        let mut kids: Vec<N> = current.children().collect();
        kids.reverse();
        stack.extend(kids);
        if current.is_element() {
            out.push(current);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::create_test_tree;

    #[test]
    fn qname_display_includes_prefix() {
        assert_eq!(QName::new("div").to_string(), "div");
        assert_eq!(QName::prefixed("svg", "rect").to_string(), "svg:rect");
        assert_eq!(
            QName {
                prefix: Some(String::new()),
                local_part: "p".into()
            }
            .to_string(),
            "p"
        );
    }

    #[test]
    fn children_follow_sibling_links() {
        let tree = create_test_tree();
        let body = tree.node("body");
        let names: Vec<String> = body
            .children()
            .filter_map(|n| n.name())
            .map(|q| q.to_string())
            .collect();
        assert_eq!(names, vec!["div", "div", "ul"]);
    }

    #[test]
    fn descendants_are_in_document_order() {
        let tree = create_test_tree();
        let main = tree.node("main");
        let ids: Vec<String> = descendant_elements(&main)
            .iter()
            .map(|n| n.name().map(|q| q.to_string()).unwrap_or_default())
            .collect();
        assert_eq!(ids, vec!["p", "p", "span"]);
    }

    #[test]
    fn element_id_ignores_empty_values() {
        let tree = create_test_tree();
        assert_eq!(tree.node("main").element_id().as_deref(), Some("main"));
        assert_eq!(tree.node("blank-id").element_id(), None);
        assert_eq!(tree.document().element_id(), None);
    }

    #[test]
    fn root_climbs_to_document() {
        let tree = create_test_tree();
        let span = tree.node("span");
        assert_eq!(span.root(), tree.document());
        assert_eq!(span.root().node_type(), NodeType::Root);
    }
}
