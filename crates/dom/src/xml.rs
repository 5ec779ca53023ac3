// XML datasource implementation using roxmltree
use crate::node::{LocatorNode, NodeType, QName};
use roxmltree::Node;

/// Wrapper around roxmltree::Document providing locator capabilities.
pub struct XmlDocument<'input> {
    doc: roxmltree::Document<'input>,
}

impl<'input> XmlDocument<'input> {
    pub fn parse(text: &'input str) -> Result<Self, roxmltree::Error> {
        let doc = roxmltree::Document::parse(text)?;
        Ok(Self { doc })
    }

    pub fn root_node(&self) -> Node<'_, 'input> {
        self.doc.root()
    }

    pub fn document(&self) -> &roxmltree::Document<'input> {
        &self.doc
    }
}

impl<'a, 'input: 'a> LocatorNode for Node<'a, 'input> {
    fn node_type(&self) -> NodeType {
        match self.node_type() {
            roxmltree::NodeType::Root => NodeType::Root,
            roxmltree::NodeType::Element => NodeType::Element,
            roxmltree::NodeType::Text => NodeType::Text,
            roxmltree::NodeType::Comment => NodeType::Comment,
            roxmltree::NodeType::PI => NodeType::ProcessingInstruction,
        }
    }

    fn name(&self) -> Option<QName> {
        if self.is_element() {
            let tag = self.tag_name();
            // roxmltree resolves prefixes to URIs; map back to the prefix used in the source.
            let prefix = tag
                .namespace()
                .and_then(|uri| self.lookup_prefix(uri))
                .filter(|p| !p.is_empty())
                .map(str::to_string);
            Some(QName {
                prefix,
                local_part: tag.name().to_string(),
            })
        } else if self.is_pi() {
            self.pi().map(|pi| QName::new(pi.target))
        } else {
            None
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        if !self.is_element() {
            return None;
        }
        Node::attribute(self, name).map(str::to_string)
    }

    fn string_value(&self) -> String {
        if self.is_text() || self.is_comment() {
            self.text().unwrap_or("").to_string()
        } else if self.is_element() || self.is_root() {
            self.descendants()
                .filter(|n| n.is_text())
                .filter_map(|n| n.text())
                .collect()
        } else {
            self.pi()
                .and_then(|pi| pi.value)
                .unwrap_or("")
                .to_string()
        }
    }

    fn parent(&self) -> Option<Self> {
        Node::parent(self)
    }

    fn previous_sibling(&self) -> Option<Self> {
        self.prev_sibling()
    }

    fn next_sibling(&self) -> Option<Self> {
        Node::next_sibling(self)
    }

    fn first_child(&self) -> Option<Self> {
        Node::first_child(self)
    }
}
