pub mod fixtures;

use dropbot::XmlDocument;
use roxmltree::Node;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Every element of `doc` with the local name `tag`, in document order.
pub fn elements<'a, 'input>(doc: &'a XmlDocument<'input>, tag: &str) -> Vec<Node<'a, 'input>> {
    doc.document()
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == tag)
        .collect()
}

/// The single element of `doc` with the local name `tag` at `position` (0-based).
pub fn element<'a, 'input>(doc: &'a XmlDocument<'input>, tag: &str, position: usize) -> Node<'a, 'input> {
    elements(doc, tag)
        .into_iter()
        .nth(position)
        .unwrap_or_else(|| panic!("no <{}> at position {}", tag, position))
}
