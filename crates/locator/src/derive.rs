//! Builds a locator for a node by walking parent and sibling links.

use crate::path::{LocatorPath, PathSegment};
use dropbot_dom::{LocatorNode, NodeType, QName};
use std::collections::VecDeque;

/// Gets an XPath for an element which describes its hierarchical location.
///
/// Returns `None` when no element was supplied or no path could be built (the node is
/// not an element). An element with a non-empty `id` short-circuits to the id-anchored
/// form without checking that the id is unique in the document.
pub fn derive_xpath<N: LocatorNode>(element: Option<&N>) -> Option<String> {
    element.and_then(derive_locator).map(|path| path.to_string())
}

/// Typed form of [`derive_xpath`].
pub fn derive_locator<N: LocatorNode>(element: &N) -> Option<LocatorPath> {
    match element.element_id() {
        Some(id) => Some(LocatorPath::Id(id)),
        None => element_tree_path(element),
    }
}

fn element_tree_path<N: LocatorNode>(element: &N) -> Option<LocatorPath> {
    let mut segments = VecDeque::new();
    let mut current = Some(element.clone());

    while let Some(node) = current.take().filter(|n| n.node_type() == NodeType::Element) {
        let Some(name) = node.name() else {
            break;
        };
        segments.push_front(segment_for(&node, name));
        current = node.parent();
    }

    if segments.is_empty() {
        return None;
    }
    Some(LocatorPath::Chain(segments.into()))
}

fn segment_for<N: LocatorNode>(element: &N, name: QName) -> PathSegment {
    let mut index = 0;
    let mut sibling = element.previous_sibling();
    while let Some(node) = sibling {
        // `<!DOCTYPE html>` carries the name `html` and would otherwise count against the root.
        if node.node_type() != NodeType::DocumentType && node.name().as_ref() == Some(&name) {
            index += 1;
        }
        sibling = node.previous_sibling();
    }

    let mut has_following_siblings = false;
    let mut sibling = element.next_sibling();
    while let Some(node) = sibling {
        if node.name().as_ref() == Some(&name) {
            has_following_siblings = true;
            break;
        }
        sibling = node.next_sibling();
    }

    PathSegment {
        name,
        index: (index > 0 || has_following_siblings).then_some(index + 1),
    }
}
