//! Resolves locator paths against a tree, for hosts without a native XPath evaluator.

use crate::error::LocatorError;
use crate::path::{LocatorPath, parse_locator};
use dropbot_dom::LocatorNode;
use dropbot_dom::node::descendant_elements;
use log::trace;

/// Returns every node `path` selects, in document order.
///
/// Absolute paths start at the topmost ancestor of `node`, whatever node is given.
pub fn resolve<N: LocatorNode>(node: &N, path: &LocatorPath) -> Vec<N> {
    let document = node.root();
    match path {
        LocatorPath::Id(id) => descendant_elements(&document)
            .into_iter()
            .filter(|e| e.attribute("id").as_deref() == Some(id.as_str()))
            .collect(),
        LocatorPath::Chain(segments) => {
            let mut context = vec![document];
            for segment in segments {
                let mut next = Vec::new();
                for parent in &context {
                    let mut namesakes = parent
                        .children()
                        .filter(|c| c.is_element() && c.name().as_ref() == Some(&segment.name));
                    match segment.index {
                        Some(0) => {}
                        Some(position) => next.extend(namesakes.nth(position - 1)),
                        None => next.extend(namesakes),
                    }
                }
                trace!("segment '{}' matched {} node(s)", segment, next.len());
                if next.is_empty() {
                    return next;
                }
                context = next;
            }
            context
        }
    }
}

/// Parses `xpath` as a locator path and resolves it.
pub fn resolve_xpath<N: LocatorNode>(node: &N, xpath: &str) -> Result<Vec<N>, LocatorError> {
    let path = parse_locator(xpath)?;
    Ok(resolve(node, &path))
}
