//! Drives a host evaluation and normalizes its result.

use crate::error::XPathError;
use crate::host::{HostXPathResult, XPathHost};
use crate::result::{XPathResultType, XPathValue};
use dropbot_css::translate_selector;
use log::{debug, trace};

/// Evaluates an XPath expression.
///
/// `context` defaults to the host document. The shape of the returned value follows
/// the category the host reports for `result_type`:
/// - number, string and boolean results become the matching scalar;
/// - iterator and snapshot results become [`XPathValue::Nodes`], collected eagerly;
/// - any-unordered and first-ordered results become [`XPathValue::Node`].
pub fn evaluate<H: XPathHost>(
    host: &H,
    xpath: &str,
    context: Option<&H::Node>,
    result_type: XPathResultType,
) -> Result<XPathValue<H::Node>, XPathError> {
    let document;
    let context = match context {
        Some(node) => node,
        None => {
            document = host.document_node();
            &document
        }
    };

    let mut result = host.evaluate_raw(xpath, context, result_type)?;
    let actual = result.result_type();
    trace!("'{}' evaluated as {:?} (requested {:?})", xpath, actual, result_type);

    match actual {
        XPathResultType::Number => Ok(XPathValue::Number(result.number_value()?)),
        XPathResultType::String => Ok(XPathValue::String(result.string_value()?)),
        XPathResultType::Boolean => Ok(XPathValue::Boolean(result.boolean_value()?)),
        XPathResultType::UnorderedNodeIterator | XPathResultType::OrderedNodeIterator => {
            let mut nodes = Vec::new();
            while let Some(node) = result.iterate_next()? {
                nodes.push(node);
            }
            Ok(XPathValue::Nodes(nodes))
        }
        XPathResultType::UnorderedNodeSnapshot | XPathResultType::OrderedNodeSnapshot => {
            let length = result.snapshot_length()?;
            let mut nodes = Vec::with_capacity(length);
            for index in 0..length {
                nodes.extend(result.snapshot_item(index)?);
            }
            Ok(XPathValue::Nodes(nodes))
        }
        XPathResultType::AnyUnorderedNode | XPathResultType::FirstOrderedNode => {
            Ok(XPathValue::Node(result.single_node_value()?))
        }
        XPathResultType::Any => Err(XPathError::UnresolvedResultType),
    }
}

/// Evaluates `xpath` against the host document and returns the matched nodes.
///
/// Never fails: an expression the host rejects, or one with a scalar result, yields
/// an empty list.
pub fn get_elements_by_xpath<H: XPathHost>(host: &H, xpath: &str) -> Vec<H::Node> {
    match evaluate(host, xpath, None, XPathResultType::Any) {
        Ok(value) => value.into_nodes(),
        Err(err) => {
            debug!("XPath '{}' failed, returning no elements: {}", xpath, err);
            Vec::new()
        }
    }
}

/// Translates a CSS selector and returns the nodes the translation matches.
pub fn get_elements_by_selector<H: XPathHost>(host: &H, css: &str) -> Vec<H::Node> {
    let xpath = translate_selector(css);
    trace!("selector '{}' translated to '{}'", css, xpath);
    get_elements_by_xpath(host, &xpath)
}
