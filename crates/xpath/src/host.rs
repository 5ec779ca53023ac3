//! The seam between the adapter and a platform's native XPath evaluator.

use crate::error::XPathError;
use crate::result::XPathResultType;

/// The surface of a host result object, modelled on the DOM `XPathResult` interface.
///
/// Accessors for a category other than [`HostXPathResult::result_type`] fail, as the
/// DOM getters do.
pub trait HostXPathResult<N> {
    /// The concrete category of this result. Never [`XPathResultType::Any`].
    fn result_type(&self) -> XPathResultType;

    fn number_value(&self) -> Result<f64, XPathError>;

    fn string_value(&self) -> Result<String, XPathError>;

    fn boolean_value(&self) -> Result<bool, XPathError>;

    /// Advances an iterator result. Iterators are single-pass.
    fn iterate_next(&mut self) -> Result<Option<N>, XPathError>;

    fn snapshot_length(&self) -> Result<usize, XPathError>;

    fn snapshot_item(&self, index: usize) -> Result<Option<N>, XPathError>;

    fn single_node_value(&self) -> Result<Option<N>, XPathError>;
}

/// A platform expression evaluator bound to one document.
pub trait XPathHost {
    type Node: Clone;
    type Result: HostXPathResult<Self::Node>;

    /// The default context node: the document itself.
    fn document_node(&self) -> Self::Node;

    /// Evaluates `expression` against `context`, asking for `result_type`.
    fn evaluate_raw(
        &self,
        expression: &str,
        context: &Self::Node,
        result_type: XPathResultType,
    ) -> Result<Self::Result, XPathError>;
}
