//! `document.evaluate` behind the [`XPathHost`] seam.

use crate::error::js_message;
use crate::node::WebNode;
use dropbot_xpath::{HostXPathResult, XPathError, XPathHost, XPathResultType};
use web_sys::{Document, XPathResult};

/// Evaluates expressions with the browser's own XPath engine.
#[derive(Debug, Clone)]
pub struct DocumentHost {
    document: Document,
}

impl DocumentHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The document of the current window, if there is one.
    pub fn current() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }
}

impl XPathHost for DocumentHost {
    type Node = WebNode;
    type Result = DocumentResult;

    fn document_node(&self) -> WebNode {
        let node: &web_sys::Node = self.document.as_ref();
        WebNode::new(node.clone())
    }

    fn evaluate_raw(
        &self,
        expression: &str,
        context: &WebNode,
        result_type: XPathResultType,
    ) -> Result<DocumentResult, XPathError> {
        self.document
            .evaluate_with_opt_callback_and_type(
                expression,
                context.as_node(),
                None,
                result_type.code(),
            )
            .map(DocumentResult)
            .map_err(|err| XPathError::InvalidExpression(js_message(&err)))
    }
}

/// A DOM `XPathResult`.
#[derive(Debug, Clone)]
pub struct DocumentResult(XPathResult);

fn host_error(err: wasm_bindgen::JsValue) -> XPathError {
    XPathError::Host(js_message(&err))
}

impl HostXPathResult<WebNode> for DocumentResult {
    fn result_type(&self) -> XPathResultType {
        // The DOM only ever reports the ten defined codes.
        XPathResultType::from_code(self.0.result_type()).unwrap_or(XPathResultType::Any)
    }

    fn number_value(&self) -> Result<f64, XPathError> {
        self.0.number_value().map_err(host_error)
    }

    fn string_value(&self) -> Result<String, XPathError> {
        self.0.string_value().map_err(host_error)
    }

    fn boolean_value(&self) -> Result<bool, XPathError> {
        self.0.boolean_value().map_err(host_error)
    }

    fn iterate_next(&mut self) -> Result<Option<WebNode>, XPathError> {
        Ok(self.0.iterate_next().map_err(host_error)?.map(WebNode::new))
    }

    fn snapshot_length(&self) -> Result<usize, XPathError> {
        Ok(self.0.snapshot_length().map_err(host_error)? as usize)
    }

    fn snapshot_item(&self, index: usize) -> Result<Option<WebNode>, XPathError> {
        let index = u32::try_from(index).map_err(|e| XPathError::Host(e.to_string()))?;
        Ok(self.0.snapshot_item(index).map_err(host_error)?.map(WebNode::new))
    }

    fn single_node_value(&self) -> Result<Option<WebNode>, XPathError> {
        Ok(self.0.single_node_value().map_err(host_error)?.map(WebNode::new))
    }
}
