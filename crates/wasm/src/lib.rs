//! WebAssembly bindings for dropbot.
//!
//! This crate exposes the locator deriver, the CSS-to-XPath translator, the XPath
//! evaluator adapter and the script recorder to the extension's content scripts.
//!
//! # Architecture
//!
//! The platform-agnostic crates work on the [`LocatorNode`](dropbot_dom::LocatorNode)
//! and [`XPathHost`](dropbot_xpath::XPathHost) traits. Here those traits are
//! implemented over the live page:
//!
//! - [`node`] - `WebNode`, a `web_sys::Node` as a locator tree
//! - [`host`] - `DocumentHost`, evaluating through `document.evaluate`
//! - [`recorder`] - the `ScriptRecorder` class
//! - [`error`] - Error types with JavaScript interop
//!
//! # Example
//!
//! ```javascript
//! import init, { deriveXPath, getElementsBySelector } from '@dropbot/wasm';
//!
//! await init();
//!
//! const xpath = deriveXPath(event.target);
//! const links = getElementsBySelector(document, "#nav > a");
//! ```

mod error;
mod host;
mod node;
mod recorder;

pub use error::{DropbotError, ErrorCode};
pub use host::{DocumentHost, DocumentResult};
pub use node::WebNode;
pub use recorder::ScriptRecorder;

use dropbot_xpath::{XPathError, XPathResultType, XPathValue};
use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Node};

/// Initialize the WASM module.
///
/// This function sets up panic hooks for better error messages in the browser console.
/// It is called automatically when using wasm-pack's generated JavaScript.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-logging")]
    {
        console_log::init_with_level(log::Level::Debug).ok();
    }
}

/// Get the version of the dropbot-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// The locator path of `element`, or `undefined` when none can be derived.
#[wasm_bindgen(js_name = deriveXPath)]
pub fn derive_xpath(element: Option<Node>) -> Option<String> {
    let element = element.map(WebNode::new);
    dropbot_locator::derive_xpath(element.as_ref())
}

#[wasm_bindgen(js_name = translateSelector)]
pub fn translate_selector(css: &str) -> String {
    dropbot_css::translate_selector(css)
}

/// All nodes `xpath` matches in `document`. Invalid expressions match nothing.
#[wasm_bindgen(js_name = getElementsByXPath)]
pub fn get_elements_by_xpath(document: &Document, xpath: &str) -> Array {
    let host = DocumentHost::new(document.clone());
    to_array(dropbot_xpath::get_elements_by_xpath(&host, xpath))
}

#[wasm_bindgen(js_name = getElementsBySelector)]
pub fn get_elements_by_selector(document: &Document, css: &str) -> Array {
    let host = DocumentHost::new(document.clone());
    to_array(dropbot_xpath::get_elements_by_selector(&host, css))
}

/// Evaluate `xpath` and return a plain JavaScript value.
///
/// Numbers, strings and booleans come back as such, node sets as an array and
/// single-node results as a node or `null`. `resultType` takes the `XPathResult`
/// constants and defaults to `ANY_TYPE`.
#[wasm_bindgen(js_name = evaluateXPath)]
pub fn evaluate_xpath(
    document: &Document,
    xpath: &str,
    context: Option<Node>,
    result_type: Option<u16>,
) -> Result<JsValue, JsValue> {
    let result_type = match result_type {
        None => XPathResultType::Any,
        Some(code) => XPathResultType::from_code(code)
            .ok_or_else(|| DropbotError::from(XPathError::UnknownResultType(code)))?,
    };
    let host = DocumentHost::new(document.clone());
    let context = context.map(WebNode::new);
    let value = dropbot_xpath::evaluate(&host, xpath, context.as_ref(), result_type)
        .map_err(DropbotError::from)?;

    Ok(match value {
        XPathValue::Number(n) => JsValue::from_f64(n),
        XPathValue::String(s) => JsValue::from_str(&s),
        XPathValue::Boolean(b) => JsValue::from_bool(b),
        XPathValue::Nodes(nodes) => to_array(nodes).into(),
        XPathValue::Node(node) => node.map_or(JsValue::NULL, |n| n.into_node().into()),
    })
}

fn to_array(nodes: Vec<WebNode>) -> Array {
    nodes.into_iter().map(|n| JsValue::from(n.into_node())).collect()
}
