//! Error handling for WASM bindings.
//!
//! Converts the dropbot error types into JavaScript `Error` objects carrying a `code`.

use dropbot_script::ScriptError;
use dropbot_xpath::XPathError;
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Error codes for TypeScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// A locator path that does not parse
    Locator,
    /// An expression the evaluator rejected or a bad result type
    XPath,
    /// Script editing or export failure
    Script,
    /// JSON serialization/deserialization error
    Json,
    /// An argument JavaScript passed in that makes no sense
    InvalidArgument,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Locator => "LOCATOR_ERROR",
            ErrorCode::XPath => "XPATH_ERROR",
            ErrorCode::Script => "SCRIPT_ERROR",
            ErrorCode::Json => "JSON_ERROR",
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
        }
    }
}

/// A JavaScript-friendly error type.
///
/// Note: This is NOT a wasm_bindgen struct because we need custom
/// conversion to JavaScript Error objects.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct DropbotError {
    code: ErrorCode,
    message: String,
}

impl DropbotError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidArgument, message)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<XPathError> for DropbotError {
    fn from(err: XPathError) -> Self {
        let code = match &err {
            XPathError::Locator(_) => ErrorCode::Locator,
            _ => ErrorCode::XPath,
        };
        Self::new(code, err.to_string())
    }
}

impl From<ScriptError> for DropbotError {
    fn from(err: ScriptError) -> Self {
        let code = match &err {
            ScriptError::Json(_) => ErrorCode::Json,
            _ => ErrorCode::Script,
        };
        Self::new(code, err.to_string())
    }
}

impl From<DropbotError> for JsValue {
    fn from(err: DropbotError) -> Self {
        let js_error = js_sys::Error::new(&err.message);
        js_sys::Reflect::set(&js_error, &"code".into(), &JsValue::from_str(err.code.as_str())).ok();
        js_error.into()
    }
}

/// Best-effort message text of a thrown JavaScript value.
pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
