use dropbot_locator::LocatorError;
use dropbot_script::ScriptError;
use dropbot_xpath::XPathError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DropbotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Locator error: {0}")]
    Locator(#[from] LocatorError),

    #[error("XPath error: {0}")]
    XPath(#[from] XPathError),

    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    #[error("{0}")]
    Usage(String),
}
