use crate::result::XPathResultType;
use dropbot_locator::LocatorError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum XPathError {
    #[error("Invalid XPath expression: {0}")]
    InvalidExpression(String),

    #[error(transparent)]
    Locator(#[from] LocatorError),

    #[error("Result of type {actual:?} cannot be read as {requested}")]
    TypeMismatch {
        requested: &'static str,
        actual: XPathResultType,
    },

    #[error("Unknown XPath result type code {0}")]
    UnknownResultType(u16),

    #[error("Host reported an unresolved result type")]
    UnresolvedResultType,

    #[error("Host evaluator error: {0}")]
    Host(String),
}
