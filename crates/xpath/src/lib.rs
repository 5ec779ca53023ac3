//! The XPath evaluator adapter.
//!
//! Evaluation itself belongs to a host: the browser's `document.evaluate`, or
//! [`TreeHost`] for locator paths over an in-memory tree. This crate drives a host
//! through the [`XPathHost`] and [`HostXPathResult`] traits and flattens whatever
//! result category it reports into an [`XPathValue`].

pub mod error;
pub mod evaluate;
pub mod host;
pub mod result;
pub mod tree_host;

pub use error::XPathError;
pub use evaluate::{evaluate, get_elements_by_selector, get_elements_by_xpath};
pub use host::{HostXPathResult, XPathHost};
pub use result::{XPathResultType, XPathValue};
pub use tree_host::{NodeSetResult, TreeHost};
