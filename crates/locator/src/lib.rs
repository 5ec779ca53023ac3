//! Element-to-XPath derivation.
//!
//! [`derive_xpath`] turns a node into a locator string that, evaluated against the same
//! unchanged document, selects exactly that node (as long as ids are unique). The
//! [`resolve`] module goes the other way for hosts without a native XPath evaluator.

pub mod derive;
pub mod error;
pub mod path;
pub mod resolve;

pub use derive::{derive_locator, derive_xpath};
pub use error::LocatorError;
pub use path::{LocatorPath, PathSegment};
pub use resolve::{resolve, resolve_xpath};
