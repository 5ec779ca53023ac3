//! The tree abstraction the locator, translator and evaluator crates are written against.
//!
//! Nothing in this crate mutates a tree. Implementations wrap an externally owned
//! document (a roxmltree document, the browser DOM, the mock tree in [`tests`]) and
//! expose just enough navigation for locator derivation and resolution.

pub mod node;
pub mod xml;

pub use node::{Children, LocatorNode, NodeType, QName};
