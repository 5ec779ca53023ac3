//! Locator XPaths for web automation.
//!
//! This crate re-exports the dropbot workspace:
//!
//! - [`dom`] - the `LocatorNode` tree trait and its roxmltree adapter
//! - [`locator`] - element-to-XPath derivation and locator path resolution
//! - [`css`] - CSS selector to XPath translation
//! - [`xpath`] - the evaluator adapter over a host's XPath engine
//! - [`script`] - path slots, script drafts and the exported script format
//!
//! # Example
//!
//! ```
//! use dropbot::{XmlDocument, derive_xpath, resolve_xpath, translate_selector};
//!
//! let doc = XmlDocument::parse("<html><body><p/><p/></body></html>").unwrap();
//! let second = doc.document().descendants().filter(|n| n.has_tag_name("p")).nth(1).unwrap();
//!
//! let xpath = derive_xpath(Some(&second)).unwrap();
//! assert_eq!(xpath, "/html/body/p[2]");
//! assert_eq!(resolve_xpath(&doc.root_node(), &xpath).unwrap(), vec![second]);
//!
//! assert_eq!(translate_selector("body > p"), "//body/p");
//! ```

pub mod error;

pub use dropbot_css as css;
pub use dropbot_dom as dom;
pub use dropbot_locator as locator;
pub use dropbot_script as script;
pub use dropbot_xpath as xpath;

pub use dropbot_css::translate_selector;
pub use dropbot_dom::xml::XmlDocument;
pub use dropbot_dom::{LocatorNode, NodeType, QName};
pub use dropbot_locator::{LocatorPath, derive_locator, derive_xpath, resolve, resolve_xpath};
pub use dropbot_script::{Recorder, RecorderConfig, Script, ScriptDraft};
pub use dropbot_xpath::{
    TreeHost, XPathHost, XPathResultType, XPathValue, evaluate, get_elements_by_selector,
    get_elements_by_xpath,
};
pub use error::DropbotError;
