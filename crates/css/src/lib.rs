//! CSS selector to XPath translation.
//!
//! Only a small subset of selectors is understood: tag, `#id`, `.class`, `ns|tag`,
//! `[attr]`, `[attr="v"]`, `[attr~="v"]`, pseudo-classes (dropped), the `>`, `+` and
//! descendant combinators, and comma-separated lists. Anything else stops the scan and
//! the translation built so far is returned. [`translate_selector`] never fails.

pub mod grammar;
mod translator;

pub use grammar::{Production, STEP_ORDER};
pub use translator::translate_selector;
