//! Token patterns for the selector subset and the order they are tried in.

use regex::Regex;
use std::sync::LazyLock;

/// `#name`, `.name`, `tag`, `*` or `ns|tag`. May match the empty string.
pub(crate) static ELEMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([#.]?)([a-z0-9\\*_-]*)((\|)([a-z0-9\\*_-]*))?")
        .expect("BUG: invalid ELEMENT_RE regex literal")
});

/// `[attr]` with arbitrary content, kept verbatim.
pub(crate) static ATTR_BARE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\[([^\]]*)\]").expect("BUG: invalid ATTR_BARE_RE regex literal")
});

/// `[attr="value"]` or `[attr~="value"]`; only double-quoted, non-empty values.
pub(crate) static ATTR_VALUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)^\[\s*([^~=\s]+)\s*(~?=)\s*"([^"]+)"\s*\]"#)
        .expect("BUG: invalid ATTR_VALUE_RE regex literal")
});

pub(crate) static PSEUDO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^:([a-z_-])+").expect("BUG: invalid PSEUDO_RE regex literal")
});

/// `>`, `+` or plain whitespace, with optional leading whitespace. May match empty.
pub(crate) static COMBINATOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*[>+\s])?").expect("BUG: invalid COMBINATOR_RE regex literal")
});

pub(crate) static COMMA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*,").expect("BUG: invalid COMMA_RE regex literal"));

/// One grammar production of the translator. Every production is attempted once per
/// scan iteration, in [`STEP_ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Production {
    /// Tag name, `#id`, `.class` or `ns|tag`.
    Element,
    /// `[attr]`, `[attr="v"]`, `[attr~="v"]`. At most one per iteration.
    Attribute,
    /// Pseudo-classes and pseudo-elements; stripped, never translated.
    Pseudo,
    /// `>`, `+` or descendant whitespace.
    Combinator,
    /// `,` starting another alternative of a selector list.
    Comma,
}

pub const STEP_ORDER: [Production; 5] = [
    Production::Element,
    Production::Attribute,
    Production::Pseudo,
    Production::Combinator,
    Production::Comma,
];
