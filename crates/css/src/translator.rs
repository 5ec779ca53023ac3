use crate::grammar::{
    ATTR_BARE_RE, ATTR_VALUE_RE, COMBINATOR_RE, COMMA_RE, ELEMENT_RE, PSEUDO_RE, Production,
    STEP_ORDER,
};
use log::{debug, trace};

/// The per-call scan state: the unconsumed rest of the rule and the output fragments.
///
/// `index` points at the fragment holding the current element-type filter, which a
/// bare tag name overwrites. It starts at the seed `*`.
struct Translation<'r> {
    rest: &'r str,
    parts: Vec<String>,
    index: usize,
}

impl<'r> Translation<'r> {
    fn new(rule: &'r str) -> Self {
        Self {
            rest: rule,
            parts: vec!["//".to_string(), "*".to_string()],
            index: 1,
        }
    }

    fn consume(&mut self, len: usize) {
        self.rest = &self.rest[len..];
    }

    fn push(&mut self, fragment: impl Into<String>) {
        self.parts.push(fragment.into());
    }

    /// Pushes a fresh `*` and makes it the current element-type filter.
    fn push_wildcard(&mut self) {
        self.index = self.parts.len();
        self.parts.push("*".to_string());
    }

    fn finish(self) -> String {
        self.parts.concat()
    }
}

impl Production {
    /// Attempts this production at the cursor. Returns whether anything was consumed.
    fn apply(self, t: &mut Translation<'_>) -> bool {
        match self {
            Production::Element => element(t),
            Production::Attribute => attribute(t),
            Production::Pseudo => pseudo(t),
            Production::Combinator => combinator(t),
            Production::Comma => comma(t),
        }
    }
}

fn element(t: &mut Translation<'_>) -> bool {
    let rest = t.rest;
    let Some(caps) = ELEMENT_RE.captures(rest) else {
        return false;
    };
    let matched = caps.get(0).map_or(0, |m| m.len());
    if matched == 0 {
        return false;
    }

    let name = caps.get(2).map_or("", |m| m.as_str());
    match caps.get(1).map_or("", |m| m.as_str()) {
        "#" => t.push(format!("[@id='{}']", name)),
        "." => t.push(format!(
            "[contains(concat(' ',normalize-space(@class),' '), ' {} ')]",
            name
        )),
        _ => {
            // The namespace of `ns|tag` is dropped; only the local name filters.
            let tag = caps
                .get(5)
                .map(|m| m.as_str())
                .filter(|local| !local.is_empty())
                .unwrap_or(name);
            if !tag.is_empty() {
                t.parts[t.index] = tag.to_string();
            }
        }
    }
    t.consume(matched);
    true
}

fn attribute(t: &mut Translation<'_>) -> bool {
    let rest = t.rest;
    if let Some(caps) = ATTR_VALUE_RE.captures(rest) {
        let (attr, op, value) = (&caps[1], &caps[2], &caps[3]);
        if op == "~=" {
            t.push(format!("[contains(@{}, '{}')]", attr, value));
        } else {
            t.push(format!("[@{}='{}']", attr, value));
        }
        t.consume(caps[0].len());
        return true;
    }

    if let Some(caps) = ATTR_BARE_RE.captures(rest) {
        t.push(format!("[@{}]", &caps[1]));
        t.consume(caps[0].len());
        return true;
    }
    false
}

fn pseudo(t: &mut Translation<'_>) -> bool {
    let mut stripped = false;
    while let Some(m) = PSEUDO_RE.find(t.rest) {
        t.consume(m.end());
        stripped = true;
    }
    stripped
}

fn combinator(t: &mut Translation<'_>) -> bool {
    let rest = t.rest;
    let Some(m) = COMBINATOR_RE.find(rest).filter(|m| !m.as_str().is_empty()) else {
        return false;
    };

    let text = m.as_str();
    if text.contains('>') {
        t.push("/");
    } else if text.contains('+') {
        t.push("/following-sibling::");
    } else {
        t.push("//");
    }
    t.push_wildcard();
    t.consume(m.end());
    true
}

fn comma(t: &mut Translation<'_>) -> bool {
    let rest = t.rest;
    let Some(m) = COMMA_RE.find(rest) else {
        return false;
    };
    t.push(" | ");
    t.push("//");
    t.push_wildcard();
    t.consume(m.end());
    true
}

/// Translates a CSS selector (or comma-separated selector list) into an XPath expression.
///
/// The scan stops when the rule is exhausted or an iteration consumes nothing; whatever
/// was translated up to that point is returned. Unsupported syntax is dropped silently.
pub fn translate_selector(rule: &str) -> String {
    let mut t = Translation::new(rule);

    while !t.rest.is_empty() {
        let before = t.rest.len();

        t.rest = t.rest.trim();
        if t.rest.is_empty() {
            break;
        }

        for production in STEP_ORDER {
            if production.apply(&mut t) {
                trace!("{:?} matched, '{}' left", production, t.rest);
            }
        }

        if t.rest.len() == before {
            debug!(
                "Selector translation of '{}' stalled at '{}'; returning partial XPath",
                rule, t.rest
            );
            break;
        }
    }

    t.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASS_BAR: &str = "[contains(concat(' ',normalize-space(@class),' '), ' bar ')]";

    #[test]
    fn bare_tag_replaces_wildcard() {
        assert_eq!(translate_selector("div"), "//div");
        assert_eq!(translate_selector("*"), "//*");
    }

    #[test]
    fn id_selector_appends_predicate() {
        assert_eq!(translate_selector("#foo"), "//*[@id='foo']");
        assert_eq!(translate_selector("div#foo"), "//div[@id='foo']");
    }

    #[test]
    fn class_selector_uses_token_membership() {
        assert_eq!(translate_selector(".bar"), format!("//*{CLASS_BAR}"));
        assert_eq!(
            translate_selector("p.bar#x"),
            format!("//p{CLASS_BAR}[@id='x']")
        );
    }

    #[test]
    fn descendant_and_child_combinators() {
        assert_eq!(translate_selector("div p"), "//div//p");
        assert_eq!(translate_selector("div > p"), "//div/p");
        assert_eq!(translate_selector("div>p"), "//div/p");
        assert_eq!(translate_selector("div   >   p"), "//div/p");
    }

    #[test]
    fn adjacent_sibling_combinator() {
        assert_eq!(
            translate_selector("h1 + p"),
            "//h1/following-sibling::p"
        );
    }

    #[test]
    fn combinator_without_tag_keeps_wildcard() {
        assert_eq!(translate_selector("ul > .bar"), format!("//ul/*{CLASS_BAR}"));
    }

    #[test]
    fn comma_starts_an_independent_branch() {
        assert_eq!(translate_selector("a, b"), "//a | //b");
        assert_eq!(translate_selector("a,#x"), "//a | //*[@id='x']");
        // Whitespace before the comma is taken as a descendant combinator first.
        assert_eq!(translate_selector("a , b"), "//a//* | //b");
    }

    #[test]
    fn attribute_forms() {
        assert_eq!(translate_selector("a[href]"), "//a[@href]");
        assert_eq!(
            translate_selector(r#"input[type="text"]"#),
            "//input[@type='text']"
        );
        assert_eq!(
            translate_selector(r#"a[rel~="next"]"#),
            "//a[contains(@rel, 'next')]"
        );
        // Single quotes fall through to the bare form, content kept verbatim.
        assert_eq!(translate_selector("a[rel='x']"), "//a[@rel='x']");
    }

    #[test]
    fn attribute_without_tag_keeps_wildcard() {
        assert_eq!(translate_selector("[href]"), "//*[@href]");
    }

    #[test]
    fn pseudo_classes_are_dropped() {
        assert_eq!(translate_selector("a:hover"), "//a");
        assert_eq!(translate_selector("a:hover:focus > b"), "//a/b");
        assert_eq!(translate_selector("li:first-child"), "//li");
    }

    #[test]
    fn namespaced_tag_uses_local_name() {
        assert_eq!(translate_selector("svg|rect"), "//rect");
        assert_eq!(translate_selector("svg|"), "//svg");
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(translate_selector("DIV"), "//DIV");
        assert_eq!(translate_selector("#Foo"), "//*[@id='Foo']");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(translate_selector("  div p  "), "//div//p");
        assert_eq!(translate_selector("   "), "//*");
        assert_eq!(translate_selector(""), "//*");
    }

    #[test]
    fn malformed_input_degrades_to_partial_translation() {
        assert_eq!(translate_selector("!!!not-css###"), "//*");
        // Functional pseudo arguments stall the scan after the name is stripped.
        assert_eq!(translate_selector("li:nth-child(2) > a"), "//li");
        // `~` is not supported: the descendant step before it survives, the rest is dropped.
        assert_eq!(translate_selector("a ~ b"), "//a//*");
    }

    #[test]
    fn translation_is_deterministic() {
        let rule = "form#login input[name=\"user\"], .bar > span";
        assert_eq!(translate_selector(rule), translate_selector(rule));
        assert_eq!(
            translate_selector(rule),
            format!("//form[@id='login']//input[@name='user'] | //*{CLASS_BAR}/span")
        );
    }
}
