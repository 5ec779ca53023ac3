//! The typed form of a locator XPath and a `nom` parser for reading one back.

use crate::error::LocatorError;
use dropbot_dom::QName;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, digit1},
    combinator::{map_res, opt},
    multi::many1,
    sequence::{delimited, pair, preceded, terminated},
};
use std::fmt;
use std::str::FromStr;

const ID_PREFIX: &str = "//*[@id=\"";
const ID_SUFFIX: &str = "\"]";
/// Shared head of both quoting styles of the id form.
const ID_HEAD: &str = "//*[@id=";

/// One step of a chain locator: `(prefix:)tag` plus an optional 1-based position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSegment {
    pub name: QName,
    pub index: Option<usize>,
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(index) = self.index {
            write!(f, "[{}]", index)?;
        }
        Ok(())
    }
}

/// A locator XPath, either anchored on an element id or spelled out from the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LocatorPath {
    /// `//*[@id="<id>"]`
    Id(String),
    /// `/seg1/seg2/.../segN`, root to leaf.
    Chain(Vec<PathSegment>),
}

impl fmt::Display for LocatorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocatorPath::Id(id) => write!(f, "{}{}{}", ID_PREFIX, id, ID_SUFFIX),
            LocatorPath::Chain(segments) => {
                for segment in segments {
                    write!(f, "/{}", segment)?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for LocatorPath {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_locator(s)
    }
}

// --- Main Public Parser ---

pub fn parse_locator(input: &str) -> Result<LocatorPath, LocatorError> {
    let trimmed = input.trim();
    let parsed = if trimmed.starts_with(ID_HEAD) {
        id_anchored(trimmed)
    } else {
        chain(trimmed)
    };

    match parsed {
        Ok(("", path)) => validate(path),
        Ok((rem, _)) => Err(LocatorError::Parse(
            input.to_string(),
            format!("Parser did not consume all input. Remainder: '{}'", rem),
        )),
        Err(e) => Err(LocatorError::Parse(input.to_string(), e.to_string())),
    }
}

fn validate(path: LocatorPath) -> Result<LocatorPath, LocatorError> {
    if let LocatorPath::Chain(segments) = &path {
        if let Some(zero) = segments.iter().find_map(|s| s.index.filter(|&i| i == 0)) {
            return Err(LocatorError::ZeroIndex(zero));
        }
    }
    Ok(path)
}

// --- Grammar ---

/// The id form owns the rest of the input, so the value is whatever sits between the
/// opening quote and the final quote-and-bracket. Single quotes are accepted too, as
/// produced by selector translation of `#id`.
fn id_anchored(input: &str) -> IResult<&str, LocatorPath> {
    let (rest, quote) = preceded(tag(ID_HEAD), alt((char('"'), char('\'')))).parse(input)?;
    let closing = if quote == '"' { ID_SUFFIX } else { "']" };
    match rest.strip_suffix(closing) {
        Some(id) => Ok(("", LocatorPath::Id(id.to_string()))),
        None => Err(nom::Err::Error(nom::error::Error::new(
            rest,
            nom::error::ErrorKind::Tag,
        ))),
    }
}

fn chain(input: &str) -> IResult<&str, LocatorPath> {
    let (input, segments) = many1(preceded(char('/'), segment)).parse(input)?;
    Ok((input, LocatorPath::Chain(segments)))
}

fn name_part(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !matches!(c, '/' | '[' | ']' | ':' | '*') && !c.is_whitespace())
        .parse(input)
}

fn position(input: &str) -> IResult<&str, usize> {
    delimited(char('['), map_res(digit1, str::parse::<usize>), char(']')).parse(input)
}

fn segment(input: &str) -> IResult<&str, PathSegment> {
    let (input, (prefix, local)) =
        pair(opt(terminated(name_part, char(':'))), name_part).parse(input)?;
    let (input, index) = opt(position).parse(input)?;
    Ok((
        input,
        PathSegment {
            name: QName {
                prefix: prefix.map(str::to_string),
                local_part: local.to_string(),
            },
            index,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(name: &str, index: Option<usize>) -> PathSegment {
        PathSegment {
            name: QName::new(name),
            index,
        }
    }

    #[test]
    fn formats_chain_and_id_forms() {
        let chain = LocatorPath::Chain(vec![
            seg("html", None),
            seg("body", None),
            seg("div", Some(2)),
        ]);
        assert_eq!(chain.to_string(), "/html/body/div[2]");
        assert_eq!(LocatorPath::Id("x".into()).to_string(), r#"//*[@id="x"]"#);
    }

    #[test]
    fn parses_chain_with_prefixes_and_positions() {
        let path: LocatorPath = "/html/body/div[2]/svg:rect[1]".parse().unwrap();
        let LocatorPath::Chain(segments) = path else {
            panic!("expected chain form");
        };
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[2], seg("div", Some(2)));
        assert_eq!(segments[3].name, QName::prefixed("svg", "rect"));
        assert_eq!(segments[3].index, Some(1));
    }

    #[test]
    fn parses_id_form_verbatim() {
        let path: LocatorPath = r#"//*[@id="a b"c"]"#.parse().unwrap();
        assert_eq!(path, LocatorPath::Id(r#"a b"c"#.into()));
    }

    #[test]
    fn accepts_single_quoted_id_form() {
        let path: LocatorPath = "//*[@id='main']".parse().unwrap();
        assert_eq!(path, LocatorPath::Id("main".into()));
        assert_eq!(path.to_string(), r#"//*[@id="main"]"#);
        assert!(parse_locator(r#"//*[@id='main"]"#).is_err());
    }

    #[test]
    fn rejects_foreign_expressions() {
        assert!(parse_locator("[[[invalid").is_err());
        assert!(parse_locator("//div").is_err());
        assert!(parse_locator("/html/body[").is_err());
        assert!(parse_locator("//*[contains(@class, 'x')]").is_err());
        assert!(parse_locator("").is_err());
    }

    #[test]
    fn rejects_zero_position() {
        assert_eq!(
            parse_locator("/html/div[0]"),
            Err(LocatorError::ZeroIndex(0))
        );
    }
}
