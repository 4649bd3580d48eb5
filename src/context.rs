use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::parse;
use crate::token::TokenPair;

/// Which side of an exchange a `Cache-Control` value came from.
///
/// Requests and responses share the header syntax but not the set of
/// recognized directives.
///
/// See [RFC 7234 5.2.1](https://www.rfc-editor.org/rfc/rfc7234#section-5.2.1)
/// and [RFC 7234 5.2.2](https://www.rfc-editor.org/rfc/rfc7234#section-5.2.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ParseContext {
    /// Request directives (`max-stale`, `min-fresh`, `only-if-cached`, ...).
    Request,
    /// Response directives (`s-maxage`, `public`, `private`, ...).
    Response,
}

impl ParseContext {
    /// Parse exactly one directive in this context.
    ///
    /// # Examples
    ///
    /// ```
    /// use cache_control_parse::{ParseContext, TokenPair};
    ///
    /// let pair = ParseContext::Response.parse_directive("s-maxage=60").unwrap();
    /// assert_eq!(pair, TokenPair::new("s-maxage", "60"));
    /// ```
    pub fn parse_directive(self, input: &str) -> Result<TokenPair> {
        parse::parse_directive(input, self)
    }

    /// Parse a comma-separated directive list in this context.
    pub fn parse_directives(self, input: &str) -> Result<Vec<TokenPair>> {
        parse::parse_directives(input, self)
    }
}

impl fmt::Display for ParseContext {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseContext::Request => f.write_str("request"),
            ParseContext::Response => f.write_str("response"),
        }
    }
}

impl FromStr for ParseContext {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("request") {
            Ok(ParseContext::Request)
        } else if s.eq_ignore_ascii_case("response") {
            Ok(ParseContext::Response)
        } else {
            Err(Error::Malformed(format!("unknown parse context: {s}")))
        }
    }
}
