//! Typed parser for HTTP `Cache-Control` header values based on [RFC 7234].
//!
//! [RFC 7234]: https://www.rfc-editor.org/rfc/rfc7234#section-5.2
//!
//! # Overview
//!
//! The same header syntax carries different directive sets on requests and
//! responses, so every entry point is tied to a [`ParseContext`]. Parsing
//! runs in three steps:
//!
//! 1. the tokenizer splits the value on top-level commas into [`TokenPair`]s,
//!    resolving quoted-strings and lower-casing directive names;
//! 2. each pair is checked against the context's [`Rule`] table
//!    ([`validate`]);
//! 3. pairs are folded into a [`RequestDirective`] or [`ResponseDirective`]
//!    ([`aggregate`]). Unknown directives are kept in `extensions`.
//!
//! A repeated directive overwrites its earlier occurrence. Any invalid
//! directive fails the whole call.
//!
//! The input must be a single header value; callers combine multiple
//! `Cache-Control` field lines themselves.
//!
//! # Examples
//!
//! ```
//! use cache_control_parse::{parse_request, parse_response};
//!
//! let req = parse_request("max-age=4649, no-store").unwrap();
//! assert_eq!(req.max_age, Some(4649));
//! assert!(req.no_store);
//!
//! let resp = parse_response(r#"max-age=4649, no-store, community="UCI""#).unwrap();
//! assert_eq!(resp.extensions["community"], "UCI");
//!
//! assert!(parse_request(r#"max-age="4649""#).is_err());
//! ```

mod aggregate;
mod context;
mod error;
pub mod names;
mod parse;
mod request;
mod response;
mod rule;
mod token;
mod tokenizer;

// Re-export public types
pub use aggregate::{aggregate, Directives};
pub use context::ParseContext;
pub use error::{Error, Result};
pub use parse::{
    parse_request, parse_request_directive, parse_request_directives, parse_response,
    parse_response_directive, parse_response_directives,
};
pub use request::{MaxStale, RequestDirective};
pub use response::ResponseDirective;
pub use rule::{validate, Rule, ValidatedValue, ValueKind};
pub use token::TokenPair;

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn response_to_json() {
        let dir = parse_response(r#"max-age=60, private="set-cookie""#).unwrap();
        let json = serde_json::to_value(&dir).unwrap();
        assert_eq!(json["max_age"], 60);
        assert_eq!(json["private"][0], "set-cookie");
        let back: ResponseDirective = serde_json::from_value(json).unwrap();
        assert_eq!(back, dir);
    }

    #[test]
    fn context_is_lowercase() {
        let json = serde_json::to_string(&ParseContext::Request).unwrap();
        assert_eq!(json, "\"request\"");
    }
}
