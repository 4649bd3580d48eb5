use crate::context::ParseContext;
use crate::error::{Error, Result};
use crate::request::RequestDirective;
use crate::response::ResponseDirective;
use crate::rule::validate;
use crate::token::TokenPair;
use crate::tokenizer::tokenize;

pub(crate) fn parse_directive(input: &str, ctx: ParseContext) -> Result<TokenPair> {
    let mut pairs = tokenize(input)?;
    if pairs.len() != 1 {
        return Err(Error::EmptyInput(pairs.len()));
    }
    let pair = pairs.remove(0);
    validate(&pair, ctx)?;
    Ok(pair)
}

pub(crate) fn parse_directives(input: &str, ctx: ParseContext) -> Result<Vec<TokenPair>> {
    let pairs = tokenize(input)?;
    for pair in &pairs {
        validate(pair, ctx)?;
    }
    Ok(pairs)
}

/// Parse exactly one request directive.
///
/// Fails with [`Error::EmptyInput`] if `input` holds zero or several
/// directives, and with the validator's error if the argument has the wrong
/// shape for a request.
///
/// # Examples
///
/// ```
/// use cache_control_parse::{parse_request_directive, TokenPair};
///
/// let pair = parse_request_directive("max-age=4649").unwrap();
/// assert_eq!(pair, TokenPair::new("max-age", "4649"));
/// assert!(parse_request_directive(r#"max-age="4649""#).is_err());
/// ```
pub fn parse_request_directive(input: &str) -> Result<TokenPair> {
    parse_directive(input, ParseContext::Request)
}

/// Parse exactly one response directive.
pub fn parse_response_directive(input: &str) -> Result<TokenPair> {
    parse_directive(input, ParseContext::Response)
}

/// Tokenize a request `Cache-Control` value without aggregating it.
///
/// # Examples
///
/// ```
/// use cache_control_parse::{parse_request_directives, TokenPair};
///
/// let pairs = parse_request_directives("max-age=4649, no-store").unwrap();
/// assert_eq!(
///     pairs,
///     vec![TokenPair::new("max-age", "4649"), TokenPair::flag("no-store")]
/// );
/// ```
pub fn parse_request_directives(input: &str) -> Result<Vec<TokenPair>> {
    parse_directives(input, ParseContext::Request)
}

/// Tokenize a response `Cache-Control` value without aggregating it.
pub fn parse_response_directives(input: &str) -> Result<Vec<TokenPair>> {
    parse_directives(input, ParseContext::Response)
}

/// Parse a request `Cache-Control` value into typed directives.
pub fn parse_request(input: &str) -> Result<RequestDirective> {
    RequestDirective::parse(input)
}

/// Parse a response `Cache-Control` value into typed directives.
pub fn parse_response(input: &str) -> Result<ResponseDirective> {
    ResponseDirective::parse(input)
}
