use crate::context::ParseContext;
use crate::error::Result;
use crate::request::RequestDirective;
use crate::response::ResponseDirective;
use crate::token::TokenPair;

/// Aggregated directives of either context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directives {
    /// Result of aggregating in [`ParseContext::Request`].
    Request(RequestDirective),
    /// Result of aggregating in [`ParseContext::Response`].
    Response(ResponseDirective),
}

impl Directives {
    /// The request directives, if aggregated as a request.
    pub fn as_request(&self) -> Option<&RequestDirective> {
        match self {
            Directives::Request(dir) => Some(dir),
            Directives::Response(_) => None,
        }
    }

    /// The response directives, if aggregated as a response.
    pub fn as_response(&self) -> Option<&ResponseDirective> {
        match self {
            Directives::Response(dir) => Some(dir),
            Directives::Request(_) => None,
        }
    }
}

/// Validate and fold tokenized directives in the given context.
///
/// Repeated directives follow "last occurrence wins". The first directive
/// that fails validation aborts the fold and is returned as the error.
///
/// # Examples
///
/// ```
/// use cache_control_parse::{aggregate, ParseContext, TokenPair};
///
/// let pairs = [TokenPair::new("s-maxage", "60"), TokenPair::flag("public")];
/// let dirs = aggregate(&pairs, ParseContext::Response).unwrap();
/// let response = dirs.as_response().unwrap();
/// assert_eq!(response.s_max_age, Some(60));
/// assert!(response.public);
/// ```
pub fn aggregate(pairs: &[TokenPair], ctx: ParseContext) -> Result<Directives> {
    let result = match ctx {
        ParseContext::Request => RequestDirective::from_pairs(pairs).map(Directives::Request),
        ParseContext::Response => ResponseDirective::from_pairs(pairs).map(Directives::Response),
    };
    if let Err(ref err) = result {
        tracing::debug!(context = %ctx, error = %err, "rejected Cache-Control directives");
    }
    result
}
