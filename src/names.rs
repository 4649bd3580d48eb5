//! Directive names from the RFC 7234 base set.
//!
//! Names are lower-case, matching what the tokenizer produces, so they can be
//! compared directly against [`TokenPair::name`](crate::TokenPair::name).

/// `max-age` (request and response).
pub const MAX_AGE: &str = "max-age";
/// `max-stale` (request).
pub const MAX_STALE: &str = "max-stale";
/// `min-fresh` (request).
pub const MIN_FRESH: &str = "min-fresh";
/// `no-cache` (request and response).
pub const NO_CACHE: &str = "no-cache";
/// `no-store` (request and response).
pub const NO_STORE: &str = "no-store";
/// `no-transform` (request and response).
pub const NO_TRANSFORM: &str = "no-transform";
/// `only-if-cached` (request).
pub const ONLY_IF_CACHED: &str = "only-if-cached";
/// `must-revalidate` (response).
pub const MUST_REVALIDATE: &str = "must-revalidate";
/// `public` (response).
pub const PUBLIC: &str = "public";
/// `private` (response).
pub const PRIVATE: &str = "private";
/// `proxy-revalidate` (response).
pub const PROXY_REVALIDATE: &str = "proxy-revalidate";
/// `s-maxage` (response).
pub const S_MAXAGE: &str = "s-maxage";
