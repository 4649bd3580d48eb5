use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::context::ParseContext;
use crate::error::{Error, Result};
use crate::names;
use crate::rule::validate;
use crate::token::TokenPair;
use crate::tokenizer::tokenize;

/// Argument of the `max-stale` request directive.
///
/// See [RFC 7234 5.2.1.2](https://www.rfc-editor.org/rfc/rfc7234#section-5.2.1.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MaxStale {
    /// Bare `max-stale`: a stale response of any age is acceptable.
    Any,
    /// `max-stale=N`: staleness of at most `N` seconds is acceptable.
    Seconds(u64),
}

/// Typed request-side `Cache-Control` directives.
///
/// Flags default to `false` and delta-seconds fields to `None`.
/// Directives outside the RFC 7234 request set land in `extensions`,
/// with an empty string for value-less ones.
///
/// See [RFC 7234 5.2.1](https://www.rfc-editor.org/rfc/rfc7234#section-5.2.1).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequestDirective {
    /// `max-age=N`.
    pub max_age: Option<u64>,
    /// `max-stale[=N]`.
    pub max_stale: Option<MaxStale>,
    /// `min-fresh=N`.
    pub min_fresh: Option<u64>,
    /// `no-cache`.
    pub no_cache: bool,
    /// `no-store`.
    pub no_store: bool,
    /// `no-transform`.
    pub no_transform: bool,
    /// `only-if-cached`.
    pub only_if_cached: bool,
    /// Unrecognized directives, by name.
    pub extensions: BTreeMap<String, String>,
}

impl RequestDirective {
    /// Parse a request `Cache-Control` value.
    ///
    /// # Examples
    ///
    /// ```
    /// use cache_control_parse::RequestDirective;
    ///
    /// let dir = RequestDirective::parse("max-age=4649, no-store").unwrap();
    /// assert_eq!(dir.max_age, Some(4649));
    /// assert!(dir.no_store);
    /// assert!(dir.extensions.is_empty());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        Self::from_pairs(&tokenize(input)?)
    }

    /// Fold tokenized directives into a `RequestDirective`.
    ///
    /// Pairs are applied in order; a repeated directive overwrites the
    /// earlier occurrence. The first invalid pair aborts the whole fold.
    pub fn from_pairs(pairs: &[TokenPair]) -> Result<Self> {
        let mut out = RequestDirective::default();
        for pair in pairs {
            let value = validate(pair, ParseContext::Request)?;
            match pair.name.as_str() {
                names::MAX_AGE => out.max_age = value.as_seconds(),
                names::MAX_STALE => {
                    out.max_stale = Some(match value.as_seconds() {
                        Some(n) => MaxStale::Seconds(n),
                        None => MaxStale::Any,
                    })
                }
                names::MIN_FRESH => out.min_fresh = value.as_seconds(),
                names::NO_CACHE => out.no_cache = true,
                names::NO_STORE => out.no_store = true,
                names::NO_TRANSFORM => out.no_transform = true,
                names::ONLY_IF_CACHED => out.only_if_cached = true,
                name => {
                    tracing::trace!(directive = name, "request extension directive");
                    out.extensions.insert(name.to_string(), value.as_text());
                }
            }
        }
        Ok(out)
    }
}

impl FromStr for RequestDirective {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for RequestDirective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut parts = Vec::new();

        if let Some(n) = self.max_age {
            parts.push(format!("{}={n}", names::MAX_AGE));
        }
        match self.max_stale {
            Some(MaxStale::Any) => parts.push(names::MAX_STALE.to_string()),
            Some(MaxStale::Seconds(n)) => parts.push(format!("{}={n}", names::MAX_STALE)),
            None => {}
        }
        if let Some(n) = self.min_fresh {
            parts.push(format!("{}={n}", names::MIN_FRESH));
        }
        for (set, name) in [
            (self.no_cache, names::NO_CACHE),
            (self.no_store, names::NO_STORE),
            (self.no_transform, names::NO_TRANSFORM),
            (self.only_if_cached, names::ONLY_IF_CACHED),
        ] {
            if set {
                parts.push(name.to_string());
            }
        }
        for (name, value) in &self.extensions {
            parts.push(TokenPair::canonical(name, value).to_string());
        }

        f.write_str(&parts.join(", "))
    }
}
