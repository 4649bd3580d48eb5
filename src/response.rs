use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::context::ParseContext;
use crate::error::{Error, Result};
use crate::names;
use crate::rule::{validate, ValidatedValue};
use crate::token::TokenPair;
use crate::tokenizer::tokenize;

/// Typed response-side `Cache-Control` directives.
///
/// `no_cache` and `private` may restrict themselves to a list of header
/// field names. `Some(vec![])` means the directive appeared unqualified.
///
/// See [RFC 7234 5.2.2](https://www.rfc-editor.org/rfc/rfc7234#section-5.2.2).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResponseDirective {
    /// `max-age=N`.
    pub max_age: Option<u64>,
    /// `s-maxage=N`.
    pub s_max_age: Option<u64>,
    /// `no-cache[="field-names"]`.
    pub no_cache: Option<Vec<String>>,
    /// `no-store`.
    pub no_store: bool,
    /// `no-transform`.
    pub no_transform: bool,
    /// `public`.
    pub public: bool,
    /// `private[="field-names"]`.
    pub private: Option<Vec<String>>,
    /// `must-revalidate`.
    pub must_revalidate: bool,
    /// `proxy-revalidate`.
    pub proxy_revalidate: bool,
    /// Unrecognized directives, by name.
    pub extensions: BTreeMap<String, String>,
}

impl ResponseDirective {
    /// Parse a response `Cache-Control` value.
    ///
    /// # Examples
    ///
    /// ```
    /// use cache_control_parse::ResponseDirective;
    ///
    /// let dir = ResponseDirective::parse(r#"max-age=4649, no-store, community="UCI""#).unwrap();
    /// assert_eq!(dir.max_age, Some(4649));
    /// assert!(dir.no_store);
    /// assert_eq!(dir.extensions["community"], "UCI");
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        Self::from_pairs(&tokenize(input)?)
    }

    /// Fold tokenized directives into a `ResponseDirective`.
    ///
    /// Pairs are applied in order; a repeated directive overwrites the
    /// earlier occurrence. The first invalid pair aborts the whole fold.
    pub fn from_pairs(pairs: &[TokenPair]) -> Result<Self> {
        let mut out = ResponseDirective::default();
        for pair in pairs {
            let value = validate(pair, ParseContext::Response)?;
            match pair.name.as_str() {
                names::MAX_AGE => out.max_age = value.as_seconds(),
                names::S_MAXAGE => out.s_max_age = value.as_seconds(),
                names::NO_CACHE => out.no_cache = Some(field_names(&value)),
                names::PRIVATE => out.private = Some(field_names(&value)),
                names::NO_STORE => out.no_store = true,
                names::NO_TRANSFORM => out.no_transform = true,
                names::PUBLIC => out.public = true,
                names::MUST_REVALIDATE => out.must_revalidate = true,
                names::PROXY_REVALIDATE => out.proxy_revalidate = true,
                name => {
                    tracing::trace!(directive = name, "response extension directive");
                    out.extensions.insert(name.to_string(), value.as_text());
                }
            }
        }
        Ok(out)
    }

    /// Whether `private` appeared, qualified or not.
    pub fn is_private(&self) -> bool {
        self.private.is_some()
    }
}

/// Split a `#field-name` argument, dropping empty list elements.
fn field_names(value: &ValidatedValue) -> Vec<String> {
    value
        .as_text()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

fn push_field_names(parts: &mut Vec<String>, name: &str, fields: &Option<Vec<String>>) {
    match fields {
        Some(fields) if fields.is_empty() => parts.push(name.to_string()),
        Some(fields) => parts.push(TokenPair::quoted(name, fields.join(", ")).to_string()),
        None => {}
    }
}

impl FromStr for ResponseDirective {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ResponseDirective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut parts = Vec::new();

        if let Some(n) = self.max_age {
            parts.push(format!("{}={n}", names::MAX_AGE));
        }
        if let Some(n) = self.s_max_age {
            parts.push(format!("{}={n}", names::S_MAXAGE));
        }
        push_field_names(&mut parts, names::NO_CACHE, &self.no_cache);
        push_field_names(&mut parts, names::PRIVATE, &self.private);
        for (set, name) in [
            (self.no_store, names::NO_STORE),
            (self.no_transform, names::NO_TRANSFORM),
            (self.public, names::PUBLIC),
            (self.must_revalidate, names::MUST_REVALIDATE),
            (self.proxy_revalidate, names::PROXY_REVALIDATE),
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
