use crate::context::ParseContext;
use crate::error::{Error, Result};
use crate::names;
use crate::token::TokenPair;

/// Argument forms a directive accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// No argument allowed.
    None,
    /// Bare token only.
    Token,
    /// Quoted-string only.
    Quoted,
    /// Token or quoted-string.
    Either,
}

/// Value-shape rule for a single directive in a given context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule {
    /// Accepted argument form.
    pub kind: ValueKind,
    /// Argument must be delta-seconds.
    pub numeric: bool,
    /// Argument must be present.
    pub required: bool,
}

/// A directive argument after its rule has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValidatedValue {
    /// No argument.
    Absent,
    /// Bare token argument.
    Token(String),
    /// Quoted-string argument, unescaped.
    QuotedString(String),
    /// delta-seconds argument.
    Numeric(u64),
}

impl ValidatedValue {
    /// The argument as text, empty if absent.
    pub fn as_text(&self) -> String {
        match self {
            ValidatedValue::Absent => String::new(),
            ValidatedValue::Token(s) | ValidatedValue::QuotedString(s) => s.clone(),
            ValidatedValue::Numeric(n) => n.to_string(),
        }
    }

    /// The delta-seconds argument, if this is one.
    pub fn as_seconds(&self) -> Option<u64> {
        match self {
            ValidatedValue::Numeric(n) => Some(*n),
            _ => None,
        }
    }
}

impl Rule {
    const FLAG: Rule = Rule {
        kind: ValueKind::None,
        numeric: false,
        required: false,
    };

    const DELTA_SECONDS: Rule = Rule {
        kind: ValueKind::Token,
        numeric: true,
        required: true,
    };

    const OPTIONAL_DELTA_SECONDS: Rule = Rule {
        kind: ValueKind::Token,
        numeric: true,
        required: false,
    };

    /// `no-cache` / `private` on responses: bare, or a field-name list.
    const FIELD_NAMES: Rule = Rule {
        kind: ValueKind::Either,
        numeric: false,
        required: false,
    };

    const EXTENSION: Rule = Rule {
        kind: ValueKind::Either,
        numeric: false,
        required: false,
    };

    /// Look up the rule for a lower-cased directive name.
    ///
    /// Names outside the context's known set get the permissive extension
    /// rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use cache_control_parse::{ParseContext, Rule, ValueKind};
    ///
    /// let rule = Rule::lookup("no-store", ParseContext::Request);
    /// assert_eq!(rule.kind, ValueKind::None);
    ///
    /// let rule = Rule::lookup("s-maxage", ParseContext::Response);
    /// assert!(rule.numeric);
    /// ```
    pub fn lookup(name: &str, ctx: ParseContext) -> Rule {
        match ctx {
            ParseContext::Request => match name {
                names::MAX_AGE | names::MIN_FRESH => Rule::DELTA_SECONDS,
                names::MAX_STALE => Rule::OPTIONAL_DELTA_SECONDS,
                names::NO_CACHE
                | names::NO_STORE
                | names::NO_TRANSFORM
                | names::ONLY_IF_CACHED => Rule::FLAG,
                _ => Rule::EXTENSION,
            },
            ParseContext::Response => match name {
                names::MAX_AGE | names::S_MAXAGE => Rule::DELTA_SECONDS,
                names::NO_CACHE | names::PRIVATE => Rule::FIELD_NAMES,
                names::NO_STORE
                | names::NO_TRANSFORM
                | names::PUBLIC
                | names::MUST_REVALIDATE
                | names::PROXY_REVALIDATE => Rule::FLAG,
                _ => Rule::EXTENSION,
            },
        }
    }

    /// Apply this rule to a directive occurrence.
    pub fn check(&self, pair: &TokenPair) -> Result<ValidatedValue> {
        if !pair.has_value() {
            return match (self.required, self.numeric) {
                (false, _) => Ok(ValidatedValue::Absent),
                (true, true) => Err(Error::InvalidNumeric(format!(
                    "`{}` requires a value",
                    pair.name
                ))),
                (true, false) => Err(Error::Malformed(format!(
                    "`{}` requires a value",
                    pair.name
                ))),
            };
        }

        match self.kind {
            ValueKind::None => return Err(Error::UnexpectedValue(pair.name.clone())),
            ValueKind::Token if pair.quoted => {
                let msg = format!("`{}` must not be quoted", pair.name);
                return Err(if self.numeric {
                    Error::InvalidNumeric(msg)
                } else {
                    Error::Malformed(msg)
                });
            }
            ValueKind::Quoted if !pair.quoted => {
                return Err(Error::Malformed(format!(
                    "`{}` requires a quoted-string",
                    pair.name
                )));
            }
            _ => {}
        }

        if self.numeric {
            parse_delta_seconds(&pair.value)
                .map(ValidatedValue::Numeric)
                .ok_or_else(|| {
                    Error::InvalidNumeric(format!("`{}={}`", pair.name, pair.value))
                })
        } else if pair.quoted {
            Ok(ValidatedValue::QuotedString(pair.value.clone()))
        } else {
            Ok(ValidatedValue::Token(pair.value.clone()))
        }
    }
}

/// Check a directive occurrence against the rule table of `ctx`.
///
/// # Examples
///
/// ```
/// use cache_control_parse::{validate, Error, ParseContext, TokenPair, ValidatedValue};
///
/// let value = validate(&TokenPair::new("max-age", "60"), ParseContext::Request).unwrap();
/// assert_eq!(value, ValidatedValue::Numeric(60));
///
/// let err = validate(&TokenPair::quoted("no-store", "foo"), ParseContext::Request);
/// assert!(matches!(err, Err(Error::UnexpectedValue(_))));
/// ```
pub fn validate(pair: &TokenPair, ctx: ParseContext) -> Result<ValidatedValue> {
    Rule::lookup(&pair.name, ctx).check(pair)
}

/// `delta-seconds = 1*DIGIT` (RFC 7234 1.2.1), bounded by `u64`.
fn parse_delta_seconds(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_without_value() {
        let v = validate(&TokenPair::flag("no-store"), ParseContext::Request).unwrap();
        assert_eq!(v, ValidatedValue::Absent);
    }

    #[test]
    fn flag_with_value() {
        for pair in [
            TokenPair::quoted("no-store", "foo"),
            TokenPair::new("no-store", "foo"),
            TokenPair::quoted("no-store", ""),
        ] {
            assert_eq!(
                validate(&pair, ParseContext::Response),
                Err(Error::UnexpectedValue("no-store".to_string()))
            );
        }
    }

    #[test]
    fn numeric_value() {
        let v = validate(&TokenPair::new("max-age", "4649"), ParseContext::Request).unwrap();
        assert_eq!(v, ValidatedValue::Numeric(4649));
        let v = validate(&TokenPair::new("s-maxage", "0"), ParseContext::Response).unwrap();
        assert_eq!(v, ValidatedValue::Numeric(0));
    }

    #[test]
    fn numeric_quoted() {
        for ctx in [ParseContext::Request, ParseContext::Response] {
            assert!(matches!(
                validate(&TokenPair::quoted("max-age", "4649"), ctx),
                Err(Error::InvalidNumeric(_))
            ));
        }
    }

    #[test]
    fn numeric_missing() {
        assert!(matches!(
            validate(&TokenPair::flag("max-age"), ParseContext::Request),
            Err(Error::InvalidNumeric(_))
        ));
        assert!(matches!(
            validate(&TokenPair::flag("min-fresh"), ParseContext::Request),
            Err(Error::InvalidNumeric(_))
        ));
    }

    #[test]
    fn numeric_malformed() {
        for value in ["+1", "-1", "1.5", "abc", "18446744073709551616"] {
            assert!(
                matches!(
                    validate(&TokenPair::new("max-age", value), ParseContext::Request),
                    Err(Error::InvalidNumeric(_))
                ),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn numeric_max() {
        let v = validate(
            &TokenPair::new("max-age", "18446744073709551615"),
            ParseContext::Request,
        )
        .unwrap();
        assert_eq!(v, ValidatedValue::Numeric(u64::MAX));
    }

    #[test]
    fn max_stale_optional() {
        let v = validate(&TokenPair::flag("max-stale"), ParseContext::Request).unwrap();
        assert_eq!(v, ValidatedValue::Absent);
        let v = validate(&TokenPair::new("max-stale", "30"), ParseContext::Request).unwrap();
        assert_eq!(v, ValidatedValue::Numeric(30));
    }

    #[test]
    fn context_specific_names_fall_back() {
        // s-maxage is response-only; on a request it is an extension.
        let v = validate(&TokenPair::quoted("s-maxage", "x"), ParseContext::Request).unwrap();
        assert_eq!(v, ValidatedValue::QuotedString("x".to_string()));
        // public is a flag only on responses.
        let v = validate(&TokenPair::new("public", "x"), ParseContext::Request).unwrap();
        assert_eq!(v, ValidatedValue::Token("x".to_string()));
        assert!(validate(&TokenPair::new("public", "x"), ParseContext::Response).is_err());
    }

    #[test]
    fn field_names_either_form() {
        let v = validate(
            &TokenPair::quoted("private", "set-cookie"),
            ParseContext::Response,
        )
        .unwrap();
        assert_eq!(v, ValidatedValue::QuotedString("set-cookie".to_string()));
        let v = validate(&TokenPair::new("no-cache", "x-foo"), ParseContext::Response).unwrap();
        assert_eq!(v, ValidatedValue::Token("x-foo".to_string()));
        let v = validate(&TokenPair::flag("no-cache"), ParseContext::Response).unwrap();
        assert_eq!(v, ValidatedValue::Absent);
    }

    #[test]
    fn no_cache_request_is_flag() {
        assert!(matches!(
            validate(&TokenPair::quoted("no-cache", "x"), ParseContext::Request),
            Err(Error::UnexpectedValue(_))
        ));
    }

    #[test]
    fn quoted_only_rule() {
        let rule = Rule {
            kind: ValueKind::Quoted,
            numeric: false,
            required: true,
        };
        assert_eq!(
            rule.check(&TokenPair::quoted("ext", "a")).unwrap(),
            ValidatedValue::QuotedString("a".to_string())
        );
        assert!(matches!(
            rule.check(&TokenPair::new("ext", "a")),
            Err(Error::Malformed(_))
        ));
        assert!(matches!(
            rule.check(&TokenPair::flag("ext")),
            Err(Error::Malformed(_))
        ));
    }

    #[test]
    fn token_only_non_numeric_rule() {
        let rule = Rule {
            kind: ValueKind::Token,
            numeric: false,
            required: false,
        };
        assert!(matches!(
            rule.check(&TokenPair::quoted("ext", "a")),
            Err(Error::Malformed(_))
        ));
        assert_eq!(
            rule.check(&TokenPair::new("ext", "a")).unwrap(),
            ValidatedValue::Token("a".to_string())
        );
    }

    #[test]
    fn as_text() {
        assert_eq!(ValidatedValue::Absent.as_text(), "");
        assert_eq!(ValidatedValue::Numeric(7).as_text(), "7");
        assert_eq!(ValidatedValue::QuotedString("a b".into()).as_text(), "a b");
    }
}
