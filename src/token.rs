use std::fmt;

/// One raw directive occurrence from a `Cache-Control` value.
///
/// The name is lower-cased when the pair is produced by the tokenizer.
/// A bare flag such as `no-store` has an empty `value` and `quoted == false`.
/// Quoted-string values are stored unescaped, without the surrounding quotes.
///
/// See [RFC 7234 5.2](https://www.rfc-editor.org/rfc/rfc7234#section-5.2).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenPair {
    /// Directive name (e.g. `max-age`).
    pub name: String,
    /// Directive argument, empty if absent.
    pub value: String,
    /// `true` if the argument was written as a quoted-string.
    pub quoted: bool,
}

impl TokenPair {
    /// A directive without an argument.
    pub fn flag(name: impl Into<String>) -> Self {
        TokenPair {
            name: name.into(),
            value: String::new(),
            quoted: false,
        }
    }

    /// A directive with a bare token argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use cache_control_parse::TokenPair;
    ///
    /// let pair = TokenPair::new("max-age", "60");
    /// assert_eq!(pair.to_string(), "max-age=60");
    /// ```
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        TokenPair {
            name: name.into(),
            value: value.into(),
            quoted: false,
        }
    }

    /// A directive with a quoted-string argument.
    pub fn quoted(name: impl Into<String>, value: impl Into<String>) -> Self {
        TokenPair {
            name: name.into(),
            value: value.into(),
            quoted: true,
        }
    }

    /// The shortest form that carries `value`: a flag if empty, a bare token
    /// if possible, a quoted-string otherwise.
    pub(crate) fn canonical(name: &str, value: &str) -> Self {
        if is_token(value) || value.is_empty() {
            TokenPair::new(name, value)
        } else {
            TokenPair::quoted(name, value)
        }
    }

    /// Whether an argument was present, including an empty quoted-string.
    pub fn has_value(&self) -> bool {
        self.quoted || !self.value.is_empty()
    }
}

impl fmt::Display for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.quoted {
            write!(f, "=")?;
            write_quoted(f, &self.value)
        } else if !self.value.is_empty() {
            write!(f, "={}", self.value)
        } else {
            Ok(())
        }
    }
}

/// HTTP `tchar` (RFC 7230 3.2.6).
pub(crate) fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '-' | '.' | '^' | '_' | '`' | '|' | '~'
        )
}

pub(crate) fn is_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_token_char)
}

/// Write `s` as a quoted-string, escaping `"` and `\`.
fn write_quoted(f: &mut fmt::Formatter, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        if matches!(c, '"' | '\\') {
            write!(f, "\\")?;
        }
        write!(f, "{c}")?;
    }
    f.write_str("\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_flag() {
        assert_eq!(TokenPair::flag("no-store").to_string(), "no-store");
    }

    #[test]
    fn display_token() {
        assert_eq!(TokenPair::new("max-age", "4649").to_string(), "max-age=4649");
    }

    #[test]
    fn display_quoted_escapes() {
        let pair = TokenPair::quoted("ext", r#"a "b" \c"#);
        assert_eq!(pair.to_string(), r#"ext="a \"b\" \\c""#);
    }

    #[test]
    fn display_empty_quoted() {
        assert_eq!(TokenPair::quoted("ext", "").to_string(), r#"ext="""#);
    }

    #[test]
    fn canonical_form() {
        assert_eq!(TokenPair::canonical("a", ""), TokenPair::flag("a"));
        assert_eq!(TokenPair::canonical("a", "b"), TokenPair::new("a", "b"));
        assert_eq!(TokenPair::canonical("a", "b c"), TokenPair::quoted("a", "b c"));
    }

    #[test]
    fn has_value() {
        assert!(!TokenPair::flag("no-store").has_value());
        assert!(TokenPair::new("max-age", "1").has_value());
        assert!(TokenPair::quoted("ext", "").has_value());
    }

    #[test]
    fn token_chars() {
        assert!(is_token("s-maxage"));
        assert!(is_token("x!#$%&'*+.^_`|~"));
        assert!(!is_token(""));
        assert!(!is_token("a b"));
        assert!(!is_token("a,b"));
        assert!(!is_token("a=b"));
        assert!(!is_token("\"a\""));
    }

    #[test]
    fn structural_equality() {
        assert_eq!(TokenPair::new("max-age", "1"), TokenPair::new("max-age", "1"));
        assert_ne!(TokenPair::new("max-age", "1"), TokenPair::quoted("max-age", "1"));
        assert_ne!(TokenPair::new("max-age", "1"), TokenPair::new("max-age", "2"));
    }
}
