/// Error type for `Cache-Control` parsing.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// Structurally invalid header value: unterminated quote, empty list
    /// element, missing value after `=`, or a character outside the grammar.
    #[error("malformed Cache-Control value: {0}")]
    Malformed(String),

    /// A directive that takes no argument was given one (e.g. `no-store="foo"`).
    #[error("directive `{0}` does not take a value")]
    UnexpectedValue(String),

    /// A delta-seconds directive had a missing, quoted, non-numeric or
    /// out-of-range value.
    #[error("invalid delta-seconds: {0}")]
    InvalidNumeric(String),

    /// A single-directive entry point saw zero or several directives.
    #[error("expected exactly one directive, found {0}")]
    EmptyInput(usize),
}

/// Result type for `Cache-Control` parsing.
pub type Result<T> = std::result::Result<T, Error>;
