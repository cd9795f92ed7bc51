use thiserror::Error;

/// Errors raised while parsing a route pattern string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern string was empty.
    #[error("pattern is empty")]
    Empty,

    /// The pattern did not start with `/`.
    #[error("pattern `{0}` does not start with `/`")]
    Relative(String),

    /// The pattern contained a `:` segment with no parameter name.
    #[error("pattern `{0}` contains a parameter segment with no name")]
    EmptyParamName(String),
}

/// Errors raised while building a route table.
///
/// Every variant is a registration-time failure and fatal to application
/// startup; a successfully built table cannot fail at resolve time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Two routes were registered under the same name.
    #[error("duplicate route name `{0}`")]
    DuplicateName(String),

    /// A route's pattern string failed to parse.
    #[error("invalid pattern for route `{name}`")]
    InvalidPattern {
        name: String,
        #[source]
        source: PatternError,
    },
}
