/// Source excerpt rendering.
///
/// Computes row/column positions and renders a caret-underlined excerpt of
/// the offending source line. Used by the tokenizer for diagnostics.
pub mod excerpt;
/// Parsing errors.
///
/// Defines all error types that can occur while turning a token stream into
/// an expression tree: empty input, trailing tokens, unbalanced brackets,
/// malformed subscripts, and unexpected tokens.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unknown
/// identifiers and properties, type mismatches, invalid operations, and
/// failed numeric conversions.
pub mod runtime_error;
/// Tokenizing errors.
///
/// Defines the error raised when a source fragment contains a code point
/// that matches no token rule, together with its rendered excerpt.
pub mod tokenize_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use tokenize_error::TokenizeError;

/// Any error the pipeline can produce, as surfaced by the engine's entry
/// points.
///
/// Errors abort the pipeline and reach the caller unchanged; the engine
/// performs no recovery and holds no partial state, so re-invoking with
/// corrected input is always safe.
#[derive(Debug)]
pub enum Error {
    /// The tokenizer rejected a source fragment.
    Tokenize(TokenizeError),
    /// The parser rejected the token stream.
    Parse(ParseError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl From<TokenizeError> for Error {
    fn from(e: TokenizeError) -> Self {
        Self::Tokenize(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tokenize(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Tokenize(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
