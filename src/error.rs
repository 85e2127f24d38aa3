/// Parsing errors.
///
/// Defines the error types raised while turning source text into tokens and
/// while reordering those tokens into postfix form: unknown characters,
/// unreadable numbers and unbalanced parentheses.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types raised while a postfix sequence is evaluated on
/// the operand stack.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The flat taxonomy of evaluation failures.
///
/// Every [`Error`] maps onto exactly one kind. Front ends that only show a
/// generic indicator can match on this instead of the detailed variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidCharacter,
    MalformedNumber,
    MismatchedParenthesis,
    StackUnderflow,
    MalformedExpression,
}

/// Any failure produced by [`crate::evaluate`] or one of its stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The tokenizer or the postfix converter rejected the input.
    Parse(ParseError),
    /// The postfix evaluator rejected the sequence.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns which of the five failure kinds this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(ParseError::InvalidCharacter { .. }) => ErrorKind::InvalidCharacter,
            Self::Parse(ParseError::MalformedNumber { .. }) => ErrorKind::MalformedNumber,
            Self::Parse(ParseError::MismatchedParenthesis { .. }) => {
                ErrorKind::MismatchedParenthesis
            },
            Self::Runtime(RuntimeError::StackUnderflow { .. }) => ErrorKind::StackUnderflow,
            Self::Runtime(RuntimeError::MalformedExpression { .. }) => {
                ErrorKind::MalformedExpression
            },
        }
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
