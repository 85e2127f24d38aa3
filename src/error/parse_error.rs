#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing or converting an
/// expression to postfix order.
pub enum ParseError {
    /// Found a character that is not a digit, `.`, an operator, a parenthesis
    /// or whitespace.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        position:  usize,
    },
    /// A run of digits and decimal points could not be read as a number.
    MalformedNumber {
        /// The lexeme as written, e.g. `1.2.3`.
        literal:  String,
        /// Byte offset where the lexeme starts.
        position: usize,
    },
    /// Parentheses do not pair up.
    MismatchedParenthesis {
        /// `'('` for an opening parenthesis that is never closed, `')'` for a
        /// closing parenthesis without a partner.
        unmatched: char,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, position } => {
                write!(f, "Error at offset {position}: Invalid character '{character}'.")
            },
            Self::MalformedNumber { literal, position } => {
                write!(f, "Error at offset {position}: Malformed number '{literal}'.")
            },
            Self::MismatchedParenthesis { unmatched: '(' } => {
                write!(f, "Error: Expected closing parenthesis ')' but none found.")
            },
            Self::MismatchedParenthesis { unmatched } => {
                write!(f, "Error: Unmatched parenthesis '{unmatched}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
