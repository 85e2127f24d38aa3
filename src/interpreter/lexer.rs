use logos::Logos;

use crate::{error::ParseError, interpreter::operator::Operator};

/// Represents a lexical token of an arithmetic expression.
///
/// Tokens are produced left to right and never change afterwards. Their
/// order in a sequence mirrors their order in the source.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    Number(Number),
    /// One of `+ - * / %`.
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl From<f64> for Token {
    fn from(value: f64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => f.write_str(number.text()),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftParen => f.write_str("("),
            Self::RightParen => f.write_str(")"),
        }
    }
}

/// A numeric literal: its value together with the text it was read from.
#[derive(Debug, PartialEq, Clone)]
pub struct Number {
    value: f64,
    text:  String,
}

impl Number {
    /// Reads a literal of the form `digits` or `digits.digits`.
    ///
    /// Returns `None` for anything else, including `1.`, `.5` and `1.2.3`.
    ///
    /// # Example
    /// ```
    /// use rpncalc::interpreter::lexer::Number;
    ///
    /// let number = Number::parse("007").unwrap();
    /// assert_eq!(number.value(), 7.0);
    /// assert_eq!(number.text(), "007");
    /// assert!(Number::parse(".5").is_none());
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        let well_formed = match text.split_once('.') {
            Some((whole, fraction)) => all_digits(whole) && all_digits(fraction),
            None => all_digits(text),
        };
        if !well_formed {
            return None;
        }
        let value = text.parse().ok()?;
        Some(Self { value,
                    text: text.to_string() })
    }

    /// The numeric value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The literal as written, without whitespace.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Wraps a computed value; the text is its shortest `f64` display.
impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self { value,
               text: value.to_string() }
    }
}

/// The raw lexemes recognized by the generated lexer.
///
/// Whitespace is skipped here, so two runs of digits separated only by
/// whitespace arrive back to back and are joined by [`tokenize`].
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
enum Lexeme {
    #[regex(r"[0-9.]+")]
    Digits,
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token("%", |_| Operator::Rem)]
    Operator(Operator),
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
}

/// Digits seen since the last non-numeric token.
#[derive(Default)]
struct PendingNumber {
    text:  String,
    start: usize,
}

impl PendingNumber {
    fn push(&mut self, digits: &str, position: usize) {
        if self.text.is_empty() {
            self.start = position;
        }
        self.text.push_str(digits);
    }

    /// Emits the buffered literal, if any, and empties the buffer.
    fn flush(&mut self, tokens: &mut Vec<Token>) -> Result<(), ParseError> {
        if self.text.is_empty() {
            return Ok(());
        }
        let text = std::mem::take(&mut self.text);
        match Number::parse(&text) {
            Some(number) => {
                tokens.push(Token::Number(number));
                Ok(())
            },
            None => Err(ParseError::MalformedNumber { literal:  text,
                                                      position: self.start, }),
        }
    }
}

/// Converts an expression into its token sequence.
///
/// Digits and `.` accumulate into a pending literal. Whitespace is skipped
/// without ending it, so `2 3` reads as `23`; any other character flushes it
/// as one [`Token::Number`] before its own token is emitted.
///
/// # Errors
/// - [`ParseError::InvalidCharacter`] for anything other than digits, `.`,
///   `+-*/%()` and whitespace.
/// - [`ParseError::MalformedNumber`] for a literal that is not `digits` or
///   `digits.digits`, such as `1.2.3`, `1.` or `.5`.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{lexer::{Token, tokenize}, operator::Operator};
///
/// let tokens = tokenize("2 * (3)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::from(2.0),
///                 Token::Operator(Operator::Mul),
///                 Token::LeftParen,
///                 Token::from(3.0),
///                 Token::RightParen]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut pending = PendingNumber::default();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let token = match lexeme {
            Ok(Lexeme::Digits) => {
                pending.push(lexer.slice(), lexer.span().start);
                continue;
            },
            Ok(Lexeme::Operator(op)) => Token::Operator(op),
            Ok(Lexeme::LeftParen) => Token::LeftParen,
            Ok(Lexeme::RightParen) => Token::RightParen,
            Err(()) => {
                let position = lexer.span().start;
                let character = source[position..].chars().next().unwrap_or_default();
                return Err(ParseError::InvalidCharacter { character, position });
            },
        };
        pending.flush(&mut tokens)?;
        tokens.push(token);
    }
    pending.flush(&mut tokens)?;

    tracing::trace!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}

/// Joins the textual forms of a token sequence, separated by `separator`.
///
/// With an empty separator this reproduces the tokenized expression without
/// its whitespace.
#[must_use]
pub fn render(tokens: &[Token], separator: &str) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(separator)
}
