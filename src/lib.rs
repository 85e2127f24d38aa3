//! # rpncalc
//!
//! rpncalc is the core of a keypad calculator written in Rust.
//! An expression is tokenized, reordered into postfix form with the
//! shunting-yard algorithm and evaluated on an operand stack. A small
//! controller holds the expression being typed and the history of results.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::eval_postfix,
    lexer::{render, tokenize},
    postfix::to_postfix,
};

/// Keeps the state of a keypad calculator.
///
/// This module declares the `Calculator` controller, which owns the
/// expression buffer and the history list and maps keypad actions and
/// keyboard keys onto buffer edits and evaluations.
///
/// # Responsibilities
/// - Edits the expression: append, clear, backspace, sign toggle.
/// - Runs evaluations and records `"<expression> = <result>"` history lines.
/// - Shows a generic error indicator when an evaluation fails.
pub mod calculator;
/// Provides unified error types for tokenizing, conversion and evaluation.
///
/// This module defines every error that can be raised while an expression is
/// evaluated. Each stage fails fast and its error reaches the caller
/// unchanged.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, converter, evaluator).
/// - Attaches offsets and offending text where they are known.
/// - Maps every error onto a flat [`error::ErrorKind`].
pub mod error;
/// Runs the three evaluation stages.
///
/// This module ties together the lexer, the postfix converter and the
/// postfix evaluator. Data flows one way: text, tokens, postfix tokens,
/// number.
///
/// # Responsibilities
/// - Tokenizes the source text.
/// - Reorders tokens by precedence into postfix order.
/// - Computes the result with IEEE-754 arithmetic.
pub mod interpreter;
/// General utilities for presenting numbers.
pub mod util;

pub use error::{Error, ErrorKind};

/// Evaluates an arithmetic expression.
///
/// Supports decimal numbers, `+ - * / %`, parentheses and unary minus.
/// `*`, `/` and `%` bind tighter than `+` and `-`; operators of equal
/// precedence group left to right.
///
/// # Errors
/// Returns the first failure of any stage unchanged: an invalid character, a
/// malformed number, mismatched parentheses, a missing operand or a
/// malformed (for example empty) expression.
///
/// # Examples
/// ```
/// use rpncalc::{ErrorKind, evaluate};
///
/// assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
/// assert_eq!(evaluate("(2+3)*4").unwrap(), 20.0);
/// assert!(evaluate("10/0").unwrap().is_infinite());
///
/// let err = evaluate("2+(3").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::MismatchedParenthesis);
/// ```
pub fn evaluate(source: &str) -> Result<f64, Error> {
    let tokens = tokenize(source)?;
    let postfix = to_postfix(&tokens)?;
    tracing::debug!(source, postfix = %render(&postfix, " "), "converted to postfix");

    let value = eval_postfix(&postfix)?;
    tracing::debug!(source, value, "evaluated");
    Ok(value)
}

/// Returns the postfix form of an expression with tokens separated by
/// spaces. Unary minus is written as `neg`.
///
/// # Errors
/// Tokenizer and converter failures. The postfix sequence is not evaluated,
/// so operand errors are not detected here.
///
/// # Examples
/// ```
/// use rpncalc::to_postfix_string;
///
/// assert_eq!(to_postfix_string("(2+3)*-4").unwrap(), "2 3 + 4 neg *");
/// ```
pub fn to_postfix_string(source: &str) -> Result<String, Error> {
    let tokens = tokenize(source)?;
    let postfix = to_postfix(&tokens)?;
    Ok(render(&postfix, " "))
}
