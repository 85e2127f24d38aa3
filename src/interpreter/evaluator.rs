use crate::{error::RuntimeError, interpreter::lexer::Token};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a postfix token sequence and returns its value.
///
/// Numbers are pushed onto an operand stack. A binary operator pops the most
/// recent value as its right operand and the one below it as its left
/// operand, so `a b -` computes `a - b`. Unary minus pops a single value.
/// Arithmetic follows IEEE-754: `10 0 /` is infinity, `0 0 /` is NaN.
///
/// # Errors
/// - [`RuntimeError::StackUnderflow`] when an operator finds too few
///   operands.
/// - [`RuntimeError::MalformedExpression`] when the stack does not hold
///   exactly one value at the end, including for an empty sequence. A
///   parenthesis inside a postfix sequence is reported the same way.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{evaluator::eval_postfix, lexer::Token, operator::Operator};
///
/// let postfix = [Token::from(7.0), Token::from(2.0), Token::Operator(Operator::Sub)];
/// assert_eq!(eval_postfix(&postfix).unwrap(), 5.0);
/// ```
pub fn eval_postfix(tokens: &[Token]) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match *token {
            Token::Number(ref number) => stack.push(number.value()),
            Token::Operator(operator) => {
                let underflow = RuntimeError::StackUnderflow { operator };
                let right = stack.pop().ok_or_else(|| underflow.clone())?;
                let left = if operator.arity() == 2 {
                    stack.pop().ok_or(underflow)?
                } else {
                    0.0
                };
                stack.push(operator.apply(left, right));
            },
            Token::LeftParen | Token::RightParen => {
                return Err(RuntimeError::MalformedExpression { operands: stack.len() });
            },
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        rest => Err(RuntimeError::MalformedExpression { operands: rest.len() }),
    }
}
