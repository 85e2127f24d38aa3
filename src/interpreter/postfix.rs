use crate::{
    error::ParseError,
    interpreter::{lexer::Token, operator::Operator},
};

/// Reorders an infix token sequence into postfix (Reverse Polish) order.
///
/// This is the shunting-yard algorithm. Numbers go straight to the output.
/// A binary operator first moves every stacked operator of equal or higher
/// precedence to the output, which makes all binary operators left
/// associative, and is then pushed. Parentheses group and are dropped.
///
/// A `-` found where an operand is expected (at the start, after an operator
/// or after `(`) is read as unary minus and becomes [`Operator::Neg`]. Prefix
/// operators are pushed without popping anything.
///
/// An empty input yields an empty output.
///
/// # Errors
/// Returns [`ParseError::MismatchedParenthesis`] when a `)` has no matching
/// `(` or a `(` is never closed.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{lexer::{render, tokenize}, postfix::to_postfix};
///
/// let tokens = tokenize("2 + 3 * 4").unwrap();
/// let postfix = to_postfix(&tokens).unwrap();
/// assert_eq!(render(&postfix, " "), "2 3 4 * +");
/// ```
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, ParseError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();
    let mut expect_operand = true;

    for token in tokens {
        match token {
            Token::Number(_) => {
                output.push(token.clone());
                expect_operand = false;
            },
            Token::Operator(Operator::Sub) if expect_operand => {
                stack.push(Token::Operator(Operator::Neg));
            },
            Token::Operator(op) if op.is_prefix() => stack.push(Token::Operator(*op)),
            Token::Operator(op) => {
                while let Some(&Token::Operator(top)) = stack.last()
                      && top.precedence() >= op.precedence()
                {
                    output.push(Token::Operator(top));
                    stack.pop();
                }
                stack.push(Token::Operator(*op));
                expect_operand = true;
            },
            Token::LeftParen => {
                stack.push(Token::LeftParen);
                expect_operand = true;
            },
            Token::RightParen => {
                loop {
                    match stack.pop() {
                        Some(Token::LeftParen) => break,
                        Some(top) => output.push(top),
                        None => {
                            return Err(ParseError::MismatchedParenthesis { unmatched: ')' });
                        },
                    }
                }
                expect_operand = false;
            },
        }
    }

    while let Some(top) = stack.pop() {
        if top == Token::LeftParen {
            return Err(ParseError::MismatchedParenthesis { unmatched: '(' });
        }
        output.push(top);
    }

    Ok(output)
}
