/// The evaluator module computes a number from a postfix sequence.
///
/// The evaluator walks the postfix tokens once, pushing numbers onto an
/// operand stack and replacing the top operands with the result whenever an
/// operator is met. It is the last stage of evaluation.
///
/// # Responsibilities
/// - Applies every operator to the right number of operands, in source order.
/// - Reports missing operands and leftover values.
pub mod evaluator;
/// The lexer module tokenizes source text for further processing.
///
/// The lexer (tokenizer) reads the raw expression and produces a sequence of
/// tokens: numbers, operators and parentheses. Whitespace is skipped. This is
/// the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Reads numeric literals with the standard floating-point parser.
/// - Reports invalid characters and malformed numbers with their offset.
pub mod lexer;
/// The operator module defines the arithmetic operators.
///
/// Holds the operator table shared by the converter and the evaluator:
/// symbols, precedence, arity and the IEEE-754 arithmetic each operator
/// performs.
pub mod operator;
/// The postfix module reorders infix tokens into postfix order.
///
/// Implements the shunting-yard algorithm over an operator stack, resolving
/// precedence, left associativity, parentheses and unary minus.
///
/// # Responsibilities
/// - Emits numbers and operators in Reverse Polish order, without
///   parentheses.
/// - Reports unbalanced parentheses.
pub mod postfix;
