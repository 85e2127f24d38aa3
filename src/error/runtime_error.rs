use crate::interpreter::operator::Operator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum RuntimeError {
    /// An operator found fewer operands on the stack than it consumes.
    StackUnderflow {
        /// The operator that was being applied.
        operator: Operator,
    },
    /// After all tokens were consumed the operand stack did not hold exactly
    /// one value.
    MalformedExpression {
        /// How many values were left on the stack.
        operands: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StackUnderflow { operator } => {
                write!(f, "Error: Missing operand for operator '{operator}'.")
            },
            Self::MalformedExpression { operands: 0 } => {
                write!(f, "Error: Expression is empty.")
            },
            Self::MalformedExpression { operands } => {
                write!(f, "Error: Malformed expression, {operands} values left over.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
