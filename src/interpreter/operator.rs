/// An arithmetic operator.
///
/// The tokenizer only ever produces the five binary operators. [`Neg`] is the
/// unary minus, introduced by the postfix converter when a `-` appears where
/// an operand is expected.
///
/// [`Neg`]: Operator::Neg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`, floating-point remainder; the sign follows the dividend.
    Rem,
    /// Unary `-`.
    Neg,
}

impl Operator {
    /// Returns the binding strength of the operator. Higher binds tighter.
    ///
    /// `+` and `-` are 1, `*`, `/` and `%` are 2, unary minus is 3.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div | Self::Rem => 2,
            Self::Neg => 3,
        }
    }

    /// Number of operands the operator consumes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Neg => 1,
            _ => 2,
        }
    }

    /// Whether the operator is written before its single operand.
    #[must_use]
    pub const fn is_prefix(self) -> bool {
        matches!(self, Self::Neg)
    }

    /// Applies a binary operator to two operands using plain `f64`
    /// arithmetic. Division or remainder by zero yields an infinity or NaN.
    ///
    /// For [`Operator::Neg`] the left operand is ignored and `-right` is
    /// returned.
    ///
    /// # Example
    /// ```
    /// use rpncalc::interpreter::operator::Operator;
    ///
    /// assert_eq!(Operator::Sub.apply(7.0, 2.0), 5.0);
    /// assert_eq!(Operator::Rem.apply(-5.0, 2.0), -1.0);
    /// assert!(Operator::Div.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Rem => left % right,
            Self::Neg => -right,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Neg => "neg",
        };
        f.write_str(symbol)
    }
}
