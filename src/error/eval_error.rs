#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
///
/// Every variant renders as a fixed message through [`std::fmt::Display`];
/// callers that need to show a failure to a user can rely on these texts
/// verbatim.
pub enum EvalError {
    /// There were no tokens to evaluate.
    EmptyExpression,
    /// A token could not be read as a number, operator, or parenthesis at
    /// the point it was consumed.
    InvalidToken {
        /// The token encountered.
        token: String,
    },
    /// Valid tokens remained after a structurally complete expression was
    /// parsed.
    UnexpectedToken {
        /// The first unconsumed token.
        token: String,
    },
    /// The sequence ended while a factor was still expected.
    UnexpectedEndOfExpression,
    /// An opening parenthesis was not matched by a closing one where
    /// expected.
    MissingClosingParen,
    /// A division's right operand evaluated to exactly zero.
    DivisionByZero,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Empty expression"),

            Self::InvalidToken { token } => write!(f, "Invalid token: {token}"),

            Self::UnexpectedToken { token } => write!(f, "Unexpected token: {token}"),

            Self::UnexpectedEndOfExpression => write!(f, "Unexpected end of expression"),

            Self::MissingClosingParen => write!(f, "Missing closing parenthesis"),

            Self::DivisionByZero => write!(f, "Division by zero"),
        }
    }
}

impl std::error::Error for EvalError {}
