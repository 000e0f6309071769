use crate::{calculator::parser::binary::parse_expression, error::EvalError};

/// Result type used by the parser and evaluator.
///
/// Every evaluation function returns either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a pre-tokenized expression and returns its value.
///
/// This is the entry point for token-sequence input. The cursor into the
/// sequence is a fresh [`Peekable`](std::iter::Peekable) constructed here
/// and threaded by mutable reference through the grammar levels, so no
/// state outlives the call and concurrent evaluations cannot interfere.
///
/// The whole sequence must form exactly one expression: an empty sequence
/// fails with [`EvalError::EmptyExpression`], and any token left over
/// after a complete parse fails with [`EvalError::UnexpectedToken`]
/// naming the first unconsumed token.
///
/// # Parameters
/// - `tokens`: The token texts, in source order.
///
/// # Returns
/// The numeric value of the expression.
///
/// # Example
/// ```
/// use numeval::calculator::parser::core::calculate;
///
/// let value = calculate(["2", "+", "3"]).unwrap();
/// assert_eq!(value, 5.0);
///
/// let error = calculate(["5", "/", "0"]).unwrap_err();
/// assert_eq!(error.to_string(), "Division by zero");
/// ```
pub fn calculate<'a, I>(tokens: I) -> EvalResult<f64>
    where I: IntoIterator<Item = &'a str>
{
    let mut tokens = tokens.into_iter().peekable();

    if tokens.peek().is_none() {
        return Err(EvalError::EmptyExpression);
    }

    let value = parse_expression(&mut tokens)?;

    match tokens.next() {
        Some(token) => Err(EvalError::UnexpectedToken { token: token.to_owned() }),
        None => Ok(value),
    }
}
