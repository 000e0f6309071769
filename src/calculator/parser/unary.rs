use std::iter::Peekable;

use crate::{
    calculator::parser::{binary::parse_expression, core::EvalResult},
    error::EvalError,
};

/// Parses a factor and computes its value.
///
/// A factor is the grammar's atomic unit: a numeric literal, a
/// parenthesized expression, or a unary-signed factor. Unary signs are
/// right-recursive, so chains like `- - 5` are accepted, and they bind
/// tighter than any binary operator: in `-2 * 3` only the `2` is negated.
///
/// Grammar:
/// ```text
///     factor := "-" factor
///             | "+" factor
///             | "(" expression ")"
///             | number
/// ```
/// # Parameters
/// - `tokens`: Token cursor positioned at the start of a factor.
///
/// # Returns
/// The value of the factor.
///
/// # Errors
/// - [`EvalError::UnexpectedEndOfExpression`] if the sequence ends where
///   a factor was expected.
/// - [`EvalError::MissingClosingParen`] if a group is not closed.
/// - [`EvalError::InvalidToken`] for any token that is not a sign, an
///   opening parenthesis, or a finite number.
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> EvalResult<f64>
    where I: Iterator<Item = &'a str>
{
    match tokens.next() {
        Some("-") => Ok(-parse_factor(tokens)?),
        Some("+") => parse_factor(tokens),
        Some("(") => parse_grouping(tokens),
        Some(token) => parse_number(token),
        None => Err(EvalError::UnexpectedEndOfExpression),
    }
}

/// Parses the remainder of a parenthesized group.
///
/// Called with the opening `(` already consumed. The enclosed expression
/// must be followed immediately by `)`; reaching the end of the sequence
/// or any other token there fails with
/// [`EvalError::MissingClosingParen`].
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> EvalResult<f64>
    where I: Iterator<Item = &'a str>
{
    let value = parse_expression(tokens)?;

    match tokens.next() {
        Some(")") => Ok(value),
        _ => Err(EvalError::MissingClosingParen),
    }
}

/// Interprets a token as a numeric literal.
///
/// A token is accepted only if it parses as a finite `f64`; `NaN` and
/// the infinities are rejected along with anything unparseable. This is
/// where malformed candidates like `2.5.5` surface, since the tokenizer
/// groups them without validation.
fn parse_number(token: &str) -> EvalResult<f64> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(EvalError::InvalidToken { token: token.to_owned() }),
    }
}
