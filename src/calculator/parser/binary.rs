use std::iter::Peekable;

use crate::{
    calculator::parser::{core::EvalResult, unary::parse_factor},
    error::EvalError,
};

/// Parses addition and subtraction and computes the running value.
///
/// Handles the left-associative binary operators `+` and `-`. The value
/// is folded strictly left to right, so `10 - 5 - 2` evaluates to `3`.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token cursor positioned at the start of an expression.
///
/// # Returns
/// The value of the expression.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> EvalResult<f64>
    where I: Iterator<Item = &'a str>
{
    let mut value = parse_term(tokens)?;

    loop {
        match tokens.peek() {
            Some(&"+") => {
                tokens.next();
                value += parse_term(tokens)?;
            },
            Some(&"-") => {
                tokens.next();
                value -= parse_term(tokens)?;
            },
            _ => break,
        }
    }

    Ok(value)
}

/// Parses multiplication and division and computes the running value.
///
/// Handles the left-associative binary operators `*` and `/` with the
/// same fold as [`parse_expression`], one precedence level tighter. The
/// divisor is evaluated before the zero check, so a zero produced by an
/// arbitrarily nested subexpression still fails with
/// [`EvalError::DivisionByZero`].
///
/// The rule is: `term := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `tokens`: Token cursor positioned at the start of a term.
///
/// # Returns
/// The value of the term.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> EvalResult<f64>
    where I: Iterator<Item = &'a str>
{
    let mut value = parse_factor(tokens)?;

    loop {
        match tokens.peek() {
            Some(&"*") => {
                tokens.next();
                value *= parse_factor(tokens)?;
            },
            Some(&"/") => {
                tokens.next();
                let divisor = parse_factor(tokens)?;
                if divisor == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                value /= divisor;
            },
            _ => break,
        }
    }

    Ok(value)
}
