//! # numeval
//!
//! numeval is a small arithmetic expression evaluator written in Rust.
//! It tokenizes and evaluates plain arithmetic expressions with the four
//! basic operators, parenthetical grouping, and unary signs, returning
//! either a numeric result or a descriptive error.

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

use crate::{
    calculator::{
        parser::core::{EvalResult, calculate},
        tokenizer::tokenize,
    },
    error::EvalError,
};

/// Turns raw input into tokens and evaluates them.
///
/// This module ties together tokenization and recursive-descent evaluation
/// to provide a complete pipeline for arithmetic expressions. It exposes
/// the entry points for both pre-tokenized and free-form string input.
///
/// # Responsibilities
/// - Coordinates the two core components: tokenizer and parser/evaluator.
/// - Provides entry points for tokenizing and evaluating expressions.
/// - Manages the flow of data and errors between phases.
pub mod calculator;
/// Provides the unified error type for expression evaluation.
///
/// This module defines all errors that can be raised while tokenizing or
/// evaluating an expression. It standardizes error reporting and carries
/// the offending token text where one exists.
///
/// # Responsibilities
/// - Defines the error enum covering every failure mode of an evaluation.
/// - Renders each failure as a fixed, human-readable message.
/// - Supports integration with standard error handling traits.
pub mod error;

/// Evaluates a free-form expression string and returns its value.
///
/// This is the string-in, result-out convenience operation. The input is
/// trimmed first; an empty or whitespace-only string short-circuits to
/// [`EvalError::EmptyExpression`] without invoking the tokenizer. Any
/// other input is tokenized and handed to the parser.
///
/// # Errors
/// Returns an [`EvalError`] describing the first violation encountered
/// while parsing or evaluating the expression.
///
/// # Examples
/// ```
/// use numeval::calculate_expression;
///
/// let value = calculate_expression("2 * (3 + 4) - 5 / 2.5").unwrap();
/// assert_eq!(value, 12.0);
///
/// // Failures are returned as values, never raised as panics.
/// let error = calculate_expression("2 +").unwrap_err();
/// assert_eq!(error.to_string(), "Unexpected end of expression");
/// ```
pub fn calculate_expression(input: &str) -> EvalResult<f64> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(EvalError::EmptyExpression);
    }

    let tokens = tokenize(trimmed);

    calculate(tokens.iter().map(String::as_str))
}
