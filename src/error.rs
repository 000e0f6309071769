/// Evaluation errors.
///
/// Defines the error type covering every failure that can occur while an
/// expression is parsed and evaluated: structural mistakes, unreadable
/// tokens, and division by zero. All of them are input-validation
/// failures detected deterministically at the point of violation.
pub mod eval_error;

pub use eval_error::EvalError;
