/// Entry point and shared result type for the parser.
///
/// Contains the public `calculate` operation, which owns the lifecycle of
/// one evaluation: the empty-sequence check, the top-level parse, and the
/// trailing-token check.
pub mod core;

/// Binary operator levels.
///
/// Implements the two left-associative grammar levels: addition and
/// subtraction at the expression level, multiplication and division at
/// the term level.
pub mod binary;

/// Factor-level parsing.
///
/// Handles the grammar's atomic units: unary signs, parenthesized
/// groups, and numeric literals.
pub mod unary;
