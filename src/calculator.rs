/// The parser module evaluates token sequences by recursive descent.
///
/// The parser consumes the token stream produced by the tokenizer and
/// computes the numeric value of the expression as it descends; no syntax
/// tree is materialized. It validates grammar and numeric literals,
/// reporting the first violation it encounters.
///
/// # Responsibilities
/// - Consumes tokens through the three grammar levels (expression, term,
///   factor) with standard operator precedence and left-associativity.
/// - Classifies and validates each token at the point it is consumed.
/// - Reports structural and arithmetic errors such as division by zero.
pub mod parser;
/// The tokenizer module splits raw input into token strings.
///
/// The tokenizer reads free-form text and produces an ordered sequence of
/// token texts: candidate numbers, operators, and parentheses. Whitespace
/// is discarded. This is the first stage of an evaluation; no validation
/// happens here.
///
/// # Responsibilities
/// - Groups digit-or-dot runs into single candidate-number tokens.
/// - Emits each operator and parenthesis as its own token.
/// - Passes unrecognized characters through one at a time for the parser
///   to reject.
pub mod tokenizer;
