use logos::Logos;

/// Character classes recognized by the scanner.
///
/// The scanner only groups characters; it never decides whether a grouped
/// run is a well-formed number. A run like `2.5.5` is scanned as a single
/// candidate number and rejected later, when the parser tries to consume
/// it.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum RawToken {
    /// Digit-or-dot runs, such as `42`, `2.5`, or the malformed `2.5.5`.
    #[regex(r"[0-9.]+")]
    Number,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Any other character becomes its own single-character token. The
    /// parser reports it as an invalid token when it is consumed.
    #[regex(r".", priority = 0)]
    Unknown,
    /// Spaces, tabs, and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Splits a free-form string into an ordered sequence of token texts.
///
/// Tokens are returned as plain strings; classification and validation
/// happen downstream, when the parser consumes them. An empty or
/// whitespace-only input yields an empty sequence, not an error.
///
/// # Parameters
/// - `input`: The raw expression text.
///
/// # Returns
/// The token texts in source order, with all whitespace discarded.
///
/// # Example
/// ```
/// use numeval::calculator::tokenizer::tokenize;
///
/// let tokens = tokenize("2 * (3 + 4) - 5 / 2.5");
/// assert_eq!(tokens,
///            vec!["2", "*", "(", "3", "+", "4", ")", "-", "5", "/", "2.5"]);
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Vec<String> {
    let mut lexer = RawToken::lexer(input);
    let mut tokens = Vec::new();

    while lexer.next().is_some() {
        tokens.push(lexer.slice().to_owned());
    }

    tokens
}
