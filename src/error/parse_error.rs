use thiserror::Error;

/// Represents all errors that can occur while scanning or parsing a line.
///
/// Every variant carries the 1-based column of the token that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Characters were read that do not form any token.
    #[error("Error at column {column}: Invalid input \"{text}\".")]
    InvalidInput {
        /// The characters that could not be classified.
        text:   String,
        /// The column where the input starts.
        column: usize,
    },
    /// A numeric literal does not fit the numeric domain.
    #[error("Error at column {column}: Literal {text} is out of range.")]
    LiteralOutOfRange {
        /// The literal text.
        text:   String,
        /// The column where the literal starts.
        column: usize,
    },
    /// A single token grew past the maximum token length.
    #[error("Error at column {column}: Token is longer than {limit} characters.")]
    TokenTooLong {
        /// The maximum token length.
        limit:  usize,
        /// The column where the token starts.
        column: usize,
    },
    /// The lookahead token cannot start or continue the current production.
    #[error("Error at column {column}: Invalid lookahead in {production}: {found}.")]
    InvalidLookahead {
        /// The grammar production that rejected the token.
        production: &'static str,
        /// The rejected token.
        found:      String,
        /// The column of the rejected token.
        column:     usize,
    },
    /// An expected terminal was not found. Parsing continues without
    /// consuming the lookahead.
    #[error("Error at column {column}: Could not match symbol. Expected '{expected}', got {found}.")]
    CouldNotMatch {
        /// The terminal that was expected.
        expected: char,
        /// The token found instead.
        found:    String,
        /// The column of the token found instead.
        column:   usize,
    },
    /// A function call is followed by neither `)` nor `,`.
    #[error("Error at column {column}: Invalid function call to \"{name}\".")]
    InvalidFunctionCall {
        /// The called name.
        name:   String,
        /// The column of the offending token.
        column: usize,
    },
    /// Tokens remain after a complete expression.
    #[error("Error at column {column}: Extra input after expression: {found}.")]
    TrailingInput {
        /// The first token after the expression.
        found:  String,
        /// The column of that token.
        column: usize,
    },
    /// Expressions are nested deeper than the session allows.
    #[error("Error at column {column}: Expression nesting exceeds {limit} levels.")]
    NestingTooDeep {
        /// The configured nesting limit.
        limit:  usize,
        /// The column where the limit was hit.
        column: usize,
    },
    /// The input line is longer than the session allows.
    #[error("Error: Input line has {length} characters, the limit is {limit}.")]
    LineTooLong {
        /// The configured line length limit.
        limit:  usize,
        /// The length of the rejected line.
        length: usize,
    },
}
