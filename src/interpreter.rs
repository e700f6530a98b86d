/// The built-in function catalog.
///
/// A fixed table of math functions keyed by name and arity. Calls resolve
/// against it by exact, case-sensitive name; there is no way to add entries
/// at runtime.
pub mod functions;
/// The lexer module tokenizes an input line on demand.
///
/// The scanner hands out one token per call, extending each candidate as far
/// as it still classifies as a number, an identifier or a punctuation
/// character.
///
/// # Responsibilities
/// - Skips blanks between tokens and stops at a newline.
/// - Resolves ambiguity by longest match, leaving the first character that
///   breaks a match for the next token.
/// - Reports characters that form no token without stalling.
pub mod lexer;
/// The parser module recognizes and evaluates expressions in one pass.
///
/// A predictive recursive-descent parser over four precedence levels. Each
/// production returns the value of what it recognized, so a line is
/// evaluated while it is parsed and nothing survives the line except the
/// symbol assignments it made.
///
/// # Responsibilities
/// - Chooses every production from a single lookahead token.
/// - Evaluates operators, function calls, assignments and variable reads.
/// - Reports errors with the column of the offending token and bounds the
///   nesting depth.
pub mod parser;
/// Sessions tie a symbol table to the parser.
///
/// This is the public entry point for evaluating lines: it keeps the symbol
/// table alive between lines, applies the configured limits and collects the
/// diagnostics of each line.
pub mod session;
/// The symbol table of a session.
///
/// An insertion-ordered, name-unique list of variables seeded with `pi`.
pub mod symbols;
/// The numeric domains a session can evaluate in.
pub mod value;
