/// Parser state and the top-level production.
///
/// Holds the scanner, the single lookahead token and the nesting guard, and
/// implements `expr`, the entry point of the grammar, together with the
/// helpers every other production uses to advance and report errors.
pub mod core;

/// Binary operator productions.
///
/// Implements the left-recursion-free `term`, `pow_term` and `*_rest`
/// productions for `+ -`, `* / %` and `^`, evaluating each operator as soon
/// as its right operand is recognized.
pub mod binary;

/// Factor productions.
///
/// Parenthesized expressions, literals, built-in function calls,
/// assignments and variable lookups.
pub mod factor;
