//! # llcalc
//!
//! llcalc is a small interactive arithmetic language. It tokenizes a line by
//! longest match, parses it with an LL(1) recursive-descent parser that
//! evaluates as it goes, keeps variables in a symbol table that outlives each
//! line, and calls into a fixed catalog of math functions.
//!
//! ```
//! use llcalc::Session;
//!
//! let mut session = Session::<f64>::new();
//! assert_eq!(session.parse("2^3^2"), 64.0);
//! assert_eq!(session.parse("pow(2, 10)"), 1024.0);
//! ```

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

/// Provides unified error types for scanning, parsing and evaluation.
///
/// This module defines every condition a line can run into. Each carries the
/// column of the token that caused it so front ends can point at the input.
///
/// # Responsibilities
/// - Defines error enums for lexical, syntax and evaluation failures.
/// - Distinguishes fatal conditions, which end the line, from recoverable
///   ones.
pub mod error;
/// Orchestrates scanning, parsing and evaluation.
///
/// This module ties together the scanner, the evaluating parser, the symbol
/// table, the function catalog and the numeric domains, and exposes
/// [`Session`] as the entry point for evaluating lines.
pub mod interpreter;
/// General helpers for rendering numbers.
///
/// # Responsibilities
/// - Render integers in any radix from 2 to 36.
/// - Render reals in fixed-point notation with rounding and trailing-zero
///   stripping.
pub mod util;

pub use error::Diagnostic;
pub use interpreter::{
    session::{Session, SessionConfig},
    value::Number,
};

/// Evaluates a single line in a fresh real-valued session.
///
/// Returns the value of the line together with everything that was reported
/// while evaluating it.
///
/// # Examples
/// ```
/// use llcalc::evaluate;
///
/// let (value, diagnostics) = evaluate("sqrt(16)");
/// assert_eq!(value, 4.0);
/// assert!(diagnostics.is_empty());
///
/// // Unknown functions evaluate to zero and are reported.
/// let (value, diagnostics) = evaluate("foo(1)");
/// assert_eq!(value, 0.0);
/// assert_eq!(diagnostics.len(), 1);
/// ```
#[must_use]
pub fn evaluate(line: &str) -> (f64, Vec<Diagnostic>) {
    let mut session = Session::<f64>::new();
    let value = session.parse(line);
    (value, session.diagnostics().to_vec())
}
