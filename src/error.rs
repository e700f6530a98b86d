use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur during scanning and parsing of an
/// input line. Parse errors include characters that form no token, literals
/// out of range, lookahead tokens outside a production's FIRST set, missing
/// terminals and resource limits.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while a recognized production
/// is evaluated: unknown identifiers, unknown functions and trapped division
/// by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// A condition reported while evaluating one line.
///
/// Diagnostics never escape a session as faults. Fatal ones end the current
/// line, which then evaluates to the domain's default value; the only
/// non-fatal one, [`ParseError::CouldNotMatch`], is recorded and parsing goes
/// on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Diagnostic {
    /// Returns `true` if this condition terminates evaluation of the line.
    ///
    /// # Example
    /// ```
    /// use llcalc::error::{Diagnostic, ParseError, RuntimeError};
    ///
    /// let missing = Diagnostic::from(ParseError::CouldNotMatch { expected: ')',
    ///                                                            found:    "end of input".into(),
    ///                                                            column:   5, });
    /// assert!(!missing.is_fatal());
    ///
    /// let unknown = Diagnostic::from(RuntimeError::UnknownIdentifier { name:   "zzz".into(),
    ///                                                                  column: 1, });
    /// assert!(unknown.is_fatal());
    /// ```
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::Parse(ParseError::CouldNotMatch { .. }))
    }
}
