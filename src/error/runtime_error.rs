use thiserror::Error;

/// Represents all errors that can occur while evaluating a parsed production.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Read a variable that was never assigned.
    #[error("Error at column {column}: Unknown identifier \"{name}\".")]
    UnknownIdentifier {
        /// The name of the variable.
        name:   String,
        /// The column of the identifier.
        column: usize,
    },
    /// Called a name that is not in the function catalog with this arity.
    #[error("Error at column {column}: Unknown function \"{name}\" taking {arity} argument(s).")]
    UnknownFunction {
        /// The name of the function.
        name:   String,
        /// The number of arguments supplied.
        arity:  usize,
        /// The column of the function name.
        column: usize,
    },
    /// Divided by zero in a numeric domain that cannot represent the result.
    #[error("Error at column {column}: Division by zero.")]
    DivisionByZero {
        /// The column of the operator.
        column: usize,
    },
}
