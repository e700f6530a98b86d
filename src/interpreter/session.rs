use crate::{
    error::{Diagnostic, ParseError},
    interpreter::{
        parser::core::{ParseResult, Parser},
        symbols::SymbolTable,
        value::Number,
    },
    util::num::FormatOptions,
};

/// Default limit on how deeply expressions may nest.
pub const DEFAULT_MAX_DEPTH: usize = 256;
/// Default limit on the number of characters in one input line.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 4096;

/// Limits and output settings of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Maximum nesting of parentheses, call arguments and assignments.
    pub max_depth:       usize,
    /// Maximum number of characters in one line.
    pub max_line_length: usize,
    /// How results and symbols are rendered.
    pub format:          FormatOptions,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { max_depth:       DEFAULT_MAX_DEPTH,
               max_line_length: DEFAULT_MAX_LINE_LENGTH,
               format:          FormatOptions::default(), }
    }
}

/// An interactive calculator session.
///
/// A session owns the symbol table for its whole lifetime and evaluates one
/// line per call. Nothing a line does can invalidate the session: every
/// problem becomes a [`Diagnostic`] and the line evaluates to the domain's
/// default value.
///
/// `N` selects the numeric domain, `f64` or `i64`.
///
/// # Example
/// ```
/// use llcalc::Session;
///
/// let mut session = Session::<f64>::new();
/// assert_eq!(session.parse("x = 3 + 4"), 7.0);
/// assert_eq!(session.parse("x * 2"), 14.0);
///
/// assert_eq!(session.parse("zzz"), 0.0);
/// assert_eq!(session.diagnostics().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Session<N = f64> {
    symbols:     SymbolTable<N>,
    diagnostics: Vec<Diagnostic>,
    config:      SessionConfig,
}

impl<N: Number> Default for Session<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Number> Session<N> {
    /// Starts a session with the default configuration and `pi` defined.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Starts a session with the given configuration and `pi` defined.
    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        Self { symbols: SymbolTable::with_constants(),
               diagnostics: Vec::new(),
               config }
    }

    /// Evaluates one line and returns its value.
    ///
    /// When evaluation fails the result is the domain's default value (`0`)
    /// and the reason is available from [`Session::diagnostics`].
    pub fn parse(&mut self, line: &str) -> N {
        self.try_parse(line).unwrap_or_default()
    }

    /// Evaluates one line, returning the condition that ended it on failure.
    ///
    /// Assignments made before the failure point stay in effect.
    /// Non-fatal diagnostics do not turn the result into an error; they are
    /// still listed by [`Session::diagnostics`].
    ///
    /// # Errors
    /// Returns the first fatal [`Diagnostic`] of the line.
    pub fn try_parse(&mut self, line: &str) -> Result<N, Diagnostic> {
        self.diagnostics.clear();

        let outcome = self.evaluate(line);
        if let Err(diagnostic) = &outcome {
            self.diagnostics.push(diagnostic.clone());
        }

        for diagnostic in &self.diagnostics {
            tracing::debug!(%diagnostic, "diagnostic");
        }
        tracing::debug!(line, ?outcome, "evaluated line");

        outcome
    }

    fn evaluate(&mut self, line: &str) -> ParseResult<N> {
        let length = line.chars().count();
        if length > self.config.max_line_length {
            return Err(ParseError::LineTooLong { limit: self.config.max_line_length,
                                                 length }.into());
        }

        Parser::new(line,
                    &mut self.symbols,
                    &mut self.diagnostics,
                    self.config.max_depth).parse_line()
    }

    /// Diagnostics reported by the most recent evaluation.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The session's symbol table.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable<N> {
        &self.symbols
    }

    /// Renders a value the way this session prints results.
    #[must_use]
    pub fn format_number(&self, value: N) -> String {
        value.format(&self.config.format)
    }

    /// Lists all symbols as `name = value` lines in insertion order.
    ///
    /// # Example
    /// ```
    /// use llcalc::Session;
    ///
    /// let mut session = Session::<f64>::new();
    /// session.parse("x = 1");
    /// session.parse("x = 2");
    ///
    /// assert_eq!(session.print_symbols(), "pi = 3.14159265\nx = 2\n");
    /// ```
    #[must_use]
    pub fn print_symbols(&self) -> String {
        self.symbols.format_all(&self.config.format)
    }

    /// Ends the session and releases its symbol table.
    pub fn close(self) {
        tracing::debug!(symbols = self.symbols.len(), "closing session");
    }
}
