use crate::{
    error::{Diagnostic, ParseError},
    interpreter::{
        lexer::{Scanner, Token, TokenKind},
        symbols::SymbolTable,
        value::Number,
    },
};

/// Result type used by every grammar production.
///
/// An `Err` ends evaluation of the current line.
pub type ParseResult<T> = Result<T, Diagnostic>;

/// A predictive parser that evaluates one line while it recognizes it.
///
/// The parser owns the scanner for the line and the single lookahead token.
/// Each production inspects only the lookahead to choose its alternative and
/// returns the value of what it recognized, so no syntax tree is built.
/// Assignments write straight into the borrowed symbol table.
pub struct Parser<'a, 'src, N> {
    scanner:              Scanner<'src, N>,
    pub(super) lookahead: Token<N>,
    pub(super) symbols:   &'a mut SymbolTable<N>,
    diagnostics:          &'a mut Vec<Diagnostic>,
    depth:                usize,
    max_depth:            usize,
}

impl<'a, 'src, N: Number> Parser<'a, 'src, N> {
    /// Creates a parser over `line` and primes the lookahead token.
    ///
    /// Non-fatal diagnostics are appended to `diagnostics`. `max_depth` bounds
    /// how deeply expressions may nest.
    pub fn new(line: &'src str,
               symbols: &'a mut SymbolTable<N>,
               diagnostics: &'a mut Vec<Diagnostic>,
               max_depth: usize)
               -> Self {
        let mut scanner = Scanner::new(line);
        let lookahead = scanner.next_token();
        Self { scanner,
               lookahead,
               symbols,
               diagnostics,
               depth: 0,
               max_depth }
    }

    /// Parses and evaluates a whole line.
    ///
    /// A blank line evaluates to the default value without a diagnostic.
    /// Anything left over after the top-level expression is an error.
    ///
    /// # Example
    /// ```
    /// use llcalc::interpreter::{parser::core::Parser, symbols::SymbolTable};
    ///
    /// let mut symbols = SymbolTable::<f64>::with_constants();
    /// let mut diagnostics = Vec::new();
    ///
    /// let value = Parser::new("123 + 500*2", &mut symbols, &mut diagnostics, 64).parse_line();
    /// assert_eq!(value, Ok(1123.0));
    ///
    /// let value = Parser::new("1 2", &mut symbols, &mut diagnostics, 64).parse_line();
    /// assert!(value.is_err());
    /// ```
    pub fn parse_line(&mut self) -> ParseResult<N> {
        if self.lookahead.kind == TokenKind::End {
            return Ok(N::default());
        }

        let value = self.expr()?;

        match self.lookahead.kind {
            TokenKind::End => Ok(value),
            _ => Err(self.lookahead
                         .lexical_error()
                         .unwrap_or_else(|| {
                             ParseError::TrailingInput { found:  self.lookahead.to_string(),
                                                         column: self.lookahead.column, }
                         })
                         .into()),
        }
    }

    /// Parses an additive expression, the lowest precedence level.
    ///
    /// A leading `+` or `-` is accepted here and only here; the sign applies
    /// to the first term.
    ///
    /// Grammar: `expr := ('+' | '-')? term expr_rest`
    pub fn expr(&mut self) -> ParseResult<N> {
        self.enter()?;
        let value = self.signed_expr();
        self.depth -= 1;
        value
    }

    fn signed_expr(&mut self) -> ParseResult<N> {
        match self.lookahead.kind {
            TokenKind::Plus => {
                self.advance();
                let term = self.term()?;
                self.expr_rest(term)
            },
            TokenKind::Minus => {
                self.advance();
                let term = self.term()?.neg();
                self.expr_rest(term)
            },
            kind if starts_term(kind) => {
                let term = self.term()?;
                self.expr_rest(term)
            },
            _ => Err(self.invalid_lookahead("expr")),
        }
    }

    /// Replaces the lookahead with the next token of the line.
    pub(super) fn advance(&mut self) {
        self.lookahead = self.scanner.next_token();
    }

    /// Consumes the lookahead if it is `expected`.
    ///
    /// A mismatch is recorded as [`ParseError::CouldNotMatch`] and the
    /// lookahead is left in place, so parsing continues.
    pub(super) fn expect(&mut self, expected: TokenKind) {
        if self.lookahead.kind == expected {
            self.advance();
            return;
        }

        let diagnostic = Diagnostic::from(ParseError::CouldNotMatch { expected: expected.symbol().unwrap_or('?'),
                                                                      found:    self.lookahead.to_string(),
                                                                      column:   self.lookahead.column, });
        tracing::debug!(%diagnostic, "continuing after unmatched terminal");
        self.diagnostics.push(diagnostic);
    }

    /// Builds the error for a lookahead that `production` cannot accept.
    ///
    /// Invalid tokens report the lexical problem behind them instead.
    pub(super) fn invalid_lookahead(&self, production: &'static str) -> Diagnostic {
        self.lookahead
            .lexical_error()
            .unwrap_or_else(|| ParseError::InvalidLookahead { production,
                                                              found: self.lookahead.to_string(),
                                                              column: self.lookahead.column })
            .into()
    }

    fn enter(&mut self) -> ParseResult<()> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep { limit:  self.max_depth,
                                                    column: self.lookahead.column, }.into());
        }
        self.depth += 1;
        Ok(())
    }
}

/// Returns `true` if `kind` is in the FIRST set of `term`, `pow_term` and
/// `factor`.
#[must_use]
pub const fn starts_term(kind: TokenKind) -> bool {
    matches!(kind,
             TokenKind::LParen | TokenKind::Number | TokenKind::Identifier)
}
