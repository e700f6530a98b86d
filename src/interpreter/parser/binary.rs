use crate::{
    error::{Diagnostic, RuntimeError},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser, starts_term},
        value::Number,
    },
};

impl<N: Number> Parser<'_, '_, N> {
    /// Continues an additive expression.
    ///
    /// Folds `+` and `-` left to right onto `acc`. Stops at `)`, `,` or the
    /// end of the line.
    ///
    /// Grammar: `expr_rest := ('+' term | '-' term)*`
    pub fn expr_rest(&mut self, mut acc: N) -> ParseResult<N> {
        loop {
            match self.lookahead.kind {
                TokenKind::Plus => {
                    self.advance();
                    acc = acc.add(self.term()?);
                },
                TokenKind::Minus => {
                    self.advance();
                    acc = acc.sub(self.term()?);
                },
                TokenKind::RParen | TokenKind::End | TokenKind::Comma => return Ok(acc),
                _ => return Err(self.invalid_lookahead("expr_rest")),
            }
        }
    }

    /// Parses a multiplicative expression.
    ///
    /// Grammar: `term := pow_term term_rest`
    pub fn term(&mut self) -> ParseResult<N> {
        if !starts_term(self.lookahead.kind) {
            return Err(self.invalid_lookahead("term"));
        }
        let value = self.pow_term()?;
        self.term_rest(value)
    }

    /// Continues a multiplicative expression.
    ///
    /// `%` keeps the sign of the dividend. Division and remainder by zero
    /// follow the numeric domain: reals produce infinities or NaN, integers
    /// report [`RuntimeError::DivisionByZero`].
    ///
    /// Grammar: `term_rest := ('*' pow_term | '/' pow_term | '%' pow_term)*`
    pub fn term_rest(&mut self, mut acc: N) -> ParseResult<N> {
        loop {
            let column = self.lookahead.column;
            match self.lookahead.kind {
                TokenKind::Star => {
                    self.advance();
                    acc = acc.mul(self.pow_term()?);
                },
                TokenKind::Slash => {
                    self.advance();
                    let rhs = self.pow_term()?;
                    acc = acc.div(rhs).ok_or_else(|| division_by_zero(column))?;
                },
                TokenKind::Percent => {
                    self.advance();
                    let rhs = self.pow_term()?;
                    acc = acc.rem(rhs).ok_or_else(|| division_by_zero(column))?;
                },
                TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::RParen
                | TokenKind::End
                | TokenKind::Comma => return Ok(acc),
                _ => return Err(self.invalid_lookahead("term_rest")),
            }
        }
    }

    /// Parses an exponentiation.
    ///
    /// Grammar: `pow_term := factor pow_rest`
    pub fn pow_term(&mut self) -> ParseResult<N> {
        if !starts_term(self.lookahead.kind) {
            return Err(self.invalid_lookahead("pow_term"));
        }
        let value = self.factor()?;
        self.pow_rest(value)
    }

    /// Continues an exponentiation.
    ///
    /// Each `^` raises the result so far, so `2^3^2` is `(2^3)^2 = 64`.
    ///
    /// Grammar: `pow_rest := ('^' factor)*`
    pub fn pow_rest(&mut self, mut acc: N) -> ParseResult<N> {
        loop {
            match self.lookahead.kind {
                TokenKind::Caret => {
                    self.advance();
                    acc = acc.pow(self.factor()?);
                },
                TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Percent
                | TokenKind::RParen
                | TokenKind::End
                | TokenKind::Comma => return Ok(acc),
                _ => return Err(self.invalid_lookahead("pow_rest")),
            }
        }
    }
}

fn division_by_zero(column: usize) -> Diagnostic {
    RuntimeError::DivisionByZero { column }.into()
}
