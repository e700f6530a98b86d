use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        functions::Builtin,
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
        value::Number,
    },
};

impl<N: Number> Parser<'_, '_, N> {
    /// Parses a factor, the highest precedence level.
    ///
    /// Grammar:
    /// ```text
    /// factor := '(' expr ')'
    ///         | NUMBER
    ///         | IDENTIFIER '(' ')'
    ///         | IDENTIFIER '(' expr ')'
    ///         | IDENTIFIER '(' expr ',' expr ')'
    ///         | IDENTIFIER '=' expr
    ///         | IDENTIFIER
    /// ```
    pub fn factor(&mut self) -> ParseResult<N> {
        match self.lookahead.kind {
            TokenKind::LParen => {
                self.advance();
                let value = self.expr()?;
                self.expect(TokenKind::RParen);
                Ok(value)
            },
            TokenKind::Number => {
                let value = self.lookahead.value;
                self.advance();
                Ok(value)
            },
            TokenKind::Identifier => {
                let name = std::mem::take(&mut self.lookahead.text);
                let column = self.lookahead.column;
                self.advance();

                match self.lookahead.kind {
                    TokenKind::LParen => self.call(name, column),
                    TokenKind::Equals => self.assignment(&name),
                    _ => self.variable(name, column),
                }
            },
            _ => Err(self.invalid_lookahead("factor")),
        }
    }

    /// Parses the argument list of a call and applies the built-in.
    ///
    /// The lookahead is the opening parenthesis. An empty argument list is
    /// accepted by the grammar but no built-in takes zero arguments.
    fn call(&mut self, name: String, column: usize) -> ParseResult<N> {
        self.advance();

        if self.lookahead.kind == TokenKind::RParen {
            self.advance();
            return apply(name, &[], column);
        }

        let first = self.expr()?;
        match self.lookahead.kind {
            TokenKind::RParen => {
                self.advance();
                apply(name, &[first], column)
            },
            TokenKind::Comma => {
                self.advance();
                let second = self.expr()?;
                self.expect(TokenKind::RParen);
                apply(name, &[first, second], column)
            },
            _ => Err(ParseError::InvalidFunctionCall { name,
                                                       column: self.lookahead.column }.into()),
        }
    }

    /// Evaluates the right-hand side and binds it to `name`.
    ///
    /// The lookahead is the `=`. The assigned value is the value of the
    /// factor.
    fn assignment(&mut self, name: &str) -> ParseResult<N> {
        self.advance();
        let value = self.expr()?;
        self.symbols.assign_or_insert(name, value);
        Ok(value)
    }

    fn variable(&self, name: String, column: usize) -> ParseResult<N> {
        match self.symbols.find(&name) {
            Some(symbol) => Ok(symbol.value),
            None => Err(RuntimeError::UnknownIdentifier { name, column }.into()),
        }
    }
}

fn apply<N: Number>(name: String, args: &[N], column: usize) -> ParseResult<N> {
    match Builtin::lookup(&name, args.len()) {
        Some(builtin) => Ok(builtin.apply(args)),
        None => Err(RuntimeError::UnknownFunction { name,
                                                    arity: args.len(),
                                                    column }.into()),
    }
}
