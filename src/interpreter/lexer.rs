use std::{fmt, marker::PhantomData};

use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::value::{Domain, Number},
};

/// Longest identifier or operator the scanner accepts.
pub const MAX_TOKEN_LEN: usize = 255;
/// Longest numeric literal the scanner accepts.
///
/// Any finite `f64` rendered in fixed point with the default radix fits.
pub const MAX_LITERAL_LEN: usize = 512;

/// Classifies a complete candidate string.
///
/// The scanner never runs this lexer over a whole line. It feeds it the
/// characters accumulated so far and only accepts the result when a single
/// lexeme spans the entire candidate.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Lexeme {
    /// Integer literals such as `42`.
    #[regex(r"[0-9]+")]
    Digits,
    /// Literals with a decimal point: `1.5`, `1.`, `.5` and `.` itself.
    #[regex(r"[0-9]*\.[0-9]*")]
    Decimal,
    /// Identifier tokens such as `x`, `pi` or `log10`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Identifier,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token("=")]
    Equals,
}

/// Why a run of characters did not produce a usable token.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LexicalFault {
    /// The characters do not classify as any token.
    Unclassified,
    /// A numeric literal does not fit the numeric domain.
    OutOfRange,
    /// The token grew past [`MAX_TOKEN_LEN`], or [`MAX_LITERAL_LEN`] for a
    /// numeric literal.
    TooLong {
        /// The limit that applied.
        limit: usize,
    },
}

/// The kind of a scanned token.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    /// A numeric literal; its value is in [`Token::value`].
    Number,
    /// A variable or function name; its text is in [`Token::text`].
    Identifier,
    /// End of the line.
    End,
    /// Input that produced no token.
    Invalid(LexicalFault),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `^`
    Caret,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// `=`
    Equals,
}

impl TokenKind {
    /// Returns the character a punctuation token is written as.
    #[must_use]
    pub const fn symbol(self) -> Option<char> {
        match self {
            Self::Plus => Some('+'),
            Self::Minus => Some('-'),
            Self::Star => Some('*'),
            Self::Slash => Some('/'),
            Self::Percent => Some('%'),
            Self::Caret => Some('^'),
            Self::LParen => Some('('),
            Self::RParen => Some(')'),
            Self::Comma => Some(','),
            Self::Equals => Some('='),
            _ => None,
        }
    }
}

/// A lexical token with its payload.
#[derive(Debug, PartialEq, Clone)]
pub struct Token<N> {
    /// What was matched.
    pub kind:   TokenKind,
    /// The literal value; only meaningful for [`TokenKind::Number`].
    pub value:  N,
    /// The matched characters.
    pub text:   String,
    /// 1-based column of the first character.
    pub column: usize,
}

impl<N: Number> Token<N> {
    fn end(column: usize) -> Self {
        Self { kind: TokenKind::End,
               value: N::default(),
               text: String::new(),
               column }
    }

    /// Converts an invalid token into the lexical error it stands for.
    ///
    /// # Returns
    /// `None` if the token is valid.
    #[must_use]
    pub fn lexical_error(&self) -> Option<ParseError> {
        let TokenKind::Invalid(fault) = self.kind else {
            return None;
        };
        Some(match fault {
                 LexicalFault::Unclassified => ParseError::InvalidInput { text:   self.text.clone(),
                                                                          column: self.column, },
                 LexicalFault::OutOfRange => {
                     ParseError::LiteralOutOfRange { text:   self.text.clone(),
                                                     column: self.column, }
                 },
                 LexicalFault::TooLong { limit } => ParseError::TokenTooLong { limit,
                                                                               column: self.column },
             })
    }
}

impl<N: Number> fmt::Display for Token<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Number => write!(f, "number {}", self.text),
            TokenKind::Identifier => write!(f, "identifier \"{}\"", self.text),
            TokenKind::End => write!(f, "end of input"),
            TokenKind::Invalid(_) => write!(f, "invalid input \"{}\"", self.text),
            kind => write!(f, "'{}'", kind.symbol().unwrap_or('?')),
        }
    }
}

/// Splits one input line into tokens, one token per call.
///
/// The scanner grows a candidate string one character at a time and
/// reclassifies the whole candidate after every step. It stops at the first
/// character that makes the candidate unclassifiable, leaves that character
/// unread for the next call, and returns the longest candidate that did
/// classify. Spaces and tabs are skipped only between tokens; a newline
/// between tokens ends the line.
///
/// # Example
/// ```
/// use llcalc::interpreter::lexer::{Scanner, TokenKind};
///
/// let kinds: Vec<TokenKind> = Scanner::<f64>::new("x1 = 2.5*y").map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            vec![TokenKind::Identifier,
///                 TokenKind::Equals,
///                 TokenKind::Number,
///                 TokenKind::Star,
///                 TokenKind::Identifier]);
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'src, N> {
    input:    &'src str,
    pos:      usize,
    finished: bool,
    domain:   PhantomData<N>,
}

impl<'src, N: Number> Scanner<'src, N> {
    /// Creates a scanner positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'src str) -> Self {
        Self { input,
               pos: 0,
               finished: false,
               domain: PhantomData }
    }

    /// Byte offset of the next unread character.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn column_at(&self, offset: usize) -> usize {
        self.input[..offset].chars().count() + 1
    }

    /// Scans the next token.
    ///
    /// Once the line is exhausted every further call returns an
    /// [`TokenKind::End`] token. A character that cannot start any token is
    /// consumed and reported as [`TokenKind::Invalid`], so repeated calls
    /// always make progress.
    pub fn next_token(&mut self) -> Token<N> {
        let token = self.scan();
        tracing::trace!(kind = ?token.kind, text = %token.text, column = token.column, "scanned token");
        token
    }

    fn scan(&mut self) -> Token<N> {
        let mut candidate = String::new();
        let mut start = self.pos;
        let mut longest = None;

        while let Some(c) = self.peek() {
            if candidate.is_empty() {
                if c == ' ' || c == '\t' {
                    self.pos += c.len_utf8();
                    continue;
                }
                if c == '\n' {
                    let column = self.column_at(self.pos);
                    self.pos += 1;
                    return Token::end(column);
                }
                start = self.pos;
            }

            candidate.push(c);
            if let Some(kind) = classify::<N>(&candidate) {
                self.pos += c.len_utf8();
                longest = Some(kind);
            } else {
                candidate.pop();
                if longest.is_none() {
                    // nothing matched yet: drop the character
                    self.pos += c.len_utf8();
                    return self.invalid(LexicalFault::Unclassified, c.to_string(), start);
                }
                break;
            }
        }

        let Some(kind) = longest else {
            return Token::end(self.column_at(self.pos));
        };

        let limit = if kind == TokenKind::Number { MAX_LITERAL_LEN } else { MAX_TOKEN_LEN };
        if candidate.len() > limit {
            return self.invalid(LexicalFault::TooLong { limit }, candidate, start);
        }

        let column = self.column_at(start);
        if kind != TokenKind::Number {
            return Token { kind,
                           value: N::default(),
                           text: candidate,
                           column };
        }
        match N::from_literal(&candidate) {
            Some(value) => Token { kind,
                                   value,
                                   text: candidate,
                                   column },
            None => self.invalid(LexicalFault::OutOfRange, candidate, start),
        }
    }

    fn invalid(&self, fault: LexicalFault, text: String, start: usize) -> Token<N> {
        Token { kind: TokenKind::Invalid(fault),
                value: N::default(),
                text,
                column: self.column_at(start) }
    }
}

/// Yields tokens up to, but not including, the end of the line.
impl<N: Number> Iterator for Scanner<'_, N> {
    type Item = Token<N>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::End {
            self.finished = true;
            return None;
        }
        Some(token)
    }
}

/// Classifies a whole candidate string, or returns `None` if no single token
/// spans it.
///
/// Decimal literals only classify in the real domain.
fn classify<N: Number>(candidate: &str) -> Option<TokenKind> {
    let mut lexer = Lexeme::lexer(candidate);
    let lexeme = lexer.next()?.ok()?;
    if lexer.span() != (0..candidate.len()) {
        return None;
    }

    Some(match lexeme {
             Lexeme::Digits => TokenKind::Number,
             Lexeme::Decimal => match N::DOMAIN {
                 Domain::Real => TokenKind::Number,
                 Domain::Integer => return None,
             },
             Lexeme::Identifier => TokenKind::Identifier,
             Lexeme::Plus => TokenKind::Plus,
             Lexeme::Minus => TokenKind::Minus,
             Lexeme::Star => TokenKind::Star,
             Lexeme::Slash => TokenKind::Slash,
             Lexeme::Percent => TokenKind::Percent,
             Lexeme::Caret => TokenKind::Caret,
             Lexeme::LParen => TokenKind::LParen,
             Lexeme::RParen => TokenKind::RParen,
             Lexeme::Comma => TokenKind::Comma,
             Lexeme::Equals => TokenKind::Equals,
         })
}
