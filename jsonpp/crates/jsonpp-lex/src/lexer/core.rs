//! Core lexer implementation.
//!
//! This module contains the Lexer struct, its scan state machine and the
//! character-class table that routes the first character of each token to
//! a sub-scanner.

use std::iter::FusedIterator;

use jsonpp_util::{DiagnosticBuilder, Handler};

use crate::config::LexConfig;
use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};

/// Where the lexer is in its scan.
///
/// Sub-scans (`InString`, `InNumber`, `InKeyword`) return to `Default`
/// when their literal completes. An error moves the lexer to `Failed`; the
/// end of input moves it to `Finished`. Both are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    /// Between tokens
    Default,
    /// Inside a string literal
    InString,
    /// Inside a number literal
    InNumber,
    /// Inside `true`, `false` or `null`
    InKeyword,
    /// Aborted by a lexical error
    Failed,
    /// Reached end of input
    Finished,
}

impl ScanState {
    /// Returns true once no more tokens can be produced.
    pub const fn is_terminal(self) -> bool {
        matches!(self, ScanState::Failed | ScanState::Finished)
    }
}

/// Classes of characters that may begin a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CharClass {
    /// Space, tab, carriage return or newline
    Whitespace,
    /// One of `{ } [ ] : ,`
    Structural(TokenKind),
    /// `"`
    Quote,
    /// `t`, `f` or `n`
    KeywordStart,
    /// `-` or an ASCII digit
    NumberStart,
    /// Anything else
    Other,
}

impl CharClass {
    pub(crate) fn of(c: char) -> Self {
        match c {
            ' ' | '\t' | '\r' | '\n' => CharClass::Whitespace,
            '"' => CharClass::Quote,
            't' | 'f' | 'n' => CharClass::KeywordStart,
            '-' | '0'..='9' => CharClass::NumberStart,
            c => match TokenKind::from_structural(c) {
                Some(kind) => CharClass::Structural(kind),
                None => CharClass::Other,
            },
        }
    }
}

/// Lexer for JSON source text.
///
/// The lexer makes a single pass over the source and never backtracks.
/// It can be driven token by token with [`next_token`](Lexer::next_token),
/// as an [`Iterator`], or run to completion with
/// [`tokenize`](Lexer::tokenize).
///
/// ```
/// use jsonpp_lex::{LexConfig, Lexer, TokenKind};
/// use jsonpp_util::Handler;
///
/// let handler = Handler::new();
/// let lexer = Lexer::new("[true]", LexConfig::default(), &handler);
/// let kinds: Vec<_> = lexer.map(|t| t.unwrap().kind).collect();
/// assert_eq!(kinds, [TokenKind::LeftBracket, TokenKind::True, TokenKind::RightBracket]);
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Sink for trace and error diagnostics.
    handler: &'a Handler,

    config: LexConfig,

    state: ScanState,

    /// Starting position of the current token (byte offset).
    pub(super) token_start: usize,

    /// Line number where the current token starts (1-based).
    pub(super) token_start_line: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source text.
    pub fn new(source: &'a str, config: LexConfig, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            config,
            state: ScanState::Default,
            token_start: 0,
            token_start_line: 1,
        }
    }

    /// Returns the next token, `Ok(None)` at end of input.
    ///
    /// Whitespace is skipped. After an error every further call returns
    /// `Ok(None)`.
    pub fn next_token(&mut self) -> LexResult<Option<Token>> {
        if self.state.is_terminal() {
            return Ok(None);
        }

        loop {
            let Some(c) = self.cursor.current() else {
                self.state = ScanState::Finished;
                return Ok(None);
            };

            self.token_start = self.cursor.position();
            self.token_start_line = self.cursor.line();

            let scanned = match CharClass::of(c) {
                CharClass::Whitespace => {
                    self.bump();
                    continue;
                },
                CharClass::Structural(kind) => {
                    self.bump();
                    let lexeme = self.cursor.slice_from(self.token_start);
                    Ok(self.make_token(kind, lexeme))
                },
                CharClass::Quote => self.lex_string(),
                CharClass::KeywordStart => self.lex_keyword(),
                CharClass::NumberStart => self.lex_number(),
                CharClass::Other => Err(LexError::UnexpectedCharacter {
                    ch: c,
                    line: self.token_start_line,
                    offset: self.token_start,
                }),
            };

            return match scanned {
                Ok(token) => {
                    self.state = ScanState::Default;
                    self.trace_token(&token);
                    Ok(Some(token))
                },
                Err(error) => Err(self.fail(error)),
            };
        }
    }

    /// Runs the lexer to the end of input.
    pub fn tokenize(mut self) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Current scan state.
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// The configuration this lexer runs with.
    pub fn config(&self) -> &LexConfig {
        &self.config
    }

    pub(super) fn enter(&mut self, state: ScanState) {
        self.state = state;
    }

    /// Consumes one character, reporting it when tracing.
    pub(super) fn bump(&mut self) -> Option<char> {
        let offset = self.cursor.position();
        let line = self.cursor.line();
        let c = self.cursor.advance()?;
        if self.config.trace {
            DiagnosticBuilder::trace(format!("consume {:?} [{:?}]", c, self.state))
                .at(offset, line)
                .emit(self.handler);
        }
        Some(c)
    }

    /// Consumes the current character if it is `expected`.
    pub(super) fn eat(&mut self, expected: char) -> bool {
        if self.cursor.current() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `pred` holds; returns how many.
    pub(super) fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(c) = self.cursor.current() {
            if !pred(c) {
                break;
            }
            self.bump();
            count += 1;
        }
        count
    }

    pub(super) fn make_token(&self, kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme, self.token_start_line, self.token_start)
    }

    fn fail(&mut self, error: LexError) -> LexError {
        self.state = ScanState::Failed;
        DiagnosticBuilder::error(error.to_string())
            .at(error.offset(), error.line())
            .emit(self.handler);
        error
    }

    fn trace_token(&self, token: &Token) {
        if self.config.trace {
            DiagnosticBuilder::debug(format!("emit {} {:?}", token.kind, token.lexeme))
                .at(token.offset, token.line)
                .emit(self.handler);
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl<'a> FusedIterator for Lexer<'a> {}
