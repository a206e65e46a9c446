//! Keyword lexing.
//!
//! This module handles `true`, `false` and `null`.

use super::ScanState;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Characters that continue a word; a keyword must not be followed by one.
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'a> Lexer<'a> {
    /// Lexes a keyword starting at `t`, `f` or `n`.
    ///
    /// The whole word is consumed first and must equal a keyword exactly, so
    /// `tru`, `True` and `truetrue` are all unknown keywords rather than a
    /// truncated or repeated `true`.
    pub(super) fn lex_keyword(&mut self) -> LexResult<Token> {
        self.enter(ScanState::InKeyword);
        self.eat_while(is_word_char);

        let word = self.cursor.slice_from(self.token_start);
        match TokenKind::from_keyword(word) {
            Some(kind) => Ok(self.make_token(kind, word)),
            None => Err(LexError::UnknownKeyword {
                word: word.to_string(),
                line: self.token_start_line,
                offset: self.token_start,
            }),
        }
    }
}
