//! String literal scanning.
//!
//! Only the boundaries of a string are found here. Escape sequences are
//! stepped over so that `\"` does not close the literal, but they are kept
//! verbatim in the lexeme.

use super::ScanState;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal starting at the opening quote.
    ///
    /// The lexeme is the text strictly between the quotes. A backslash
    /// always consumes the character after it. Reaching the end of input,
    /// including directly after a backslash, is an unterminated string.
    pub(super) fn lex_string(&mut self) -> LexResult<Token> {
        self.enter(ScanState::InString);
        self.bump();

        let content_start = self.cursor.position();
        loop {
            let content_end = self.cursor.position();
            match self.bump() {
                Some('"') => {
                    let content = &self.cursor.source()[content_start..content_end];
                    return Ok(self.make_token(TokenKind::String, content));
                },
                Some('\\') => {
                    if self.bump().is_none() {
                        return Err(self.unterminated_string());
                    }
                },
                Some(_) => {},
                None => return Err(self.unterminated_string()),
            }
        }
    }

    fn unterminated_string(&self) -> LexError {
        LexError::UnterminatedString {
            line: self.token_start_line,
            offset: self.token_start,
        }
    }
}
