//! Number literal lexing.
//!
//! Grammar: `-? digits ( '.' digits )? ( [eE] [+-]? digits )?`
//!
//! The literal is recognized, not evaluated. Leading zeros are accepted
//! here; range and precision are left to whoever consumes the token.
//!
//! A number must end at a delimiter. Text that runs straight on from a
//! complete literal (`1true`, `12-3`, `1.5.3`) fails as one invalid number,
//! the same way a run-on keyword does.

use super::ScanState;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Characters that may not directly follow a complete number.
#[inline]
fn continues_number(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+' | '.')
}

impl<'a> Lexer<'a> {
    /// Lexes a number literal starting at `-` or a digit.
    ///
    /// Every part that is started must be completed: a sign, a `.` or an
    /// exponent marker with no digits after it fails the whole literal.
    /// There is no fallback to a shorter number.
    pub(super) fn lex_number(&mut self) -> LexResult<Token> {
        self.enter(ScanState::InNumber);
        let start = self.cursor.position();

        self.eat('-');
        self.expect_digits(start)?;

        if self.eat('.') {
            self.expect_digits(start)?;
        }

        if self.eat('e') || self.eat('E') {
            if !self.eat('+') {
                self.eat('-');
            }
            self.expect_digits(start)?;
        }

        if self.cursor.current().is_some_and(continues_number) {
            self.eat_while(continues_number);
            return Err(self.invalid_number(start));
        }

        let literal = self.cursor.slice_from(start);
        Ok(self.make_token(TokenKind::Number, literal))
    }

    fn expect_digits(&mut self, start: usize) -> LexResult<()> {
        if self.eat_while(|c| c.is_ascii_digit()) == 0 {
            return Err(self.invalid_number(start));
        }
        Ok(())
    }

    fn invalid_number(&self, start: usize) -> LexError {
        LexError::InvalidNumber {
            literal: self.cursor.slice_from(start).to_string(),
            line: self.token_start_line,
            offset: self.token_start,
        }
    }
}
