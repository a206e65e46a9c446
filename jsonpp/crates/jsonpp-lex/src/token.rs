//! Token definitions.
//!
//! A [`Token`] is a classified, line-tagged lexical unit. The stream is flat:
//! tokens carry no nesting information.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a [`Token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// A numeric literal such as `-12.5e-3`
    Number,
    /// A string literal; the lexeme excludes the quotes
    String,
}

impl TokenKind {
    /// The fixed source text of punctuation and keyword tokens.
    ///
    /// Returns `None` for `Number` and `String`, whose text varies.
    pub const fn canonical(self) -> Option<&'static str> {
        match self {
            TokenKind::LeftBrace => Some("{"),
            TokenKind::RightBrace => Some("}"),
            TokenKind::LeftBracket => Some("["),
            TokenKind::RightBracket => Some("]"),
            TokenKind::Colon => Some(":"),
            TokenKind::Comma => Some(","),
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            TokenKind::Null => Some("null"),
            TokenKind::Number | TokenKind::String => None,
        }
    }

    /// Stable display name used by the token table.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::LeftBracket => "LEFT_BRACKET",
            TokenKind::RightBracket => "RIGHT_BRACKET",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Null => "NULL",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
        }
    }

    /// Returns true for `{ } [ ] : ,`.
    pub const fn is_structural(self) -> bool {
        matches!(
            self,
            TokenKind::LeftBrace
                | TokenKind::RightBrace
                | TokenKind::LeftBracket
                | TokenKind::RightBracket
                | TokenKind::Colon
                | TokenKind::Comma
        )
    }

    /// Returns true for `true`, `false` and `null`.
    pub const fn is_keyword(self) -> bool {
        matches!(self, TokenKind::True | TokenKind::False | TokenKind::Null)
    }

    /// Maps a structural character to its kind.
    pub const fn from_structural(c: char) -> Option<TokenKind> {
        match c {
            '{' => Some(TokenKind::LeftBrace),
            '}' => Some(TokenKind::RightBrace),
            '[' => Some(TokenKind::LeftBracket),
            ']' => Some(TokenKind::RightBracket),
            ':' => Some(TokenKind::Colon),
            ',' => Some(TokenKind::Comma),
            _ => None,
        }
    }

    /// Maps a keyword spelling to its kind.
    pub fn from_keyword(word: &str) -> Option<TokenKind> {
        match word {
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            "null" => Some(TokenKind::Null),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single token produced by the [`Lexer`](crate::Lexer).
///
/// `lexeme` is the raw source text: for strings, the content between the
/// quotes with escape sequences left as written; for numbers, the literal
/// including its sign.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,
    /// The text the token represents.
    pub lexeme: String,
    /// The 1-based line where the token begins.
    pub line: u32,
    /// Byte offset of the token's first character.
    pub offset: usize,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, offset: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            offset,
        }
    }

    /// Source text that re-tokenizes to this token.
    ///
    /// ```
    /// use jsonpp_lex::{Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::String, r#"a\"b"#, 1, 0);
    /// assert_eq!(token.source_text(), r#""a\"b""#);
    /// ```
    pub fn source_text(&self) -> String {
        match self.kind {
            TokenKind::String => format!("\"{}\"", self.lexeme),
            _ => self.lexeme.clone(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(value: {}, type: {}, line: {})",
            self.lexeme, self.kind, self.line
        )
    }
}
