//! Token stream rendering.

use std::io::{self, Write};

use jsonpp_lex::Token;

use crate::error::Result;

/// Writes the token table, optionally preceded by the source text.
///
/// ```
/// use jsonpp_drv::output::write_table;
/// use jsonpp_lex::{Token, TokenKind};
///
/// let mut out = Vec::new();
/// write_table(&mut out, &[Token::new(TokenKind::Null, "null", 1, 0)], None).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "Tokens:\n(value: null, type: NULL, line: 1)\n");
/// ```
pub fn write_table<W: Write + ?Sized>(
    out: &mut W,
    tokens: &[Token],
    source: Option<&str>,
) -> io::Result<()> {
    if let Some(source) = source {
        writeln!(out, "Source file:")?;
        writeln!(out, "{}", source)?;
    }
    writeln!(out, "Tokens:")?;
    for token in tokens {
        writeln!(out, "{}", token)?;
    }
    Ok(())
}

/// Writes the tokens as a pretty-printed JSON array.
pub fn write_json<W: Write + ?Sized>(out: &mut W, tokens: &[Token]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, tokens)?;
    writeln!(out)?;
    Ok(())
}
