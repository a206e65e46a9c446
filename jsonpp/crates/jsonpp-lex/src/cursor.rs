//! Character cursor for traversing JSON source text.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through the source. It steps over UTF-8 encoded text one
//! character at a time and counts lines as newlines are consumed.

/// A cursor over an immutable source buffer.
///
/// The cursor holds a byte offset and a 1-based line counter. The line is
/// incremented when a `'\n'` is consumed, so anything that starts right
/// after a newline is attributed to the new line.
///
/// # Example
///
/// ```
/// use jsonpp_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("{\n}");
/// assert_eq!(cursor.advance(), Some('{'));
/// assert_eq!(cursor.advance(), Some('\n'));
/// assert_eq!(cursor.line(), 2);
/// assert_eq!(cursor.current(), Some('}'));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`, on line 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
        }
    }

    /// Returns the character at the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        // Fast path for ASCII
        match self.source.as_bytes().get(self.position) {
            Some(&b) if b < 128 => Some(b as char),
            Some(_) => self.source[self.position..].chars().next(),
            None => None,
        }
    }

    /// Consumes the current character and returns it.
    ///
    /// Updates line tracking. Returns `None` and does nothing at end of
    /// input.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text from `start` up to the current position.
    ///
    /// ```
    /// use jsonpp_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("null,");
    /// let start = cursor.position();
    /// for _ in 0..4 {
    ///     cursor.advance();
    /// }
    /// assert_eq!(cursor.slice_from(start), "null");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
