use crate::error::{CssError, ErrorKind, Result};
use crate::tokenizer_utils::*;

/// Byte cursor over the source text shared by the parser's scanning functions.
#[derive(Debug, Clone)]
pub struct Toker<'a> {
    pub inner_str: &'a str,
    pub offset: usize,
}

impl<'a> Toker<'a> {
    pub fn new(inner_str: &'a str) -> Toker<'a> {
        Toker {
            inner_str,
            offset: 0,
        }
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.inner_str.as_bytes()
    }

    pub fn limit(&self) -> usize {
        self.inner_str.len()
    }

    pub fn at_eof(&self) -> bool {
        self.offset >= self.limit()
    }

    pub fn curr_byte(&self) -> u8 {
        self.bytes()[self.offset]
    }

    pub fn next_byte(&self) -> Option<u8> {
        self.bytes().get(self.offset + 1).cloned()
    }

    pub fn at_comment(&self) -> bool {
        !self.at_eof() && self.curr_byte() == b'/' && self.next_byte() == Some(b'*')
    }

    pub fn skip_leading_whitespace(&mut self) {
        let n = self.scan_while_or_end(self.offset, is_ascii_whitespace);
        self.offset += n;
    }

    pub fn scan_while_or_end<F>(&self, start: usize, f: F) -> usize
        where F: Fn(u8) -> bool
    {
        let data = &self.bytes()[start.min(self.limit())..];
        match data.iter().position(|&c| !f(c)) {
            Some(i) => i,
            None => data.len(),
        }
    }

    pub fn eat(&mut self, expected: &str) -> Result<()> {
        let original_offset = self.offset;
        for c in expected.as_bytes().iter() {
            if self.at_eof() {
                self.offset = original_offset;
                return Err(CssError {
                    offset: original_offset,
                    kind: ErrorKind::UnexpectedEof,
                    message: format!(
                        "Expected to see `{}`, instead reached EOF.",
                        expected,
                    ),
                })
            }
            if self.curr_byte() != *c {
                let actual_end = (original_offset + expected.len()).min(self.limit());
                let actual = String::from_utf8_lossy(
                    &self.bytes()[original_offset..actual_end]
                ).into_owned();
                self.offset = original_offset;
                return Err(CssError {
                    offset: original_offset,
                    kind: ErrorKind::TokenizerError,
                    message: format!(
                        "Expected to see `{}`, instead saw `{}`.",
                        expected,
                        actual,
                    ),
                })
            }
            self.offset += 1;
        }
        Ok(())
    }

    /// Consumes a `/* ... */` comment starting at the current offset and
    /// returns its full text.
    pub fn next_comment(&mut self) -> Result<&'a str> {
        let beginning = self.offset;
        self.eat("/*")?;
        match self.inner_str[self.offset..].find("*/") {
            Some(i) => {
                self.offset += i + 2;
                Ok(&self.inner_str[beginning..self.offset])
            },
            None => {
                self.offset = self.limit();
                Err(CssError {
                    offset: beginning,
                    kind: ErrorKind::UnexpectedEof,
                    message: String::from("Expected comment; reached EOF instead."),
                })
            },
        }
    }

    /// Consumes an identifier made of name characters and returns it.
    pub fn next_name(&mut self) -> &'a str {
        let beginning = self.offset;
        self.offset += self.scan_while_or_end(beginning, valid_name_char);
        &self.inner_str[beginning..self.offset]
    }

    /// Finds the first byte from `terminators` at or after the current offset
    /// that is not inside parentheses, brackets, strings or comments. Does not
    /// move the cursor. Returns `None` if the end of input comes first.
    pub fn find_terminator(&self, terminators: &[u8]) -> Option<(usize, u8)> {
        let bytes = self.bytes();
        let mut depth = 0usize;
        let mut i = self.offset;

        while i < bytes.len() {
            let c = bytes[i];
            if is_quote(c) {
                i = skip_string(bytes, i);
                continue
            }
            if c == b'/' && bytes.get(i + 1) == Some(&b'*') {
                i = match self.inner_str[i + 2..].find("*/") {
                    Some(n) => i + 2 + n + 2,
                    None => bytes.len(),
                };
                continue
            }
            match c {
                b'(' | b'[' => depth += 1,
                b')' | b']' => depth = depth.saturating_sub(1),
                _ if depth == 0 && terminators.contains(&c) => return Some((i, c)),
                _ => {},
            }
            i += 1;
        }
        None
    }
}

// returns the offset just past the closing quote, or the end of input
fn skip_string(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            c if c == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}
