// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Character access into an in-memory source text, with the line
//! counter used for error reporting.

/// `pos` is a byte offset into `text` and always lies on a char
/// boundary, `0 <= pos <= text.len()`. `line` is 1-based and counts
/// the newlines consumed so far.
#[derive(Debug, Clone)]
pub struct Cursor<'s> {
    text: &'s str,
    pos: usize,
    line: u32,
}

impl<'s> Cursor<'s> {
    pub fn new(text: &'s str) -> Self {
        Cursor { text, pos: 0, line: 1 }
    }

    /// The character at the current position, `None` at the end.
    pub fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    /// The character `offset` characters ahead, `None` past the end.
    pub fn peek_at(&self, offset: usize) -> Option<char> {
        self.text[self.pos..].chars().nth(offset)
    }

    /// Step over one character (no-op at the end). Consuming a
    /// newline bumps the line counter.
    pub fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
            if c == '\n' {
                self.line += 1;
            }
        }
    }

    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance()
        }
    }

    /// Consume `expected` iff it is the next character.
    pub fn try_consume(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn has_more(&self) -> bool {
        self.pos < self.text.len()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// The text between two earlier positions.
    pub fn slice(&self, start: usize, end: usize) -> &'s str {
        &self.text[start..end]
    }

    /// The text from an earlier position up to the current one.
    pub fn since(&self, start: usize) -> &'s str {
        self.slice(start, self.pos)
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
