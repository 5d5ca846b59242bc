// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Recursive descent parser turning source text into exactly one
//! [Value](../value/enum.Value.html) tree. Quoting sugar is expanded
//! into the corresponding two element lists while reading; lists are
//! built as pair chains directly.

use crate::cursor::Cursor;
use crate::number::Number;
use crate::settings::{Settings, DEFAULT_SETTINGS, DEFAULT_SCOPE_NAME};
use crate::value::{Atom, Quoting, Symbol, Value, escape2char, improper_list};
use kstring::KString;
use log::{debug, trace};
use num::BigInt;
use num::complex::Complex64;
use thiserror::Error;

/// What was found where something else was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Found(pub Option<char>);

impl std::fmt::Display for Found {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        match self.0 {
            Some(c) => f.write_fmt(format_args!("'{}'", c.escape_debug())),
            None => f.write_str("end of input"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("nothing to be parsed")]
    NothingToParse,
    #[error("expecting end of code, got {0}")]
    TrailingContent(Found),
    #[error("invalid number format")]
    InvalidNumber,
    #[error("invalid number format, expecting denominator")]
    MissingDenominator,
    #[error("invalid number format, division by zero")]
    DivisionByZero,
    #[error("invalid number format, expecting 'i' for complex, got {0}")]
    MissingImaginaryUnit(Found),
    #[error("expected ')', got {0}")]
    UnclosedList(Found),
    #[error("'.' without preceding item")]
    DotWithoutPrecedingItem,
    #[error("missing item after '.'")]
    MissingItemAfterDot,
    #[error("expecting '\"' to end a string")]
    UnterminatedString,
    #[error("vector literals are not supported")]
    VectorUnsupported,
    #[error("invalid '#' token, got {0} after '#'")]
    InvalidHashToken(Found),
    #[error("nesting too deep")]
    NestingTooDeep,
}

/// A [ParseError](ParseError) together with the scope label and the
/// (1-based) line it happened on.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{name}:{line} {err}")]
pub struct ParseErrorWithLine {
    pub err: ParseError,
    pub name: KString,
    pub line: u32,
}

impl ParseError {
    fn at(self, name: &KString, line: u32) -> ParseErrorWithLine {
        ParseErrorWithLine {
            err: self,
            name: name.clone(),
            line,
        }
    }
}

type PResult<T> = Result<T, ParseErrorWithLine>;

/// Categories of the character an expression starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lead {
    Pound,
    ListOpen,
    Quote(Quoting),
    Unquote,
    Sign,
    StringOpen,
    Digit,
    Other,
}

fn classify(c: char) -> Lead {
    match c {
        '#' => Lead::Pound,
        '(' => Lead::ListOpen,
        '\'' => Lead::Quote(Quoting::Quote),
        '`' => Lead::Quote(Quoting::Quasiquote),
        ',' => Lead::Unquote,
        '+' | '-' => Lead::Sign,
        '"' => Lead::StringOpen,
        c if is_digit(c) => Lead::Digit,
        _ => Lead::Other,
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

// Whitespace also ends a symbol.
fn is_symbol_delimiter(c: char) -> bool {
    matches!(c, '\'' | ')' | '(' | ',' | '@')
}

/// Parse `text`, which must hold exactly one expression (plus
/// whitespace and comments). `name` is the scope label for error
/// messages.
pub fn parse(text: &str, name: &str) -> PResult<Value> {
    parse_with(text, name, &DEFAULT_SETTINGS)
}

/// Same as `parse` with `DEFAULT_SCOPE_NAME` as the label.
pub fn parse_unnamed(text: &str) -> PResult<Value> {
    parse(text, DEFAULT_SCOPE_NAME)
}

pub fn parse_with(text: &str, name: &str, settings: &Settings)
                  -> PResult<Value> {
    Parser::new(text, name, settings).parse()
}

/// Parser state for a single `parse` call.
pub struct Parser<'s> {
    cursor: Cursor<'s>,
    name: KString,
    depth_fuel: u32,
}

impl<'s> Parser<'s> {
    pub fn new(text: &'s str, name: &str, settings: &Settings) -> Parser<'s> {
        Parser {
            cursor: Cursor::new(text),
            name: KString::from_ref(name),
            depth_fuel: settings.depth_fuel,
        }
    }

    /// Parse the one expression, then require that only whitespace
    /// and comments follow it.
    pub fn parse(mut self) -> PResult<Value> {
        debug!("parsing {} ({} bytes)", self.name, self.cursor.len());
        let expr = self.parse_expr(self.depth_fuel)?;
        self.skip_all();
        if self.cursor.has_more() {
            return self.fail(ParseError::TrailingContent(Found(self.cursor.peek())))
        }
        debug!("parsed {} up to line {}", self.name, self.cursor.line());
        Ok(expr)
    }

    fn fail<T>(&self, err: ParseError) -> PResult<T> {
        Err(err.at(&self.name, self.cursor.line()))
    }

    fn descend(&self, fuel: u32) -> PResult<u32> {
        if fuel == 0 {
            self.fail(ParseError::NestingTooDeep)
        } else {
            Ok(fuel - 1)
        }
    }

    fn parse_expr(&mut self, fuel: u32) -> PResult<Value> {
        self.skip_all();
        let c = match self.cursor.peek() {
            Some(c) => c,
            None => return self.fail(ParseError::NothingToParse)
        };
        let lead = classify(c);
        trace!("{}:{} {:?} at {:?}", self.name, self.cursor.line(), lead, c);
        match lead {
            Lead::Pound => self.parse_pound(),
            Lead::ListOpen => self.parse_list(fuel),
            Lead::Quote(q) => self.parse_quote(q, fuel),
            Lead::Unquote => self.parse_unquote(fuel),
            Lead::Sign => {
                // `-3` is a number, `-`, `+` and `-foo` are symbols
                if self.cursor.peek_at(1).map_or(false, is_digit) {
                    self.parse_number()
                } else {
                    self.parse_symbol()
                }
            }
            Lead::StringOpen => self.parse_string(),
            Lead::Digit => self.parse_number(),
            Lead::Other => self.parse_symbol(),
        }
    }

    // #t #f; #( would be a vector
    fn parse_pound(&mut self) -> PResult<Value> {
        match self.cursor.peek_at(1) {
            Some('t') => {
                self.cursor.advance_by(2);
                Ok(Value::boolean(true))
            }
            Some('f') => {
                self.cursor.advance_by(2);
                Ok(Value::boolean(false))
            }
            Some('(') => self.fail(ParseError::VectorUnsupported),
            c => self.fail(ParseError::InvalidHashToken(Found(c))),
        }
    }

    /// `sign? unum ('/' unum)? (sign unum? 'i')?`
    fn parse_number(&mut self) -> PResult<Value> {
        let negative = self.cursor.try_consume('-');
        self.cursor.try_consume('+');

        let mut num = match self.parse_unum()? {
            Some(n) => n,
            None => return self.fail(ParseError::InvalidNumber)
        };
        if self.cursor.try_consume('/') {
            let denom = match self.parse_unum()? {
                Some(n) => n,
                None => return self.fail(ParseError::MissingDenominator)
            };
            if denom.is_zero() {
                return self.fail(ParseError::DivisionByZero)
            }
            num = Number::Real(num.to_f64() / denom.to_f64());
        }
        if let Some('+' | '-') = self.cursor.peek() {
            let imag_negative = self.cursor.try_consume('-');
            self.cursor.try_consume('+');
            let magnitude = self.parse_unum()?.unwrap_or_else(|| Number::from(1i64));
            if !self.cursor.try_consume('i') {
                return self.fail(ParseError::MissingImaginaryUnit(
                    Found(self.cursor.peek())))
            }
            if !magnitude.is_zero() {
                let im = magnitude.to_f64();
                num = Number::Complex(Complex64::new(
                    num.to_f64(),
                    if imag_negative { -im } else { im }));
            }
        }
        // The leading sign applies to the whole value, imaginary part
        // included.
        Ok(Value::from(if negative { -num } else { num }))
    }

    /// `digit* ('.' digit*)?`; `None` if nothing was consumed.
    fn parse_unum(&mut self) -> PResult<Option<Number>> {
        let start = self.cursor.position();
        self.skip_digits();
        let is_real = self.cursor.try_consume('.');
        self.skip_digits();
        let s = self.cursor.since(start);
        if s.is_empty() {
            return Ok(None)
        }
        if is_real {
            match s.parse::<f64>() {
                Ok(x) => Ok(Some(Number::Real(x))),
                // only a lone "."
                Err(_) => self.fail(ParseError::InvalidNumber),
            }
        } else {
            match s.parse::<BigInt>() {
                Ok(n) => Ok(Some(Number::Integer(n))),
                Err(_) => self.fail(ParseError::InvalidNumber),
            }
        }
    }

    fn skip_digits(&mut self) {
        while self.cursor.peek().map_or(false, is_digit) {
            self.cursor.advance()
        }
    }

    /// `()`, `(a b c)`, `(a b . c)`. The items are collected first,
    /// then folded right to left into pairs ending in `()` or the
    /// dotted tail.
    fn parse_list(&mut self, fuel: u32) -> PResult<Value> {
        let fuel = self.descend(fuel)?;
        self.cursor.try_consume('(');
        let mut items = Vec::new();
        let mut tail = Value::Nil;
        while self.cursor.has_more() {
            self.skip_all();
            match self.cursor.peek() {
                None | Some(')') => break,
                // `..` and `...` start symbols
                Some('.') if self.cursor.peek_at(1) != Some('.') => {
                    if items.is_empty() {
                        return self.fail(ParseError::DotWithoutPrecedingItem)
                    }
                    self.cursor.advance();
                    self.skip_all();
                    if self.cursor.peek() == Some(')') {
                        return self.fail(ParseError::MissingItemAfterDot)
                    }
                    tail = self.parse_expr(fuel)?;
                    self.skip_all();
                    break
                }
                _ => items.push(self.parse_expr(fuel)?),
            }
        }
        if !self.cursor.try_consume(')') {
            return self.fail(ParseError::UnclosedList(Found(self.cursor.peek())))
        }
        Ok(improper_list(items, tail))
    }

    fn parse_quote(&mut self, quoting: Quoting, fuel: u32) -> PResult<Value> {
        let fuel = self.descend(fuel)?;
        self.cursor.advance();
        Ok(quoting.wrap(self.parse_expr(fuel)?))
    }

    // ,x ,@x
    fn parse_unquote(&mut self, fuel: u32) -> PResult<Value> {
        let fuel = self.descend(fuel)?;
        self.cursor.try_consume(',');
        let quoting =
            if self.cursor.try_consume('@') {
                Quoting::UnquoteSplicing
            } else {
                Quoting::Unquote
            };
        Ok(quoting.wrap(self.parse_expr(fuel)?))
    }

    // The first character is taken unconditionally.
    fn parse_symbol(&mut self) -> PResult<Value> {
        let start = self.cursor.position();
        self.cursor.advance();
        while let Some(c) = self.cursor.peek() {
            if c.is_whitespace() || is_symbol_delimiter(c) {
                break
            }
            self.cursor.advance();
        }
        Ok(Value::Atom(Atom::Symbol(Symbol::new(self.cursor.since(start)))))
    }

    /// Escapes outside of `\"`, `\\`, `\n` and `\t` are kept
    /// verbatim, backslash included.
    fn parse_string(&mut self) -> PResult<Value> {
        self.cursor.try_consume('"');
        let mut out = String::new();
        let mut start = self.cursor.position();
        while let Some(c) = self.cursor.peek() {
            if c == '"' {
                break
            }
            if c == '\\' {
                let backslash = self.cursor.position();
                self.cursor.advance();
                if let Some(replacement) = self.cursor.peek().and_then(escape2char) {
                    out.push_str(self.cursor.slice(start, backslash));
                    out.push(replacement);
                    self.cursor.advance();
                    start = self.cursor.position();
                }
            } else {
                self.cursor.advance();
            }
        }
        out.push_str(self.cursor.since(start));
        if !self.cursor.try_consume('"') {
            return self.fail(ParseError::UnterminatedString)
        }
        Ok(Value::Atom(Atom::String(KString::from_string(out))))
    }

    /// Skip whitespace and `;` line comments.
    fn skip_all(&mut self) {
        loop {
            self.skip_whitespace();
            if self.cursor.peek() == Some(';') {
                self.skip_comment()
            } else {
                break
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while self.cursor.peek().map_or(false, char::is_whitespace) {
            self.cursor.advance()
        }
    }

    // up to and including the newline
    fn skip_comment(&mut self) {
        while let Some(c) = self.cursor.peek() {
            self.cursor.advance();
            if c == '\n' {
                break
            }
        }
    }
}
