// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Runtime data types representing an S-expression value.

//! [Atom](Atom) holds the non-compound values; [Value](Value) adds
//! the empty list and pairs. Lists are chains of [Pair](Pair)s ending
//! in [Value::Nil](Value::Nil), or in some other value for improper
//! (dotted) lists.

use crate::number::Number;
use kstring::KString;
use std::fmt::Write;

/// An identifier. Two symbols are equal iff their names are.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(KString);

impl Symbol {
    pub fn new(name: &str) -> Symbol {
        Symbol(KString::from_ref(name))
    }

    /// No allocation.
    pub fn from_static(name: &'static str) -> Symbol {
        Symbol(KString::from_static(name))
    }

    pub fn name(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        f.write_str(self.name())
    }
}

/// The reader's quoting sugar: `'x`, `` `x ``, `,x` and `,@x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quoting {
    Quote,
    Quasiquote,
    Unquote,
    UnquoteSplicing,
}

impl Quoting {
    pub fn name(self) -> &'static str {
        match self {
            Quoting::Quote => "quote",
            Quoting::Quasiquote => "quasiquote",
            Quoting::Unquote => "unquote",
            Quoting::UnquoteSplicing => "unquote-slicing",
        }
    }

    pub fn symbol(self) -> Symbol {
        Symbol::from_static(self.name())
    }

    /// `(name x)`
    pub fn wrap(self, x: Value) -> Value {
        list2(Value::Atom(Atom::Symbol(self.symbol())), x)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Atom {
    Bool(bool),
    String(KString),
    Symbol(Symbol),
    Number(Number),
}

pub fn char2escape(c: char) -> Option<char> {
    match c {
        '"' => Some('"'),
        '\\' => Some('\\'),
        '\n' => Some('n'),
        '\t' => Some('t'),
        _ => None
    }
}

pub fn escape2char(c: char) -> Option<char> {
    match c {
        '"' => Some('"'),
        '\\' => Some('\\'),
        'n' => Some('\n'),
        't' => Some('\t'),
        _ => None
    }
}

fn fmt_string(f: &mut std::fmt::Formatter<'_>, s: &str)
              -> Result<(), std::fmt::Error> {
    f.write_char('"')?;
    for c in s.chars() {
        if let Some(e) = char2escape(c) {
            f.write_char('\\')?;
            f.write_char(e)?;
        } else {
            f.write_char(c)?;
        }
    }
    f.write_char('"')
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        match self {
            Atom::Bool(b) => f.write_str(if *b { "#t" } else { "#f" }),
            Atom::String(s) => fmt_string(f, s),
            Atom::Symbol(s) => f.write_str(s.name()),
            Atom::Number(n) => write!(f, "{}", n),
        }
    }
}

/// A parsed S-expression.
#[derive(Debug)]
pub enum Value {
    /// The empty list, `()`.
    Nil,
    Atom(Atom),
    Pair(Box<Pair>),
}

#[derive(Debug, Clone)]
pub struct Pair {
    pub first: Value,
    pub rest: Value,
}

// Unlink the rest chain iteratively, so that dropping a long list
// doesn't recurse once per element (`Clone` and `PartialEq` on
// `Value` likewise walk the chain in a loop).
impl Drop for Pair {
    fn drop(&mut self) {
        let mut rest = std::mem::replace(&mut self.rest, Value::Nil);
        while let Value::Pair(mut p) = rest {
            rest = std::mem::replace(&mut p.rest, Value::Nil);
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        let (mut a, mut b) = (self, other);
        loop {
            match (a, b) {
                (Value::Pair(p), Value::Pair(q)) => {
                    if p.first != q.first {
                        return false
                    }
                    a = &p.rest;
                    b = &q.rest;
                }
                (Value::Nil, Value::Nil) => return true,
                (Value::Atom(x), Value::Atom(y)) => return x == y,
                _ => return false
            }
        }
    }
}

impl Clone for Value {
    fn clone(&self) -> Value {
        match self {
            Value::Nil => Value::Nil,
            Value::Atom(a) => Value::Atom(a.clone()),
            Value::Pair(_) => improper_list(self.iter().cloned().collect(),
                                            self.tail().clone()),
        }
    }
}

impl From<Atom> for Value {
    fn from(a: Atom) -> Value {
        Value::Atom(a)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Value {
        Value::Atom(Atom::Number(n))
    }
}

impl Value {
    pub fn integer(n: i64) -> Value {
        Number::from(n).into()
    }

    pub fn real(x: f64) -> Value {
        Number::from(x).into()
    }

    pub fn string(s: &str) -> Value {
        Value::Atom(Atom::String(KString::from_ref(s)))
    }

    pub fn boolean(b: bool) -> Value {
        Value::Atom(Atom::Bool(b))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_pair(&self) -> Option<&Pair> {
        match self {
            Value::Pair(p) => Some(p.as_ref()),
            _ => None
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Value::Atom(Atom::Symbol(s)) => Some(s),
            _ => None
        }
    }

    /// The `first` of each pair along the rest chain.
    pub fn iter(&self) -> ListIter<'_> {
        ListIter { cur: self }
    }

    /// What the rest chain ends in: `Nil` for proper lists, the dotted
    /// tail for improper ones, `self` if not a pair at all.
    pub fn tail(&self) -> &Value {
        let mut cur = self;
        while let Value::Pair(p) = cur {
            cur = &p.rest;
        }
        cur
    }

    pub fn is_proper_list(&self) -> bool {
        self.tail().is_nil()
    }
}

pub struct ListIter<'t> {
    cur: &'t Value,
}

impl<'t> Iterator for ListIter<'t> {
    type Item = &'t Value;
    fn next(&mut self) -> Option<&'t Value> {
        match self.cur {
            Value::Pair(p) => {
                self.cur = &p.rest;
                Some(&p.first)
            }
            _ => None
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        match self {
            Value::Nil => f.write_str("()"),
            Value::Atom(a) => write!(f, "{}", a),
            Value::Pair(_) => {
                f.write_char('(')?;
                let mut cur = self;
                let mut first = true;
                loop {
                    match cur {
                        Value::Pair(p) => {
                            if !first {
                                f.write_char(' ')?;
                            }
                            write!(f, "{}", p.first)?;
                            first = false;
                            cur = &p.rest;
                        }
                        Value::Nil => break,
                        tail => {
                            f.write_str(" . ")?;
                            write!(f, "{}", tail)?;
                            break
                        }
                    }
                }
                f.write_char(')')
            }
        }
    }
}

/// Easily create a symbol
pub fn symbol(s: &str) -> Value {
    Value::Atom(Atom::Symbol(Symbol::new(s)))
}

pub fn cons(first: Value, rest: Value) -> Value {
    Value::Pair(Box::new(Pair { first, rest }))
}

/// Easily create a list with two entries
pub fn list2(a: Value, b: Value) -> Value {
    cons(a, cons(b, Value::Nil))
}

/// A proper list of the given values, `()` if empty.
pub fn list(vals: Vec<Value>) -> Value {
    improper_list(vals, Value::Nil)
}

/// Fold right to left: the last value's rest is `tail`.
pub fn improper_list(vals: Vec<Value>, tail: Value) -> Value {
    vals.into_iter().rfold(tail, |rest, first| cons(first, rest))
}
