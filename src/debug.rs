// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Utilities for debugging the reader: `dump` spells out what kind
//! of value each node is, so that e.g. the string "a" and the symbol
//! `a`, or `()` and the symbol `nil`, can be told apart in printed
//! output.

use crate::number::Number;
use crate::value::{Atom, Value, list, symbol};

fn listn(
    symname: &str,
    vals: impl Iterator<Item=Value>,
) -> Value {
    let mut vals2: Vec<Value> = Vec::new();
    vals2.push(symbol(symname));
    vals2.extend(vals);
    list(vals2)
}

fn chars2codes(s: &str) -> impl Iterator<Item=Value> + '_ {
    s.chars().map(|c| Value::integer(c as i64))
}

fn dump_number(n: &Number) -> Value {
    match n {
        Number::Integer(_) => listn("integer", std::iter::once(Value::from(n.clone()))),
        Number::Real(x) => listn("real", std::iter::once(Value::real(*x))),
        Number::Complex(c) => listn("complex", [Value::real(c.re), Value::real(c.im)]
                                    .into_iter()),
    }
}

pub fn dump(v: &Value) -> Value {
    match v {
        Value::Nil => symbol("nil"),
        Value::Atom(a) => match a {
            Atom::Bool(b) => symbol(if *b { "true" } else { "false" }),
            Atom::String(s) => listn("string", chars2codes(s)),
            Atom::Symbol(s) => listn("symbol", chars2codes(s.name())),
            Atom::Number(n) => dump_number(n),
        }
        Value::Pair(_) => {
            let items = v.iter().map(dump);
            match v.tail() {
                Value::Nil => listn("list", items),
                tail => {
                    let tail = dump(tail);
                    listn("improper-list", items.chain(std::iter::once(tail)))
                }
            }
        }
    }
}
