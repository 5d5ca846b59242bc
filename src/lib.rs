// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reader for a small Scheme: turns source text into the
//! S-expression tree handed to the compiler.
//!
//! * `skime_reader::parse::parse` reads exactly one expression from a
//!   string; `skime_reader::read::read_file` does the same for a file.
//!
//! * The tree is a `value::Value`: the empty list, atoms (booleans,
//!   strings, symbols, numbers), or pairs. Quoting sugar (`'x`,
//!   `` `x ``, `,x`, `,@x`) is expanded into `(quote x)` etc.
//!
//! * Numbers are integers (arbitrary size), reals, or complex
//!   numbers. Rationals like `3/4` are read as reals.
//!
//! * Errors carry the scope label and line number; parsing stops at
//!   the first one.
//!
//! * `driver` holds the interfaces of the compiler and virtual
//!   machine that consume the tree, and the flow tying them together.
//!
//! Vector literals (`#(...)`) are recognized but rejected.

pub mod cursor;
pub mod debug;
pub mod driver;
pub mod number;
pub mod parse;
pub mod read;
pub mod settings;
pub mod value;
