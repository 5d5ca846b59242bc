// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The pipeline downstream of the parser: a compiler turning a parsed
//! tree into a procedure, and a machine running it. Only the
//! interfaces live here; implementations are supplied by the caller.

use crate::parse::parse;
use crate::value::Value;
use anyhow::{Context, Result};
use log::debug;
use std::fmt::Display;
use std::path::Path;

/// A compiled procedure.
pub trait Procedure {
    /// The bytecode, in whatever textual form the compiler chooses.
    fn bytecode(&self) -> String;
    /// Human readable listing of the bytecode.
    fn disasm(&self) -> String;
}

pub trait Compiler {
    /// Environment handle the code is compiled against.
    type Env;
    type Proc: Procedure;
    type Error: std::error::Error + Send + Sync + 'static;

    fn compile(&mut self, ast: Value, env: &Self::Env)
               -> Result<Self::Proc, Self::Error>;
}

pub trait Machine<P> {
    type Env;
    type Output: Display;
    type Error: std::error::Error + Send + Sync + 'static;

    fn env(&self) -> &Self::Env;
    fn run(&mut self, procedure: &P) -> Result<Self::Output, Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Compile and run, report the result.
    Run,
    /// Stop after compilation, report bytecode and disassembly.
    CompileOnly,
}

/// Parse, compile and (depending on `mode`) run `text`; returns the
/// report to be printed.
pub fn run_source<C, M>(
    text: &str,
    name: &str,
    compiler: &mut C,
    machine: &mut M,
    mode: Mode,
) -> Result<String>
where
    C: Compiler,
    M: Machine<C::Proc, Env = C::Env>,
{
    let ast = parse(text, name)?;
    let procedure = compiler.compile(ast, machine.env())
        .with_context(|| format!("compiling {}", name))?;
    debug!("compiled {}", name);
    match mode {
        Mode::Run => {
            let result = machine.run(&procedure)
                .with_context(|| format!("running {}", name))?;
            Ok(format!("Result is {}", result))
        }
        Mode::CompileOnly => {
            Ok(format!("Bytecode:\n{}\nDisasm run:\n{}\n",
                       procedure.bytecode(),
                       procedure.disasm()))
        }
    }
}

pub fn run_file<C, M>(
    path: &Path,
    compiler: &mut C,
    machine: &mut M,
    mode: Mode,
) -> Result<String>
where
    C: Compiler,
    M: Machine<C::Proc, Env = C::Env>,
{
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {:?}", path))?;
    run_source(&text, &path.to_string_lossy(), compiler, machine, mode)
}
