// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::parse::{parse, ParseErrorWithLine};
use crate::value::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("{0}")]
    PE(#[from] ParseErrorWithLine),
    #[error("{path:?}: {err}")]
    IO {
        path: PathBuf,
        err: std::io::Error,
    },
}

/// Read and parse the single expression in the file at `path`. The
/// path is used as the scope label in error messages.
pub fn read_file(path: &Path) -> Result<Value, ReadError> {
    let text = std::fs::read_to_string(path).map_err(|err| ReadError::IO {
        path: path.to_path_buf(),
        err,
    })?;
    Ok(parse(&text, &path.to_string_lossy())?)
}

pub fn write_all<'t>(
    out: impl Write,
    vals: impl IntoIterator<Item = &'t Value>
) -> Result<(), std::io::Error> {
    let mut out = out; // for `File`
    for v in vals.into_iter() {
        writeln!(out, "{}", v)?;
    }
    out.flush()
}

pub fn write_file<'t>(path: &Path, vals: impl IntoIterator<Item = &'t Value>)
                      -> Result<(), std::io::Error> {
    write_all(std::fs::File::create(path)?, vals)
}
