// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use skime_reader::debug::dump;
use skime_reader::read::{read_file, write_all};
use clap::Parser as ClapParser;
use std::io::{stdout, BufWriter};
use std::path::PathBuf;
use anyhow::Result;

#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Print the parsed expression
    #[clap(long, value_parser)]
    print: bool,
    /// Print the parsed expression with every node's kind spelled out
    #[clap(short, long, value_parser)]
    dump: bool,
    /// Path to the input file
    #[clap(value_parser, required(true))]
    input_path: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .init();
    let args = Args::parse();

    let v = read_file(&args.input_path)?;
    if args.print {
        write_all(BufWriter::new(stdout()), [&v])?;
    }
    if args.dump {
        write_all(BufWriter::new(stdout()), [&dump(&v)])?;
    }
    if !(args.print || args.dump) {
        log::info!("{:?} parsed fine", args.input_path);
    }
    Ok(())
}
