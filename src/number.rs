// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use num::complex::Complex64;
use num::{BigInt, ToPrimitive, Zero};
use std::fmt::Write;

/// Numeric literal values. Rationals are read as their `Real`
/// quotient; there is no exact fraction variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Integer(BigInt),
    Real(f64),
    Complex(Complex64),
}

impl Number {
    /// The real value, or the real part for complex numbers. Integers
    /// too large for f64 become infinite.
    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Integer(n) => n.to_f64().unwrap_or(f64::INFINITY),
            Number::Real(x) => *x,
            Number::Complex(c) => c.re,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Number::Integer(n) => n.is_zero(),
            Number::Real(x) => *x == 0.0,
            Number::Complex(c) => c.is_zero(),
        }
    }
}

impl std::ops::Neg for Number {
    type Output = Number;
    fn neg(self) -> Number {
        match self {
            Number::Integer(n) => Number::Integer(-n),
            Number::Real(x) => Number::Real(-x),
            Number::Complex(c) => Number::Complex(-c),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Number {
        Number::Integer(BigInt::from(n))
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Number {
        Number::Real(x)
    }
}

// Plain decimal notation without exponent, since the reader has no
// exponents; always with a '.' so that it reads back as a real.
// x must not be negative.
fn fmt_magnitude(f: &mut std::fmt::Formatter<'_>, x: f64)
                 -> Result<(), std::fmt::Error> {
    if x.is_nan() {
        f.write_str("nan.0")
    } else if x.is_infinite() {
        f.write_str("inf.0")
    } else {
        let s = format!("{}", x);
        f.write_str(&s)?;
        if !s.contains('.') {
            f.write_str(".0")?;
        }
        Ok(())
    }
}

fn fmt_real(f: &mut std::fmt::Formatter<'_>, x: f64)
            -> Result<(), std::fmt::Error> {
    if x.is_nan() {
        f.write_str("+nan.0")
    } else if x.is_sign_negative() {
        f.write_char('-')?;
        fmt_magnitude(f, -x)
    } else if x.is_infinite() {
        f.write_str("+inf.0")
    } else {
        fmt_magnitude(f, x)
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        match self {
            Number::Integer(n) => f.write_fmt(format_args!("{}", n)),
            Number::Real(x) => fmt_real(f, *x),
            Number::Complex(c) => {
                // A leading '-' negates the imaginary part as well when
                // read, so flip it in advance.
                let (re, im) =
                    if c.re.is_sign_negative() {
                        f.write_char('-')?;
                        (-c.re, -c.im)
                    } else {
                        (c.re, c.im)
                    };
                fmt_magnitude(f, re)?;
                f.write_char(if im.is_sign_negative() { '-' } else { '+' })?;
                fmt_magnitude(f, im.abs())?;
                f.write_char('i')
            }
        }
    }
}
