use anyhow::Result;
use num::BigInt;
use num::complex::Complex64;
use skime_reader::number::Number;
use skime_reader::parse::{parse, parse_unnamed};
use skime_reader::value::{Atom, Value, cons, improper_list, list, list2, symbol};

fn int(n: i64) -> Value {
    Value::integer(n)
}

fn number(v: &Value) -> &Number {
    match v {
        Value::Atom(Atom::Number(n)) => n,
        _ => panic!("not a number: {}", v)
    }
}

#[test]
fn whitespace_and_comments_are_ignored() -> Result<()> {
    let plain = parse("(a (b c) 'd)", "t")?;
    let filled = parse("\n\n  ; leading\n(a ;; after a\n\n   (b\tc) ; inner\n\n ;x\n 'd)\n; trailing", "t")?;
    assert_eq!(plain, filled);
    assert_eq!(parse("  42  ; the answer", "t")?, int(42));
    Ok(())
}

#[test]
fn proper_list() -> Result<()> {
    let v = parse("(1 2 3)", "t")?;
    assert_eq!(v, cons(int(1), cons(int(2), cons(int(3), Value::Nil))));
    assert_eq!(v, list(vec![int(1), int(2), int(3)]));
    assert!(v.is_proper_list());
    assert_eq!(v.iter().count(), 3);
    Ok(())
}

#[test]
fn improper_lists() -> Result<()> {
    let v = parse("(1 . 2)", "t")?;
    let p = v.as_pair().expect("pair");
    assert_eq!(p.first, int(1));
    assert_eq!(p.rest, int(2));

    let v = parse("(1 2 . 3)", "t")?;
    assert_eq!(v, cons(int(1), cons(int(2), int(3))));
    assert_eq!(v.tail(), &int(3));
    assert!(!v.is_proper_list());

    // dotting onto a list just continues it
    assert_eq!(parse("(a . (b c))", "t")?, parse("(a b c)", "t")?);
    // a dot directly before a digit still separates the tail
    assert_eq!(parse("(1 .2)", "t")?, cons(int(1), int(2)));
    assert_eq!(parse("(1 . 2 ; tail\n )", "t")?, cons(int(1), int(2)));
    Ok(())
}

#[test]
fn empty_list() -> Result<()> {
    assert_eq!(parse("()", "t")?, Value::Nil);
    assert_eq!(parse("(  ; nothing\n )", "t")?, Value::Nil);
    assert_ne!(parse("()", "t")?, symbol("nil"));
    assert_ne!(parse("()", "t")?, Value::boolean(false));
    assert_eq!(parse("(())", "t")?, list(vec![Value::Nil]));
    assert_eq!(parse("(() . ())", "t")?, list(vec![Value::Nil]));
    Ok(())
}

#[test]
fn dots_in_symbols() -> Result<()> {
    assert_eq!(parse("(a ... b)", "t")?,
               list(vec![symbol("a"), symbol("..."), symbol("b")]));
    assert_eq!(parse("(a ..)", "t")?, list(vec![symbol("a"), symbol("..")]));
    Ok(())
}

#[test]
fn quoting() -> Result<()> {
    assert_eq!(parse("'a", "t")?, parse("(quote a)", "t")?);
    assert_eq!(parse("`(a ,b)", "t")?, parse("(quasiquote (a (unquote b)))", "t")?);
    assert_eq!(parse(",@x", "t")?, list2(symbol("unquote-slicing"), symbol("x")));
    assert_eq!(parse("'()", "t")?, list2(symbol("quote"), Value::Nil));
    assert_eq!(parse("''a", "t")?,
               list2(symbol("quote"), list2(symbol("quote"), symbol("a"))));
    assert_eq!(parse("' ; spaced\n a", "t")?, parse("'a", "t")?);
    Ok(())
}

#[test]
fn integers() -> Result<()> {
    assert_eq!(parse("3", "t")?, int(3));
    assert_eq!(parse("-5", "t")?, int(-5));
    assert_eq!(parse("+5", "t")?, int(5));
    assert_eq!(parse("007", "t")?, int(7));
    let big = parse("123456789012345678901234567890", "t")?;
    assert_eq!(number(&big),
               &Number::Integer("123456789012345678901234567890".parse::<BigInt>()?));
    Ok(())
}

#[test]
fn reals_and_rationals() -> Result<()> {
    assert_eq!(parse("3.5", "t")?, Value::real(3.5));
    assert_eq!(parse("3.", "t")?, Value::real(3.0));
    assert_eq!(parse("-0.25", "t")?, Value::real(-0.25));
    assert_eq!(parse("3/4", "t")?, Value::real(0.75));
    assert_eq!(parse("-3/4", "t")?, Value::real(-0.75));
    assert_eq!(parse("1.5/3", "t")?, Value::real(0.5));
    // a whole quotient is still a real
    assert_eq!(parse("4/2", "t")?, Value::real(2.0));
    Ok(())
}

#[test]
fn complex_numbers() -> Result<()> {
    let c = |re, im| Value::from(Number::Complex(Complex64::new(re, im)));
    assert_eq!(parse("1+2i", "t")?, c(1.0, 2.0));
    assert_eq!(parse("1-2i", "t")?, c(1.0, -2.0));
    assert_eq!(parse("1+i", "t")?, c(1.0, 1.0));
    assert_eq!(parse("1-i", "t")?, c(1.0, -1.0));
    assert_eq!(parse("2.5+0.5i", "t")?, c(2.5, 0.5));
    assert_eq!(parse("1/2+3i", "t")?, c(0.5, 3.0));
    // a zero imaginary part leaves the real part alone
    assert_eq!(parse("1+0i", "t")?, int(1));
    assert_eq!(parse("1.5-0.0i", "t")?, Value::real(1.5));
    // the leading sign negates the whole number
    assert_eq!(parse("-1+2i", "t")?, c(-1.0, -2.0));
    Ok(())
}

#[test]
fn signs_alone_are_symbols() -> Result<()> {
    assert_eq!(parse("+", "t")?, symbol("+"));
    assert_eq!(parse("-", "t")?, symbol("-"));
    assert_eq!(parse("-foo", "t")?, symbol("-foo"));
    assert_eq!(parse("(- 3)", "t")?, list(vec![symbol("-"), int(3)]));
    assert_eq!(parse("(-3)", "t")?, list(vec![int(-3)]));
    Ok(())
}

#[test]
fn booleans() -> Result<()> {
    assert_eq!(parse("#t", "t")?, Value::boolean(true));
    assert_eq!(parse("#f", "t")?, Value::boolean(false));
    assert_eq!(parse("(#t #f)", "t")?,
               list(vec![Value::boolean(true), Value::boolean(false)]));
    Ok(())
}

#[test]
fn strings() -> Result<()> {
    assert_eq!(parse("\"a\\nb\"", "t")?, Value::string("a\nb"));
    assert_eq!(parse("\"a\\qb\"", "t")?, Value::string("a\\qb"));
    assert_eq!(parse("\"\"", "t")?, Value::string(""));
    assert_eq!(parse("\"tab\\there\"", "t")?, Value::string("tab\there"));
    assert_eq!(parse("\"say \\\"hi\\\"\"", "t")?, Value::string("say \"hi\""));
    assert_eq!(parse("\"back\\\\slash\"", "t")?, Value::string("back\\slash"));
    assert_eq!(parse("\"two\nlines\"", "t")?, Value::string("two\nlines"));
    assert_eq!(parse("\"(not a list)\"", "t")?, Value::string("(not a list)"));
    assert_eq!(parse("\"unicode \u{3bb}\"", "t")?, Value::string("unicode \u{3bb}"));
    assert_ne!(parse("\"a\"", "t")?, symbol("a"));
    Ok(())
}

#[test]
fn symbol_boundaries() -> Result<()> {
    assert_eq!(parse("hello-world!", "t")?, symbol("hello-world!"));
    assert_eq!(parse("(a'b)", "t")?,
               list(vec![symbol("a"), list2(symbol("quote"), symbol("b"))]));
    assert_eq!(parse("(a,b)", "t")?,
               list(vec![symbol("a"), list2(symbol("unquote"), symbol("b"))]));
    assert_eq!(parse("(f(x))", "t")?,
               list(vec![symbol("f"), list(vec![symbol("x")])]));
    // `"` and `;` don't end a symbol
    assert_eq!(parse("a\"b", "t")?, symbol("a\"b"));
    assert_eq!(parse("a;b", "t")?, symbol("a;b"));
    assert_eq!(parse("\u{3bb}x", "t")?, symbol("\u{3bb}x"));
    Ok(())
}

#[test]
fn numbers_end_at_non_digits() -> Result<()> {
    assert_eq!(parse("(3abc)", "t")?, list(vec![int(3), symbol("abc")]));
    Ok(())
}

#[test]
fn unnamed_scope() {
    let e = parse_unnamed("(").unwrap_err();
    assert_eq!(e.name.as_str(), "__unknown__");
}

#[test]
fn long_list() -> Result<()> {
    let n = 100_000;
    let text = format!("({})", vec!["x"; n].join(" "));
    let v = parse(&text, "t")?;
    assert_eq!(v.iter().count(), n);
    assert_eq!(v.to_string(), text);
    assert_eq!(v, v.clone());
    assert_eq!(improper_list(vec![int(1)], int(2)), cons(int(1), int(2)));
    Ok(())
}

#[test]
fn oversized_integer_in_rational() -> Result<()> {
    let huge = "9".repeat(400);
    let n: BigInt = huge.parse()?;
    assert_eq!(Number::Integer(n).to_f64(), f64::INFINITY);
    let v = parse(&format!("{}/2", huge), "t")?;
    assert_eq!(number(&v), &Number::Real(f64::INFINITY));
    assert_eq!(v.to_string(), "+inf.0");
    Ok(())
}
