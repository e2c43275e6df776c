//! Floating-point scanning.
//!
//! The scanner collects sign, digit run, at most one radix point, and an
//! optional exponent into a small buffer normalized to `'.'`, then hands the
//! final conversion to the locale's string-to-float shim so rounding matches
//! the platform parser. `inf`, `infinity`, and `nan` (any case) are accepted
//! by name, and the `a` specifier additionally admits `0x` hex mantissas
//! with a binary (`p`) exponent.

use alloc::string::String;

use crate::{
    error::{Error, ErrorKind, Result},
    format::{FloatFormat, Specifier, TypeSpec},
    locale::Locale,
    range::{putback_point, read_point, Cursor},
};

use super::skip_space;

mod sealed {
    pub trait Sealed {}
}

/// Float types the scanners can produce; sealed.
pub trait Float: Copy + sealed::Sealed {
    #[doc(hidden)]
    fn from_f64(v: f64) -> Self;
}

impl sealed::Sealed for f32 {}
impl Float for f32 {
    fn from_f64(v: f64) -> Self {
        v as f32
    }
}

impl sealed::Sealed for f64 {}
impl Float for f64 {
    fn from_f64(v: f64) -> Self {
        v
    }
}

pub(crate) struct FloatRules {
    pub decimal_point: char,
    pub allow_hex: bool,
    pub skip_space: bool,
}

impl FloatRules {
    pub(crate) fn from_spec<L: Locale + ?Sized>(spec: &Specifier, loc: &L) -> Result<Self> {
        let format = match &spec.ty {
            TypeSpec::Default => None,
            TypeSpec::Float(format) => Some(*format),
            _ => {
                return Err(Error::new(
                    ErrorKind::InvalidFormatString,
                    "specifier does not apply to a float argument",
                ))
            }
        };
        Ok(Self {
            decimal_point: if spec.localized { loc.decimal_point() } else { '.' },
            allow_hex: format == Some(FloatFormat::Hex),
            skip_space: true,
        })
    }
}

fn invalid(msg: &'static str) -> Error {
    Error::new(ErrorKind::InvalidScannedValue, msg)
}

/// Reads one code point, mapping end-of-range to `None`.
fn next_point<C: Cursor + ?Sized>(cur: &mut C) -> Result<Option<char>> {
    match read_point(cur) {
        Ok(ch) => Ok(Some(ch)),
        Err(err) if err.kind() == ErrorKind::EndOfRange => Ok(None),
        Err(err) => Err(err),
    }
}

pub(crate) fn scan_float<T, C, L>(cur: &mut C, loc: &L, rules: &FloatRules) -> Result<T>
where
    T: Float,
    C: Cursor + ?Sized,
    L: Locale + ?Sized,
{
    if rules.skip_space {
        skip_space(cur, loc);
    }

    let mut repr = String::new();
    let mut sign = None;
    match next_point(cur)? {
        // Empty input is a missing value, not an end-of-range condition.
        None => return Err(invalid("expected a floating-point value")),
        Some(ch @ ('-' | '+')) => sign = Some(ch),
        Some(ch) => putback_point(cur, ch),
    }
    let negative = sign == Some('-');

    if let Some(named) = scan_named(cur)? {
        let v = if negative { -named } else { named };
        return Ok(T::from_f64(v));
    }

    if rules.allow_hex {
        if let Some(value) = scan_hex_mantissa(cur, loc)? {
            let v = if negative { -value } else { value };
            return Ok(T::from_f64(v));
        }
    }

    let mut digits = 0;
    digits += push_digits(cur, loc, &mut repr)?;
    let took_point = consume_if(cur, |ch| ch == rules.decimal_point)?;
    if took_point {
        repr.push('.');
        digits += push_digits(cur, loc, &mut repr)?;
    }
    if digits == 0 {
        // Nothing numeric; undo whatever was taken.
        if took_point {
            putback_point(cur, rules.decimal_point);
        }
        if let Some(ch) = sign {
            putback_point(cur, ch);
        }
        return Err(invalid("expected a floating-point value"));
    }

    // Exponent is only part of the value when digits follow it.
    if let Some(exp) = next_point(cur)? {
        if exp == 'e' || exp == 'E' {
            let mut tail = String::new();
            tail.push('e');
            let mut sign = None;
            if let Some(ch) = next_point(cur)? {
                if ch == '+' || ch == '-' {
                    sign = Some(ch);
                    tail.push(ch);
                } else {
                    putback_point(cur, ch);
                }
            }
            let exp_digits = push_digits(cur, loc, &mut tail)?;
            if exp_digits > 0 {
                repr.push_str(&tail);
            } else {
                if let Some(ch) = sign {
                    putback_point(cur, ch);
                }
                putback_point(cur, exp);
            }
        } else {
            putback_point(cur, exp);
        }
    }

    let parsed = loc
        .parse_float_repr(&repr)
        .ok_or_else(|| invalid("malformed floating-point value"))?;
    Ok(T::from_f64(if negative { -parsed } else { parsed }))
}

/// Appends base-10 digits to `out`, returning how many were taken.
fn push_digits<C, L>(cur: &mut C, loc: &L, out: &mut String) -> Result<usize>
where
    C: Cursor + ?Sized,
    L: Locale + ?Sized,
{
    let mut n = 0;
    while let Some(ch) = next_point(cur)? {
        if loc.is_digit(ch, 10) {
            out.push(ch);
            n += 1;
        } else {
            putback_point(cur, ch);
            break;
        }
    }
    Ok(n)
}

fn consume_if<C: Cursor + ?Sized>(cur: &mut C, pred: impl Fn(char) -> bool) -> Result<bool> {
    match next_point(cur)? {
        Some(ch) if pred(ch) => Ok(true),
        Some(ch) => {
            putback_point(cur, ch);
            Ok(false)
        }
        None => Ok(false),
    }
}

/// Matches `inf`, `infinity`, or `nan`, case-insensitively. Consumed
/// characters are put back when nothing matches.
fn scan_named<C: Cursor + ?Sized>(cur: &mut C) -> Result<Option<f64>> {
    let mut taken = ['\0'; 8];
    let mut len = 0;
    let mut matched: Option<(f64, usize)> = None;

    while len < taken.len() {
        let Some(ch) = next_point(cur)? else { break };
        taken[len] = ch;
        len += 1;
        let lower: String = taken[..len].iter().flat_map(|c| c.to_lowercase()).collect();
        if lower == "nan" {
            matched = Some((f64::NAN, len));
            break;
        }
        if lower == "inf" {
            // Keep going: "infinity" is the longer match.
            matched = Some((f64::INFINITY, len));
        } else if lower == "infinity" {
            matched = Some((f64::INFINITY, len));
            break;
        }
        if !"infinity".starts_with(lower.as_str()) && !"nan".starts_with(lower.as_str()) {
            break;
        }
    }

    match matched {
        Some((value, used)) => {
            for &ch in taken[used..len].iter().rev() {
                putback_point(cur, ch);
            }
            Ok(Some(value))
        }
        None => {
            for &ch in taken[..len].iter().rev() {
                putback_point(cur, ch);
            }
            Ok(None)
        }
    }
}

/// Parses `0x…[.…][p±…]`; returns `None` (nothing consumed) when the input
/// does not open with a hex prefix.
fn scan_hex_mantissa<C, L>(cur: &mut C, loc: &L) -> Result<Option<f64>>
where
    C: Cursor + ?Sized,
    L: Locale + ?Sized,
{
    if !consume_if(cur, |ch| ch == '0')? {
        return Ok(None);
    }
    if !consume_if(cur, |ch| ch == 'x' || ch == 'X')? {
        putback_point(cur, '0');
        return Ok(None);
    }

    let mut value = 0.0f64;
    let mut digits = 0;
    while let Some(ch) = next_point(cur)? {
        if let Some(d) = ch.to_digit(16) {
            value = value * 16.0 + f64::from(d);
            digits += 1;
        } else {
            putback_point(cur, ch);
            break;
        }
    }
    if consume_if(cur, |ch| ch == '.')? {
        let mut scale = 1.0 / 16.0;
        while let Some(ch) = next_point(cur)? {
            if let Some(d) = ch.to_digit(16) {
                value += f64::from(d) * scale;
                scale /= 16.0;
                digits += 1;
            } else {
                putback_point(cur, ch);
                break;
            }
        }
    }
    if digits == 0 {
        return Err(invalid("expected hex digits after '0x'"));
    }
    if consume_if(cur, |ch| ch == 'p' || ch == 'P')? {
        let mut exp_negative = false;
        if let Some(ch) = next_point(cur)? {
            match ch {
                '-' => exp_negative = true,
                '+' => {}
                other => putback_point(cur, other),
            }
        }
        let mut exp = 0i32;
        let mut exp_digits = 0;
        while let Some(ch) = next_point(cur)? {
            if loc.is_digit(ch, 10) {
                exp = exp.saturating_mul(10).saturating_add(ch.to_digit(10).unwrap() as i32);
                exp_digits += 1;
            } else {
                putback_point(cur, ch);
                break;
            }
        }
        if exp_digits == 0 {
            return Err(invalid("expected exponent digits after 'p'"));
        }
        if exp_negative {
            exp = -exp;
        }
        value *= pow2(exp);
    }
    Ok(Some(value))
}

/// `2^exp` without `std`; exact while the result stays normal.
fn pow2(exp: i32) -> f64 {
    let mut result = 1.0f64;
    let mut base = if exp < 0 { 0.5 } else { 2.0 };
    let mut n = exp.unsigned_abs();
    while n > 0 {
        if n & 1 == 1 {
            result *= base;
        }
        base *= base;
        n >>= 1;
    }
    result
}
