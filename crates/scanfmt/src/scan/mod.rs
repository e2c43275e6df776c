//! The scan dispatcher: walks the format string and the argument slots in
//! lock-step.
//!
//! Literal whitespace in the format consumes a whitespace run in the input;
//! other literal text must match point-for-point; each `{…}` specifier
//! resolves an argument slot and runs its typed scanner with a rollback
//! point set just before it. On a recoverable scanner failure the cursor is
//! restored to that point and the dispatcher returns immediately, leaving
//! later slots untouched.

mod args;
mod boolean;
mod float;
mod int;
mod string;

pub use args::{Arg, ScanContext, UserScanner};
pub use float::Float;
pub use int::Integer;

pub(crate) use float::{scan_float, FloatRules};
pub(crate) use int::{scan_int, IntRules};

use crate::{
    error::{Error, ErrorKind, Result},
    format::{parse_specifier, Specifier, TypeSpec},
    locale::Locale,
    range::{putback_point, read_point, skip_units, Cursor},
};

fn bad_format(msg: &'static str) -> Error {
    Error::new(ErrorKind::InvalidFormatString, msg)
}

fn literal_mismatch() -> Error {
    Error::new(ErrorKind::InvalidScannedValue, "literal does not match input")
}

/// Skips locale whitespace, returning the number of points consumed;
/// end-of-range just stops the skip.
pub(crate) fn skip_space<C, L>(cur: &mut C, loc: &L) -> usize
where
    C: Cursor + ?Sized,
    L: Locale + ?Sized,
{
    let mut n = 0;
    if cur.rest().is_some() {
        // ASCII fast path over the contiguous window; a custom locale may
        // classify beyond ASCII, so fall through to points after it.
        n += skip_units(cur, |b| b.is_ascii() && loc.is_space(b as char));
    }
    loop {
        match read_point(cur) {
            Ok(ch) if loc.is_space(ch) => n += 1,
            Ok(ch) => {
                putback_point(cur, ch);
                break;
            }
            Err(_) => break,
        }
    }
    n
}

/// Pre-validates a format string without consuming input: specifier syntax,
/// slot indices, and sequential/indexed consistency.
fn validate_format(format: &str, arg_count: usize) -> Result<()> {
    let mut f = format;
    let mut sequential = 0usize;
    let mut indexed = false;
    while let Some(at) = f.find(['{', '}']) {
        if f[at..].starts_with("{{") || f[at..].starts_with("}}") {
            f = &f[at + 2..];
            continue;
        }
        if f[at..].starts_with('}') {
            return Err(bad_format("unmatched '}' in format string"));
        }
        let (spec, used) = parse_specifier(&f[at + 1..])?;
        f = &f[at + 1 + used..];
        match spec.index {
            Some(index) => {
                if index >= arg_count {
                    return Err(bad_format("argument index out of range"));
                }
                indexed = true;
            }
            None => {
                if sequential >= arg_count {
                    return Err(bad_format("more specifiers than arguments"));
                }
                sequential += 1;
            }
        }
        if indexed && sequential > 0 {
            return Err(bad_format(
                "cannot mix indexed and sequential specifiers",
            ));
        }
    }
    Ok(())
}

/// The dispatcher proper. `cur` and `loc` are type-erased here; the public
/// entry points hand in the concrete cursor for their source category, and
/// user-scanner recursion re-enters with the same erased pair.
pub(crate) fn vscan(
    cur: &mut dyn Cursor,
    loc: &dyn Locale,
    format: &str,
    args: &mut [Arg<'_>],
) -> Result<()> {
    validate_format(format, args.len())?;

    let mut f = format;
    let mut next_slot = 0usize;
    while !f.is_empty() {
        let ch = f.chars().next().expect("non-empty format");
        if f.starts_with("{{") || f.starts_with("}}") {
            match_literal(cur, ch)?;
            f = &f[2..];
        } else if ch == '{' {
            let (spec, used) = parse_specifier(&f[1..])?;
            f = &f[1 + used..];
            let slot = match spec.index {
                Some(index) => index,
                None => {
                    let slot = next_slot;
                    next_slot += 1;
                    slot
                }
            };
            let arg = &mut args[slot];
            cur.set_rollback();
            if let Err(err) = dispatch_one(cur, loc, &spec, arg) {
                if err.is_recoverable() {
                    cur.reset_to_rollback();
                }
                return Err(err);
            }
        } else if loc.is_space(ch) {
            let run = f.chars().take_while(|&c| loc.is_space(c)).count();
            f = &f[f.char_indices().nth(run).map_or(f.len(), |(i, _)| i)..];
            // A whitespace run in the format needs a non-empty run in the
            // input, except when the input has already ended.
            if skip_space(cur, loc) == 0 && crate::range::peek_unit(cur).is_ok() {
                return Err(literal_mismatch());
            }
        } else {
            match_literal(cur, ch)?;
            f = &f[ch.len_utf8()..];
        }
    }
    Ok(())
}

/// The walk behind [`scan_default`](crate::scan_default): one bare slot per
/// argument, no format text to parse or match.
pub(crate) fn vscan_slots(
    cur: &mut dyn Cursor,
    loc: &dyn Locale,
    args: &mut [Arg<'_>],
) -> Result<()> {
    let spec = Specifier::default();
    for arg in args {
        cur.set_rollback();
        if let Err(err) = dispatch_one(cur, loc, &spec, arg) {
            if err.is_recoverable() {
                cur.reset_to_rollback();
            }
            return Err(err);
        }
    }
    Ok(())
}

/// Matches one literal format character against the input.
fn match_literal(cur: &mut dyn Cursor, expected: char) -> Result<()> {
    let got = read_point(cur)?;
    if got == expected {
        Ok(())
    } else {
        putback_point(cur, got);
        Err(literal_mismatch())
    }
}

fn dispatch_one(
    cur: &mut dyn Cursor,
    loc: &dyn Locale,
    spec: &Specifier,
    arg: &mut Arg<'_>,
) -> Result<()> {
    match arg {
        Arg::I8(out) => **out = scan_int(cur, loc, &IntRules::from_spec(spec)?)?,
        Arg::I16(out) => **out = scan_int(cur, loc, &IntRules::from_spec(spec)?)?,
        Arg::I32(out) => **out = scan_int(cur, loc, &IntRules::from_spec(spec)?)?,
        Arg::I64(out) => **out = scan_int(cur, loc, &IntRules::from_spec(spec)?)?,
        Arg::I128(out) => **out = scan_int(cur, loc, &IntRules::from_spec(spec)?)?,
        Arg::Isize(out) => **out = scan_int(cur, loc, &IntRules::from_spec(spec)?)?,
        Arg::U8(out) => **out = scan_int(cur, loc, &IntRules::from_spec(spec)?)?,
        Arg::U16(out) => **out = scan_int(cur, loc, &IntRules::from_spec(spec)?)?,
        Arg::U32(out) => **out = scan_int(cur, loc, &IntRules::from_spec(spec)?)?,
        Arg::U64(out) => **out = scan_int(cur, loc, &IntRules::from_spec(spec)?)?,
        Arg::U128(out) => **out = scan_int(cur, loc, &IntRules::from_spec(spec)?)?,
        Arg::Usize(out) => **out = scan_int(cur, loc, &IntRules::from_spec(spec)?)?,
        Arg::F32(out) => **out = scan_float(cur, loc, &FloatRules::from_spec(spec, loc)?)?,
        Arg::F64(out) => **out = scan_float(cur, loc, &FloatRules::from_spec(spec, loc)?)?,
        Arg::Bool(out) => **out = boolean::scan_bool(cur, loc, spec)?,
        Arg::Char(out) => **out = string::scan_char(cur, loc, spec)?,
        Arg::Str(out) => string::scan_string(cur, loc, spec, out)?,
        Arg::Span(out) => string::scan_span(cur, loc, spec, out)?,
        Arg::Discard => discard_one(cur, loc, spec)?,
        Arg::User(scanner) => {
            scanner.parse(spec)?;
            let mut ctx = ScanContext {
                cursor: cur,
                locale: loc,
                spec,
            };
            scanner.scan(&mut ctx)?;
        }
    }
    Ok(())
}

/// Scans and drops a value of the specifier's type; a bare `{}` discards a
/// whitespace-delimited token.
fn discard_one(cur: &mut dyn Cursor, loc: &dyn Locale, spec: &Specifier) -> Result<()> {
    match &spec.ty {
        TypeSpec::Int(_) => {
            scan_int::<i128, _, _>(cur, loc, &IntRules::from_spec(spec)?).map(|_| ())
        }
        TypeSpec::Float(_) => {
            scan_float::<f64, _, _>(cur, loc, &FloatRules::from_spec(spec, loc)?).map(|_| ())
        }
        TypeSpec::Char => string::scan_char(cur, loc, spec).map(|_| ()),
        TypeSpec::Default | TypeSpec::Str | TypeSpec::Set(_) => {
            let mut sink = alloc::string::String::new();
            string::scan_string(cur, loc, spec, &mut sink)
        }
    }
}

/// Types scannable as a single default-format value; powers
/// [`scan_value`](crate::scan_value) and [`scan_list`](crate::scan_list).
pub trait ScanValue: Sized {
    #[doc(hidden)]
    fn scan_one(cur: &mut dyn Cursor, loc: &dyn Locale, spec: &Specifier) -> Result<Self>;
}

macro_rules! impl_scan_value_int {
    ($($t:ty),*) => {$(
        impl ScanValue for $t {
            fn scan_one(cur: &mut dyn Cursor, loc: &dyn Locale, spec: &Specifier) -> Result<Self> {
                scan_int(cur, loc, &IntRules::from_spec(spec)?)
            }
        }
    )*};
}

impl_scan_value_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_scan_value_float {
    ($($t:ty),*) => {$(
        impl ScanValue for $t {
            fn scan_one(cur: &mut dyn Cursor, loc: &dyn Locale, spec: &Specifier) -> Result<Self> {
                scan_float(cur, loc, &FloatRules::from_spec(spec, loc)?)
            }
        }
    )*};
}

impl_scan_value_float!(f32, f64);

impl ScanValue for bool {
    fn scan_one(cur: &mut dyn Cursor, loc: &dyn Locale, spec: &Specifier) -> Result<Self> {
        boolean::scan_bool(cur, loc, spec)
    }
}

impl ScanValue for char {
    fn scan_one(cur: &mut dyn Cursor, loc: &dyn Locale, spec: &Specifier) -> Result<Self> {
        string::scan_char(cur, loc, spec)
    }
}

impl ScanValue for alloc::string::String {
    fn scan_one(cur: &mut dyn Cursor, loc: &dyn Locale, spec: &Specifier) -> Result<Self> {
        let mut out = alloc::string::String::new();
        string::scan_string(cur, loc, spec, &mut out)?;
        Ok(out)
    }
}
