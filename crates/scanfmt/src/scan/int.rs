//! Integer scanning for bases 2 through 36.
//!
//! Digits accumulate into a *negated* running total so that the most
//! negative value of a signed type scans without overflowing; the total is
//! negated back at the end when no `-` sign was present. Overflow at any
//! step is `ValueOutOfRange`.

use crate::{
    error::{Error, ErrorKind, Result},
    format::{Specifier, TypeSpec},
    locale::Locale,
    range::{peek_unit, putback_point, read_point, Cursor},
};

use super::skip_space;

mod sealed {
    pub trait Sealed {}
}

/// Integer types the scanners can produce. Implemented for every primitive
/// integer; sealed.
pub trait Integer: Copy + sealed::Sealed {
    #[doc(hidden)]
    const SIGNED: bool;
    #[doc(hidden)]
    fn zero() -> Self;
    /// One accumulation step: `self * radix ± digit`, away from zero.
    #[doc(hidden)]
    fn accumulate(self, radix: u32, digit: u32) -> Option<Self>;
    /// Resolves the accumulated magnitude against the scanned sign.
    #[doc(hidden)]
    fn finalize(self, negative: bool) -> Option<Self>;
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}
        impl Integer for $t {
            const SIGNED: bool = true;
            fn zero() -> Self { 0 }
            fn accumulate(self, radix: u32, digit: u32) -> Option<Self> {
                // Signed magnitudes accumulate negative.
                self.checked_mul(radix as $t)?
                    .checked_sub(digit as $t)
            }
            fn finalize(self, negative: bool) -> Option<Self> {
                if negative { Some(self) } else { self.checked_neg() }
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}
        impl Integer for $t {
            const SIGNED: bool = false;
            fn zero() -> Self { 0 }
            fn accumulate(self, radix: u32, digit: u32) -> Option<Self> {
                self.checked_mul(radix as $t)?
                    .checked_add(digit as $t)
            }
            fn finalize(self, negative: bool) -> Option<Self> {
                if negative { None } else { Some(self) }
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64, i128, isize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);

pub(crate) struct IntRules {
    pub radix: u32,
    pub grouped: bool,
    /// Skip leading whitespace before the sign.
    pub skip_space: bool,
    /// Accept a leading `+`.
    pub allow_plus: bool,
    /// Accept a `0x`/`0b`/`0o` prefix matching the radix.
    pub allow_prefix: bool,
}

impl IntRules {
    pub(crate) fn from_spec(spec: &Specifier) -> Result<Self> {
        let radix = match &spec.ty {
            TypeSpec::Default => 10,
            TypeSpec::Int(base) => base.radix(),
            _ => {
                return Err(Error::new(
                    ErrorKind::InvalidFormatString,
                    "specifier does not apply to an integer argument",
                ))
            }
        };
        Ok(Self {
            radix,
            grouped: spec.grouped,
            skip_space: true,
            allow_plus: true,
            allow_prefix: matches!(spec.ty, TypeSpec::Int(_)),
        })
    }
}

fn invalid(msg: &'static str) -> Error {
    Error::new(ErrorKind::InvalidScannedValue, msg)
}

fn out_of_range() -> Error {
    Error::new(ErrorKind::ValueOutOfRange, "integer does not fit the target type")
}

fn prefix_letter(radix: u32) -> Option<(char, char)> {
    match radix {
        16 => Some(('x', 'X')),
        8 => Some(('o', 'O')),
        2 => Some(('b', 'B')),
        _ => None,
    }
}

/// The integer engine shared by the `{…}` scanner and
/// [`parse_integer`](crate::parse_integer).
pub(crate) fn scan_int<T, C, L>(cur: &mut C, loc: &L, rules: &IntRules) -> Result<T>
where
    T: Integer,
    C: Cursor + ?Sized,
    L: Locale + ?Sized,
{
    if rules.skip_space {
        skip_space(cur, loc);
    }

    let mut negative = false;
    let mut signed_with = None;
    match peek_unit(cur) {
        Ok(b'+') if rules.allow_plus => {
            cur.read_unit()?;
            signed_with = Some(b'+');
        }
        Ok(b'-') => {
            if !T::SIGNED {
                return Err(invalid("'-' before an unsigned integer"));
            }
            cur.read_unit()?;
            negative = true;
            signed_with = Some(b'-');
        }
        Ok(_) => {}
        // No sign because no input; the digit check below reports it.
        Err(err) if err.kind() == ErrorKind::EndOfRange => {}
        Err(err) => return Err(err),
    }

    let mut value = T::zero();
    let mut digits = 0usize;

    // A leading zero may open a base prefix; the zero alone is still a
    // valid scan when the prefix letter is not followed by a digit.
    if rules.allow_prefix {
        if let Ok(b'0') = peek_unit(cur) {
            cur.read_unit()?;
            digits = 1;
            if let Some((lo, hi)) = prefix_letter(rules.radix) {
                if let Ok(unit) = peek_unit(cur) {
                    if (unit as char == lo || unit as char == hi)
                        && prefix_followed_by_digit(cur, loc, rules.radix)?
                    {
                        cur.read_unit()?;
                    }
                }
            }
        }
    }

    loop {
        let ch = match read_point(cur) {
            Ok(ch) => ch,
            Err(err) if err.kind() == ErrorKind::EndOfRange => break,
            Err(err) => return Err(err),
        };
        if loc.is_digit(ch, rules.radix) {
            let digit = ch.to_digit(rules.radix).expect("classified digit");
            value = value.accumulate(rules.radix, digit).ok_or_else(out_of_range)?;
            digits += 1;
        } else if rules.grouped && digits > 0 && ch == loc.thousands_separator() {
            // Separator must sit between digits.
            match read_point(cur) {
                Ok(next) if loc.is_digit(next, rules.radix) => {
                    putback_point(cur, next);
                }
                Ok(next) => {
                    putback_point(cur, next);
                    putback_point(cur, ch);
                    break;
                }
                Err(_) => {
                    putback_point(cur, ch);
                    break;
                }
            }
        } else {
            putback_point(cur, ch);
            break;
        }
    }

    if digits == 0 {
        if let Some(sign) = signed_with {
            cur.putback(sign);
        }
        return Err(invalid("expected a digit"));
    }
    value.finalize(negative).ok_or_else(out_of_range)
}

/// Peeks past a prefix letter to check a digit follows; consumes nothing.
fn prefix_followed_by_digit<C, L>(cur: &mut C, loc: &L, radix: u32) -> Result<bool>
where
    C: Cursor + ?Sized,
    L: Locale + ?Sized,
{
    let letter = cur.read_unit()?;
    let has_digit = match peek_unit(cur) {
        Ok(unit) => loc.is_digit(unit as char, radix),
        Err(_) => false,
    };
    cur.putback(letter);
    Ok(has_digit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{locale::AsciiLocale, range::StrCursor};

    fn rules(radix: u32) -> IntRules {
        IntRules {
            radix,
            grouped: false,
            skip_space: true,
            allow_plus: true,
            allow_prefix: radix != 10,
        }
    }

    fn scan<T: Integer>(input: &str, radix: u32) -> Result<(T, alloc::string::String)> {
        let mut cur = StrCursor::new(input);
        let value = scan_int::<T, _, _>(&mut cur, &AsciiLocale, &rules(radix))?;
        Ok((value, alloc::string::String::from(cur.rest().unwrap())))
    }

    #[test]
    fn decimal_with_sign_and_leftover() {
        assert_eq!(scan::<i32>("  42x", 10).unwrap(), (42, "x".into()));
        assert_eq!(scan::<i32>("-7", 10).unwrap().0, -7);
        assert_eq!(scan::<i32>("+7", 10).unwrap().0, 7);
    }

    #[test]
    fn min_value_scans_and_below_overflows() {
        assert_eq!(scan::<i8>("-128", 10).unwrap().0, i8::MIN);
        assert_eq!(
            scan::<i8>("-129", 10).unwrap_err().kind(),
            ErrorKind::ValueOutOfRange
        );
        assert_eq!(
            scan::<i8>("128", 10).unwrap_err().kind(),
            ErrorKind::ValueOutOfRange
        );
    }

    #[test]
    fn unsigned_rejects_minus() {
        assert_eq!(
            scan::<u16>("-3", 10).unwrap_err().kind(),
            ErrorKind::InvalidScannedValue
        );
    }

    #[test]
    fn bases_and_prefixes() {
        assert_eq!(scan::<u32>("ff", 16).unwrap().0, 255);
        assert_eq!(scan::<u32>("0xff", 16).unwrap().0, 255);
        assert_eq!(scan::<u32>("1010", 2).unwrap().0, 10);
        assert_eq!(scan::<u32>("0b1010", 2).unwrap().0, 10);
        assert_eq!(scan::<u32>("0o17", 8).unwrap().0, 15);
        // A bare "0x" with no digit after it scans as zero, leaving the 'x'.
        assert_eq!(scan::<u32>("0xg", 16).unwrap(), (0, "xg".into()));
    }

    #[test]
    fn grouped_digits() {
        let r = IntRules {
            grouped: true,
            ..rules(10)
        };
        let mut cur = StrCursor::new("1,234,567 rest");
        let v = scan_int::<i64, _, _>(&mut cur, &AsciiLocale, &r).unwrap();
        assert_eq!(v, 1_234_567);
        assert_eq!(cur.rest().unwrap(), " rest");

        // A trailing separator is not part of the number.
        let mut cur = StrCursor::new("12, 13");
        let v = scan_int::<i64, _, _>(&mut cur, &AsciiLocale, &r).unwrap();
        assert_eq!(v, 12);
        assert_eq!(cur.rest().unwrap(), ", 13");
    }

    #[test]
    fn empty_input_fails() {
        assert_eq!(
            scan::<i32>("", 10).unwrap_err().kind(),
            ErrorKind::InvalidScannedValue
        );
        assert_eq!(
            scan::<i32>("   ", 10).unwrap_err().kind(),
            ErrorKind::InvalidScannedValue
        );
    }

    #[test]
    fn no_digits_restores_sign() {
        let mut cur = StrCursor::new("-x");
        let err = scan_int::<i32, _, _>(&mut cur, &AsciiLocale, &rules(10)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidScannedValue);
        assert_eq!(cur.rest().unwrap(), "-x");
    }
}
