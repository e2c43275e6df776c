//! Character, span, token, and character-class scanning.

use alloc::string::String;

use crate::{
    error::{Error, ErrorKind, Result},
    format::{CharSet, Specifier, TypeSpec},
    locale::Locale,
    range::{peek_unit, read_point, take_points, take_units, Cursor},
};

use super::skip_space;

fn invalid(msg: &'static str) -> Error {
    Error::new(ErrorKind::InvalidScannedValue, msg)
}

/// Reads exactly one code point; whitespace is a value here, not a
/// delimiter.
pub(crate) fn scan_char<C, L>(cur: &mut C, _loc: &L, spec: &Specifier) -> Result<char>
where
    C: Cursor + ?Sized,
    L: Locale + ?Sized,
{
    if !matches!(spec.ty, TypeSpec::Default | TypeSpec::Char) {
        return Err(Error::new(
            ErrorKind::InvalidFormatString,
            "specifier does not apply to a char argument",
        ));
    }
    read_point(cur)
}

/// Fills `out` with up to `out.len()` non-space code units. Units beyond
/// the scanned prefix keep their previous contents; the delimiting space is
/// left in the input.
pub(crate) fn scan_span<C, L>(cur: &mut C, loc: &L, spec: &Specifier, out: &mut [u8]) -> Result<()>
where
    C: Cursor + ?Sized,
    L: Locale + ?Sized,
{
    if !matches!(spec.ty, TypeSpec::Default | TypeSpec::Str) {
        return Err(Error::new(
            ErrorKind::InvalidFormatString,
            "specifier does not apply to a span argument",
        ));
    }
    if out.is_empty() {
        return Ok(());
    }
    let mut buf = alloc::vec::Vec::with_capacity(out.len());
    let n = take_units(
        cur,
        out.len(),
        |unit| !(unit.is_ascii() && loc.is_space(unit as char)),
        &mut buf,
    );
    if n == 0 && peek_unit(cur).is_err() {
        return Err(Error::end_of_range());
    }
    out[..n].copy_from_slice(&buf);
    Ok(())
}

/// Reads a whitespace-delimited token into `out` (cleared first, then
/// appended). `spec.width` caps the token length in code points.
pub(crate) fn scan_string<C, L>(
    cur: &mut C,
    loc: &L,
    spec: &Specifier,
    out: &mut String,
) -> Result<()>
where
    C: Cursor + ?Sized,
    L: Locale + ?Sized,
{
    if let TypeSpec::Set(set) = &spec.ty {
        return scan_set(cur, spec, set, out);
    }
    if !matches!(spec.ty, TypeSpec::Default | TypeSpec::Str) {
        return Err(Error::new(
            ErrorKind::InvalidFormatString,
            "specifier does not apply to a string argument",
        ));
    }
    skip_space(cur, loc);

    out.clear();
    let max = spec.width.unwrap_or(usize::MAX);
    take_points(cur, max, |ch| !loc.is_space(ch), out)?;
    if out.is_empty() {
        return Err(Error::end_of_range());
    }
    Ok(())
}

/// Reads the longest run of characters inside (or, negated, outside) the
/// enumerated set. An empty run is an invalid value.
fn scan_set<C>(cur: &mut C, spec: &Specifier, set: &CharSet, out: &mut String) -> Result<()>
where
    C: Cursor + ?Sized,
{
    out.clear();
    let max = spec.width.unwrap_or(usize::MAX);
    take_points(cur, max, |ch| set.contains(ch), out)?;
    if out.is_empty() {
        return Err(match peek_unit(cur) {
            Err(err) => err,
            Ok(_) => invalid("no characters in the scanned class"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::{format::parse_specifier, locale::AsciiLocale, range::StrCursor};

    fn spec(body: &str) -> Specifier {
        parse_specifier(body).unwrap().0
    }

    #[test]
    fn char_reads_whitespace_too() {
        let mut cur = StrCursor::new(" å");
        assert_eq!(scan_char(&mut cur, &AsciiLocale, &spec("}")).unwrap(), ' ');
        assert_eq!(scan_char(&mut cur, &AsciiLocale, &spec(":c}")).unwrap(), 'å');
        assert_eq!(
            scan_char(&mut cur, &AsciiLocale, &spec("}")).unwrap_err().kind(),
            ErrorKind::EndOfRange
        );
    }

    #[test]
    fn span_fills_a_prefix() {
        let mut buf = [b'.'; 6];
        let mut cur = StrCursor::new("word rest");
        scan_span(&mut cur, &AsciiLocale, &spec("}"), &mut buf).unwrap();
        assert_eq!(&buf, b"word..");
        assert_eq!(cur.rest(), Some(" rest"));

        let mut cur = StrCursor::new("overflowing");
        let mut buf = [0u8; 4];
        scan_span(&mut cur, &AsciiLocale, &spec("}"), &mut buf).unwrap();
        assert_eq!(&buf, b"over");
        assert_eq!(cur.rest(), Some("flowing"));
    }

    #[test]
    fn token_skips_leading_space_and_stops_at_space() {
        let mut out = "stale".to_string();
        let mut cur = StrCursor::new("  hello world");
        scan_string(&mut cur, &AsciiLocale, &spec("}"), &mut out).unwrap();
        assert_eq!(out, "hello");
        assert_eq!(cur.rest(), Some(" world"));
    }

    #[test]
    fn width_caps_the_token() {
        let mut out = String::new();
        let mut cur = StrCursor::new("abcdef");
        scan_string(&mut cur, &AsciiLocale, &spec(":3s}"), &mut out).unwrap();
        assert_eq!(out, "abc");
        assert_eq!(cur.rest(), Some("def"));
    }

    #[test]
    fn set_runs() {
        let mut out = String::new();
        let mut cur = StrCursor::new("abc123");
        scan_string(&mut cur, &AsciiLocale, &spec(":[a-z]}"), &mut out).unwrap();
        assert_eq!(out, "abc");
        assert_eq!(cur.rest(), Some("123"));

        let mut cur = StrCursor::new("123,456");
        scan_string(&mut cur, &AsciiLocale, &spec(":[^,]}"), &mut out).unwrap();
        assert_eq!(out, "123");

        // Empty match is a value error, not end-of-range.
        let mut cur = StrCursor::new("xyz");
        let err = scan_string(&mut cur, &AsciiLocale, &spec(":[0-9]}"), &mut out).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidScannedValue);
    }
}
