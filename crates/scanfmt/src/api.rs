//! Public entry points.

use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    error::{Error, ErrorKind, Result},
    format::Specifier,
    locale::{AsciiLocale, Locale},
    range::{putback_point, read_point, Cursor, ScanInput, StrCursor},
    result::{ScanResult, ValueResult},
    scan::{scan_float, scan_int, vscan, Arg, Float, FloatRules, IntRules, Integer, ScanValue},
};

/// Reads from `input` according to `format`, assigning each specifier's
/// value to the matching slot in `args`.
///
/// ```
/// use scanfmt::{args, scan};
///
/// let mut i = 0i32;
/// let r = scan("123", "{}", &mut args![i]);
/// assert!(r.is_ok());
/// assert_eq!(i, 123);
/// assert!(r.leftover().is_empty());
/// ```
pub fn scan<R: ScanInput>(
    input: R,
    format: &str,
    args: &mut [Arg<'_>],
) -> ScanResult<R::Leftover> {
    let mut cur = input.into_cursor();
    let err = vscan(&mut cur, &AsciiLocale, format, args).err();
    ScanResult::new(R::finish(cur), err)
}

/// Like [`scan`] with a synthesized `"{} {} … {}"` format: one bare slot per
/// argument and no format parsing overhead.
pub fn scan_default<R: ScanInput>(input: R, args: &mut [Arg<'_>]) -> ScanResult<R::Leftover> {
    let mut cur = input.into_cursor();
    let err = crate::scan::vscan_slots(&mut cur, &AsciiLocale, args).err();
    ScanResult::new(R::finish(cur), err)
}

/// Like [`scan`], but the given locale is consulted by specifiers carrying
/// the `l` flag. Default-mode pieces of the format behave exactly as in
/// [`scan`]; the process-global locale is never read.
///
/// ```
/// use scanfmt::{args, scan_localized, CustomLocale};
///
/// let fi = CustomLocale {
///     decimal_point: ',',
///     ..CustomLocale::default()
/// };
/// let mut d = 0f64;
/// let r = scan_localized(&fi, "3,14", "{:l}", &mut args![d]);
/// assert!(r.is_ok());
/// assert!((d - 3.14).abs() < 1e-12);
/// ```
pub fn scan_localized<L: Locale, R: ScanInput>(
    locale: &L,
    input: R,
    format: &str,
    args: &mut [Arg<'_>],
) -> ScanResult<R::Leftover> {
    let mut cur = input.into_cursor();
    let err = vscan(&mut cur, locale, format, args).err();
    ScanResult::new(R::finish(cur), err)
}

/// Scans a single default-format value, returning it inside the result
/// instead of through an out-reference.
///
/// ```
/// let r = scanfmt::scan_value::<i32, _>("42");
/// assert_eq!(r.value(), Some(42));
/// ```
pub fn scan_value<T: ScanValue, R: ScanInput>(input: R) -> ValueResult<T, R::Leftover> {
    let mut cur = input.into_cursor();
    cur.set_rollback();
    match T::scan_one(&mut cur, &AsciiLocale, &Specifier::default()) {
        Ok(value) => ValueResult::new(Some(value), R::finish(cur), None),
        Err(err) => {
            if err.is_recoverable() {
                cur.reset_to_rollback();
            }
            ValueResult::new(None, R::finish(cur), Some(err))
        }
    }
}

/// Reads into `out` up to and including the first `'\n'`; the newline is
/// consumed but not stored.
pub fn getline<R: ScanInput>(input: R, out: &mut String) -> ScanResult<R::Leftover> {
    getline_with(input, out, '\n')
}

/// Reads into `out` up to and including `delimiter`.
///
/// When the delimiter never shows up, the accumulated content up to
/// end-of-range is still a successful read; only an immediately empty input
/// reports `EndOfRange`.
///
/// ```
/// use scanfmt::getline;
///
/// let mut line = String::new();
/// let r = getline("hello\nworld", &mut line);
/// assert!(r.is_ok());
/// assert_eq!(line, "hello");
/// assert_eq!(r.leftover().as_str(), "world");
/// ```
pub fn getline_with<R: ScanInput>(
    input: R,
    out: &mut String,
    delimiter: char,
) -> ScanResult<R::Leftover> {
    let mut cur = input.into_cursor();
    let err = getline_impl(&mut cur, out, delimiter).err();
    ScanResult::new(R::finish(cur), err)
}

fn getline_impl<C: Cursor + ?Sized>(cur: &mut C, out: &mut String, delimiter: char) -> Result<()> {
    // Zero-copy path: take a sub-view of the contiguous window in one go.
    let mut taken = None;
    if let Some(rest) = cur.rest() {
        if rest.is_empty() {
            return Err(Error::end_of_range());
        }
        match rest.find(delimiter) {
            Some(at) => {
                out.clear();
                out.push_str(&rest[..at]);
                taken = Some(at + delimiter.len_utf8());
            }
            None => {
                out.clear();
                out.push_str(rest);
                taken = Some(rest.len());
            }
        }
    }
    if let Some(n) = taken {
        cur.advance_by(n);
        return Ok(());
    }

    out.clear();
    let mut read_any = false;
    loop {
        match read_point(cur) {
            Ok(ch) if ch == delimiter => return Ok(()),
            Ok(ch) => {
                out.push(ch);
                read_any = true;
            }
            Err(err) if err.kind() == ErrorKind::EndOfRange => {
                return if read_any { Ok(()) } else { Err(err) };
            }
            Err(err) => return Err(err),
        }
    }
}

/// Advances the input up to (but not past) the first occurrence of `until`.
/// Running out of input is not an error; everything was ignored.
pub fn ignore_until<R: ScanInput>(input: R, until: char) -> ScanResult<R::Leftover> {
    ignore_impl(input, usize::MAX, until)
}

/// Like [`ignore_until`], but also stops after `n` code points.
pub fn ignore_until_n<R: ScanInput>(input: R, n: usize, until: char) -> ScanResult<R::Leftover> {
    ignore_impl(input, n, until)
}

fn ignore_impl<R: ScanInput>(input: R, max: usize, until: char) -> ScanResult<R::Leftover> {
    let mut cur = input.into_cursor();
    let mut err = None;
    let mut skipped = 0usize;
    while skipped < max {
        match read_point(&mut cur) {
            Ok(ch) if ch == until => {
                putback_point(&mut cur, ch);
                break;
            }
            Ok(_) => skipped += 1,
            Err(e) if e.kind() == ErrorKind::EndOfRange => break,
            Err(e) => {
                err = Some(e);
                break;
            }
        }
    }
    ScanResult::new(R::finish(cur), err)
}

/// A container scanned values are pushed into; implemented for `Vec` and
/// for fixed-capacity [`SpanList`]s.
pub trait ListSink<T> {
    /// Appends one scanned value.
    fn push(&mut self, value: T);
    /// A full sink stops the list scan without error.
    fn is_full(&self) -> bool {
        false
    }
}

impl<T> ListSink<T> for Vec<T> {
    fn push(&mut self, value: T) {
        Vec::push(self, value);
    }
}

/// Fixed-capacity list sink over a mutable slice, so list scanning can fill
/// preallocated storage without touching the heap.
///
/// ```
/// use scanfmt::{scan_list, span_list};
///
/// let mut buf = [0i32; 4];
/// let mut sink = span_list(&mut buf);
/// let r = scan_list("1 2 3", &mut sink);
/// assert!(r.is_ok());
/// assert_eq!(sink.filled(), &[1, 2, 3]);
/// ```
#[derive(Debug)]
pub struct SpanList<'a, T> {
    slots: &'a mut [T],
    len: usize,
}

impl<'a, T> SpanList<'a, T> {
    /// The prefix of the slice that has been filled.
    #[must_use]
    pub fn filled(&self) -> &[T] {
        &self.slots[..self.len]
    }

    /// How many values were pushed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Wraps a slice as a [`SpanList`].
pub fn span_list<T>(slots: &mut [T]) -> SpanList<'_, T> {
    SpanList { slots, len: 0 }
}

impl<T> ListSink<T> for SpanList<'_, T> {
    fn push(&mut self, value: T) {
        self.slots[self.len] = value;
        self.len += 1;
    }

    fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }
}

/// Repeatedly scans whitespace-separated values into `sink`, stopping
/// without error at end-of-range, a full sink, or input that no longer
/// parses as a value.
///
/// ```
/// use scanfmt::scan_list;
///
/// let mut values: Vec<i32> = Vec::new();
/// let r = scan_list("123 456", &mut values);
/// assert!(r.is_ok());
/// assert_eq!(values, [123, 456]);
/// ```
pub fn scan_list<T, R, S>(input: R, sink: &mut S) -> ScanResult<R::Leftover>
where
    T: ScanValue,
    R: ScanInput,
    S: ListSink<T>,
{
    scan_list_impl(input, sink, None, None)
}

/// Like [`scan_list`], with a separator character expected between values.
pub fn scan_list_sep<T, R, S>(input: R, sink: &mut S, separator: char) -> ScanResult<R::Leftover>
where
    T: ScanValue,
    R: ScanInput,
    S: ListSink<T>,
{
    scan_list_impl(input, sink, Some(separator), None)
}

/// Like [`scan_list`], but also stops (consuming the terminator) when
/// `until` appears where a value or separator was expected.
///
/// ```
/// use scanfmt::scan_list_until;
///
/// let mut values: Vec<i32> = Vec::new();
/// let r = scan_list_until("123 456\n789", &mut values, '\n');
/// assert_eq!(values, [123, 456]);
/// assert_eq!(r.leftover().as_str(), "789");
/// ```
pub fn scan_list_until<T, R, S>(input: R, sink: &mut S, until: char) -> ScanResult<R::Leftover>
where
    T: ScanValue,
    R: ScanInput,
    S: ListSink<T>,
{
    scan_list_impl(input, sink, None, Some(until))
}

/// [`scan_list_until`] with a separator character between values.
pub fn scan_list_until_sep<T, R, S>(
    input: R,
    sink: &mut S,
    until: char,
    separator: char,
) -> ScanResult<R::Leftover>
where
    T: ScanValue,
    R: ScanInput,
    S: ListSink<T>,
{
    scan_list_impl(input, sink, Some(separator), Some(until))
}

fn scan_list_impl<T, R, S>(
    input: R,
    sink: &mut S,
    separator: Option<char>,
    until: Option<char>,
) -> ScanResult<R::Leftover>
where
    T: ScanValue,
    R: ScanInput,
    S: ListSink<T>,
{
    let loc = AsciiLocale;
    let spec = Specifier::default();
    let mut cur = input.into_cursor();

    'values: while !sink.is_full() {
        cur.set_rollback();
        match T::scan_one(&mut cur, &loc, &spec) {
            Ok(value) => sink.push(value),
            Err(err) if err.kind() == ErrorKind::EndOfRange => break,
            Err(err) if err.kind() == ErrorKind::InvalidScannedValue => {
                // Unexpected input is a soft stop, not an error.
                cur.reset_to_rollback();
                break;
            }
            Err(err) => {
                if err.is_recoverable() {
                    cur.reset_to_rollback();
                }
                return ScanResult::new(R::finish(cur), Some(err));
            }
        }

        // Between values: whitespace, at most one separator, or the
        // terminator (which is consumed).
        let mut sep_found = false;
        loop {
            let ch = match read_point(&mut cur) {
                Ok(ch) => ch,
                Err(err) if err.kind() == ErrorKind::EndOfRange => break 'values,
                Err(err) => return ScanResult::new(R::finish(cur), Some(err)),
            };
            if until == Some(ch) {
                break 'values;
            }
            if loc.is_space(ch) {
                continue;
            }
            match separator {
                Some(sep) if ch == sep && !sep_found => {
                    sep_found = true;
                }
                // Separator seen: this character opens the next value.
                Some(_) if sep_found => {
                    putback_point(&mut cur, ch);
                    break;
                }
                // A value where the separator belongs is a soft stop.
                Some(_) => {
                    putback_point(&mut cur, ch);
                    break 'values;
                }
                None => {
                    putback_point(&mut cur, ch);
                    break;
                }
            }
        }
    }
    ScanResult::new(R::finish(cur), None)
}

/// Parses an integer in `base` from the front of `str`, returning the value
/// and how many bytes were consumed.
///
/// Preconditions on `src` (not checked): non-empty, no leading whitespace,
/// no leading `+`, and no `0x`-style prefix; the base comes from the
/// `base` parameter alone. A leading `-` is fine for signed targets.
///
/// # Panics
///
/// When `base` is outside `2..=36`.
///
/// ```
/// let (value, used) = scanfmt::parse_integer::<u32>("ff", 16).unwrap();
/// assert_eq!((value, used), (255, 2));
/// ```
pub fn parse_integer<T: Integer>(src: &str, base: u32) -> Result<(T, usize)> {
    assert!((2..=36).contains(&base), "base must be in 2..=36");
    let rules = IntRules {
        radix: base,
        grouped: false,
        skip_space: false,
        allow_plus: false,
        allow_prefix: false,
    };
    let mut cur = StrCursor::new(src);
    let value = scan_int(&mut cur, &AsciiLocale, &rules)?;
    Ok((value, src.len() - cur.rest_str().len()))
}

/// Parses a float from the front of `src`, returning the value and how many
/// bytes were consumed. `src` must not be empty or start with whitespace.
///
/// ```
/// let (value, used) = scanfmt::parse_float::<f64>("2.5rest").unwrap();
/// assert_eq!((value, used), (2.5, 3));
/// ```
pub fn parse_float<T: Float>(src: &str) -> Result<(T, usize)> {
    let rules = FloatRules {
        decimal_point: '.',
        allow_hex: true,
        skip_space: false,
    };
    let mut cur = StrCursor::new(src);
    let value = scan_float(&mut cur, &AsciiLocale, &rules)?;
    Ok((value, src.len() - cur.rest_str().len()))
}
