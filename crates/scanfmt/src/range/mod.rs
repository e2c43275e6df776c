//! The range abstraction: a uniform cursor over heterogeneous character
//! sources.
//!
//! Every supported input is wrapped into a type implementing [`Cursor`]:
//!
//! - borrowed contiguous text (`&str`, `&String`) → [`StrCursor`],
//! - an owned `String` surrendered by the caller → [`OwnedCursor`],
//! - any other sequence, type-erased behind a code-unit iterator →
//!   [`ErasedCursor`] via [`Erased`],
//! - standard input (`std` feature) → `StdinCursor`.
//!
//! Scanners are generic over `C: Cursor + ?Sized`, so each category gets a
//! monomorphized code path while user-type recursion can still go through
//! `&mut dyn Cursor`.
//!
//! Invariants
//! - A cursor never yields units past the end of its source.
//! - The putback buffer is drained before the underlying source advances.
//! - `putback` accepts any unit read since the last rollback point.
//! - Multi-unit code-point reads are atomic: on end-of-range mid-sequence
//!   the consumed units are put back.
//! - At most one rollback point is active; setting a new one discards the
//!   old, and `reset_to_rollback` restores the cursor exactly.

mod contiguous;
mod erased;
#[cfg(feature = "std")]
pub(crate) mod stdio;

use alloc::{string::String, vec::Vec};

pub use contiguous::{OwnedCursor, StrCursor};
pub use erased::{Erased, ErasedCursor};

use crate::{
    error::{Error, Result},
    unicode,
};

mod sealed {
    pub trait Sealed {}
}

/// A stateful cursor over a source of code units.
///
/// This trait is sealed; the implementations cover every supported source
/// category. Object-safe so user scanners can recurse through a type-erased
/// context.
pub trait Cursor: sealed::Sealed {
    /// The not-yet-consumed input as one contiguous `str` view, when the
    /// category supports zero-copy access. Non-contiguous and streamed
    /// cursors return `None` and callers fall back to unit-wise reads.
    fn rest(&self) -> Option<&str>;

    /// Reads and consumes the next code unit.
    fn read_unit(&mut self) -> Result<u8>;

    /// Pushes one unit back in front of the cursor. Must only be called
    /// with units previously read since the last rollback point, in
    /// last-read-first order.
    fn putback(&mut self, unit: u8);

    /// Consumes `n` units previously observed through [`Cursor::rest`].
    fn advance_by(&mut self, n: usize);

    /// Captures the current position; discards any previous rollback point.
    fn set_rollback(&mut self);

    /// Restores the cursor to the most recent rollback point.
    fn reset_to_rollback(&mut self);
}

/// Conversion from a user-facing input into its cursor and, once scanning
/// is done, into the leftover representation for that source category.
///
/// The leftover type is a function of the input type only; it never depends
/// on the format string or on success.
pub trait ScanInput: Sized {
    /// Cursor category selected for this input.
    type Cursor: Cursor;
    /// Leftover-range representation carried by the result.
    type Leftover;

    /// Wraps the input.
    fn into_cursor(self) -> Self::Cursor;

    /// Packages the residual cursor as the typed leftover.
    fn finish(cursor: Self::Cursor) -> Self::Leftover;
}

// ---------------------------------------------------------------------------
// Unit- and point-level primitives shared by the typed scanners.
// ---------------------------------------------------------------------------

/// Reads the next unit without consuming it.
pub(crate) fn peek_unit<C: Cursor + ?Sized>(cur: &mut C) -> Result<u8> {
    let unit = cur.read_unit()?;
    cur.putback(unit);
    Ok(unit)
}

/// Decodes one code point. Atomic: if the input ends mid-sequence, every
/// consumed unit is put back and `EndOfRange` is returned. An invalid lead
/// or continuation unit is `InvalidEncoding` and leaves the cursor where it
/// failed.
pub(crate) fn read_point<C: Cursor + ?Sized>(cur: &mut C) -> Result<char> {
    let lead = cur.read_unit()?;
    let len = match unicode::utf8_seq_len(lead) {
        Some(len) => len,
        None => {
            // Leave the cursor at the offending unit.
            cur.putback(lead);
            return Err(Error::new(
                crate::ErrorKind::InvalidEncoding,
                "invalid UTF-8 lead unit",
            ));
        }
    };
    let mut buf = [0u8; unicode::MAX_UTF8_LEN];
    buf[0] = lead;
    for i in 1..len {
        match cur.read_unit() {
            Ok(unit) => buf[i] = unit,
            Err(err) => {
                for j in (0..i).rev() {
                    cur.putback(buf[j]);
                }
                return Err(err);
            }
        }
    }
    unicode::decode_utf8(&buf[..len])
}

/// Puts a whole code point back, trailing units first.
pub(crate) fn putback_point<C: Cursor + ?Sized>(cur: &mut C, ch: char) {
    let mut buf = [0u8; unicode::MAX_UTF8_LEN];
    let encoded = ch.encode_utf8(&mut buf);
    for &unit in encoded.as_bytes().iter().rev() {
        cur.putback(unit);
    }
}

/// Skips code units satisfying `pred`, returning how many were consumed.
/// End-of-range simply stops the skip.
pub(crate) fn skip_units<C: Cursor + ?Sized>(
    cur: &mut C,
    mut pred: impl FnMut(u8) -> bool,
) -> usize {
    if let Some(rest) = cur.rest() {
        let n = rest.bytes().take_while(|&b| pred(b)).count();
        cur.advance_by(n);
        return n;
    }
    let mut n = 0;
    loop {
        match cur.read_unit() {
            Ok(unit) if pred(unit) => n += 1,
            Ok(unit) => {
                cur.putback(unit);
                break;
            }
            Err(_) => break,
        }
    }
    n
}

/// Copies up to `max` units satisfying `pred` into `out`. The first
/// non-matching unit is left in the cursor. Uses the zero-copy window when
/// the source is contiguous.
pub(crate) fn take_units<C: Cursor + ?Sized>(
    cur: &mut C,
    max: usize,
    mut pred: impl FnMut(u8) -> bool,
    out: &mut Vec<u8>,
) -> usize {
    if let Some(rest) = cur.rest() {
        let n = rest
            .bytes()
            .take(max)
            .take_while(|&b| pred(b))
            .count();
        out.extend_from_slice(&rest.as_bytes()[..n]);
        cur.advance_by(n);
        return n;
    }
    let mut n = 0;
    while n < max {
        match cur.read_unit() {
            Ok(unit) if pred(unit) => {
                out.push(unit);
                n += 1;
            }
            Ok(unit) => {
                cur.putback(unit);
                break;
            }
            Err(_) => break,
        }
    }
    n
}

/// Copies up to `max` code points satisfying `pred` into `out`, decoding as
/// it goes. The first non-matching point is put back whole.
pub(crate) fn take_points<C: Cursor + ?Sized>(
    cur: &mut C,
    max: usize,
    mut pred: impl FnMut(char) -> bool,
    out: &mut String,
) -> Result<usize> {
    if let Some(rest) = cur.rest() {
        let mut bytes = 0;
        let mut n = 0;
        for ch in rest.chars() {
            if n == max || !pred(ch) {
                break;
            }
            bytes += ch.len_utf8();
            n += 1;
        }
        out.push_str(&rest[..bytes]);
        cur.advance_by(bytes);
        return Ok(n);
    }
    let mut n = 0;
    while n < max {
        match read_point(cur) {
            Ok(ch) if pred(ch) => {
                out.push(ch);
                n += 1;
            }
            Ok(ch) => {
                putback_point(cur, ch);
                break;
            }
            Err(err) if err.kind() == crate::ErrorKind::EndOfRange => break,
            Err(err) => return Err(err),
        }
    }
    Ok(n)
}
