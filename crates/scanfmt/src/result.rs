//! Result values and typed leftover ranges.
//!
//! Every entry point returns the outcome *and* the unconsumed tail of the
//! input, so scanning can continue from where it stopped. The leftover's
//! shape is fixed by the input type alone (see [`ScanInput`]):
//!
//! | input | leftover |
//! |---|---|
//! | `String` by value | [`OwnedLeftover`]: owns the text, exposes the tail |
//! | `&str`, `&String` | [`StrLeftover`]: borrowed zero-copy sub-view |
//! | [`Erased`](crate::Erased) | [`ErasedLeftover`]: erased view or owning tail |
//! | stdin (`std`) | `StreamLeftover`: snapshot of the parked tail |
//!
//! [`ScanInput`]: crate::ScanInput

use alloc::string::String;

use crate::{
    error::Error,
    range::{ErasedCursor, OwnedCursor, ScanInput, StrCursor},
};

/// Outcome of a scan: possibly an error, always a leftover.
///
/// A result is "truthy" when no error occurred; a carried error still comes
/// with the leftover range positioned at the rollback point of the failing
/// specifier (for recoverable errors) so partial progress is visible.
#[must_use]
#[derive(Debug)]
pub struct ScanResult<L> {
    leftover: L,
    error: Option<Error>,
}

impl<L> ScanResult<L> {
    pub(crate) fn new(leftover: L, error: Option<Error>) -> Self {
        Self { leftover, error }
    }

    /// Did the scan succeed?
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// The error, when one occurred.
    #[must_use]
    pub fn err(&self) -> Option<Error> {
        self.error
    }

    /// The unconsumed tail of the input.
    pub fn leftover(&self) -> &L {
        &self.leftover
    }

    /// Splits into leftover and error.
    pub fn into_parts(self) -> (L, Option<Error>) {
        (self.leftover, self.error)
    }

    /// Consumes the result, keeping only the leftover.
    pub fn into_leftover(self) -> L {
        self.leftover
    }

    /// Converts into a plain `Result`, dropping the leftover on error.
    pub fn into_result(self) -> Result<L, Error> {
        match self.error {
            None => Ok(self.leftover),
            Some(err) => Err(err),
        }
    }
}

/// Outcome of [`scan_value`](crate::scan_value): the value rides inside the
/// result instead of an out-reference.
#[must_use]
#[derive(Debug)]
pub struct ValueResult<T, L> {
    value: Option<T>,
    leftover: L,
    error: Option<Error>,
}

impl<T, L> ValueResult<T, L> {
    pub(crate) fn new(value: Option<T>, leftover: L, error: Option<Error>) -> Self {
        Self {
            value,
            leftover,
            error,
        }
    }

    /// Did the scan succeed?
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// The error, when one occurred.
    #[must_use]
    pub fn err(&self) -> Option<Error> {
        self.error
    }

    /// The scanned value, by reference.
    pub fn value_ref(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// The unconsumed tail of the input.
    pub fn leftover(&self) -> &L {
        &self.leftover
    }

    /// Everything at once.
    pub fn into_parts(self) -> (Option<T>, L, Option<Error>) {
        (self.value, self.leftover, self.error)
    }

    /// Converts into a plain `Result` over the value.
    pub fn into_result(self) -> Result<T, Error> {
        match (self.value, self.error) {
            (Some(value), None) => Ok(value),
            (_, Some(err)) => Err(err),
            (None, None) => unreachable!("ok result without value"),
        }
    }
}

impl<T: Copy, L> ValueResult<T, L> {
    /// The scanned value.
    #[must_use]
    pub fn value(&self) -> Option<T> {
        self.value
    }
}

/// Borrowed zero-copy leftover of a contiguous source.
///
/// Points into the original input's storage; re-scannable, and
/// reconstructs the original `&str` type via [`StrLeftover::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrLeftover<'a> {
    rest: &'a str,
}

impl<'a> StrLeftover<'a> {
    pub(crate) fn new(rest: &'a str) -> Self {
        Self { rest }
    }

    /// The tail as a string view into the original input.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.rest
    }

    /// The tail as raw code units.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.rest.as_bytes()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rest.len()
    }
}

impl<'a> ScanInput for StrLeftover<'a> {
    type Cursor = StrCursor<'a>;
    type Leftover = StrLeftover<'a>;

    fn into_cursor(self) -> Self::Cursor {
        StrCursor::new(self.rest)
    }

    fn finish(cursor: Self::Cursor) -> Self::Leftover {
        StrLeftover::new(cursor.rest_str())
    }
}

/// Leftover of an owned contiguous source: holds the whole `String` and the
/// consumed offset, exposing the tail without copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedLeftover {
    src: String,
    pos: usize,
}

impl OwnedLeftover {
    pub(crate) fn new(src: String, pos: usize) -> Self {
        Self { src, pos }
    }

    /// The tail as a view into the owned text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.src[self.pos..]
    }

    /// The tail as raw code units.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pos == self.src.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.src.len() - self.pos
    }

    /// Rebuilds an owned `String` of just the tail, reconstructing the
    /// original input type.
    #[must_use]
    pub fn into_string(mut self) -> String {
        self.src.split_off(self.pos)
    }
}

impl ScanInput for OwnedLeftover {
    type Cursor = OwnedCursor;
    type Leftover = OwnedLeftover;

    fn into_cursor(self) -> Self::Cursor {
        OwnedCursor::with_offset(self.src, self.pos)
    }

    fn finish(cursor: Self::Cursor) -> Self::Leftover {
        let (src, pos) = cursor.into_parts();
        OwnedLeftover::new(src, pos)
    }
}

/// Leftover of a type-erased source: the putback ring plus whatever the
/// underlying iterator still holds. When the erased input owned its
/// container, this tail owns it too.
pub struct ErasedLeftover<'a> {
    cursor: ErasedCursor<'a>,
}

impl<'a> ErasedLeftover<'a> {
    pub(crate) fn new(cursor: ErasedCursor<'a>) -> Self {
        Self { cursor }
    }

    /// True when no units remain. Pulls on the source to find out, which is
    /// why this needs `&mut`.
    pub fn is_empty(&mut self) -> bool {
        self.cursor.at_end()
    }
}

impl Iterator for ErasedLeftover<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.cursor.next_untracked()
    }
}

impl core::fmt::Debug for ErasedLeftover<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ErasedLeftover").finish_non_exhaustive()
    }
}

impl<'a> ScanInput for ErasedLeftover<'a> {
    type Cursor = ErasedCursor<'a>;
    type Leftover = ErasedLeftover<'a>;

    fn into_cursor(self) -> Self::Cursor {
        self.cursor
    }

    fn finish(cursor: Self::Cursor) -> Self::Leftover {
        ErasedLeftover::new(cursor)
    }
}

// --- ScanInput for the primary source types -------------------------------

impl<'a> ScanInput for &'a str {
    type Cursor = StrCursor<'a>;
    type Leftover = StrLeftover<'a>;

    fn into_cursor(self) -> Self::Cursor {
        StrCursor::new(self)
    }

    fn finish(cursor: Self::Cursor) -> Self::Leftover {
        StrLeftover::new(cursor.rest_str())
    }
}

impl<'a> ScanInput for &'a String {
    type Cursor = StrCursor<'a>;
    type Leftover = StrLeftover<'a>;

    fn into_cursor(self) -> Self::Cursor {
        StrCursor::new(self)
    }

    fn finish(cursor: Self::Cursor) -> Self::Leftover {
        StrLeftover::new(cursor.rest_str())
    }
}

impl ScanInput for String {
    type Cursor = OwnedCursor;
    type Leftover = OwnedLeftover;

    fn into_cursor(self) -> Self::Cursor {
        OwnedCursor::new(self)
    }

    fn finish(cursor: Self::Cursor) -> Self::Leftover {
        let (src, pos) = cursor.into_parts();
        OwnedLeftover::new(src, pos)
    }
}
