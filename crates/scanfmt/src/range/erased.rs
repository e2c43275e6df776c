//! Type-erased sources: any sequence presented as a code-unit iterator.
//!
//! Non-contiguous containers cannot offer a zero-copy window or cheap
//! position arithmetic, so the cursor keeps a putback ring in front of the
//! iterator and records consumed units while a rollback point is active;
//! `reset_to_rollback` replays the recording back into the ring.

use alloc::{boxed::Box, collections::VecDeque, vec::Vec};

use crate::error::{Error, Result};

use super::{sealed::Sealed, Cursor, ScanInput};

/// A source wrapped behind a code-unit iterator.
///
/// Whether the erased range is *borrowed* or *owned* is a matter of the
/// iterator's lifetime: iterate by reference and the source stays with the
/// caller, move the container into the iterator and the erased range owns
/// its tail.
///
/// ```
/// use scanfmt::{scan_value, Erased};
///
/// let data = vec![b'4', b'2'];
/// // Borrowed: `data` is still usable afterwards.
/// let r = scan_value::<i32, _>(Erased::from_units(data.iter().copied()));
/// assert_eq!(r.value(), Some(42));
/// drop(r);
/// // Owned: the container moves in.
/// let r = scan_value::<i32, _>(Erased::from_units(data.into_iter()));
/// assert_eq!(r.value(), Some(42));
/// ```
pub struct Erased<'a> {
    iter: Box<dyn Iterator<Item = u8> + 'a>,
}

impl<'a> Erased<'a> {
    /// Erases an iterator of code units.
    pub fn from_units<I>(units: I) -> Self
    where
        I: IntoIterator<Item = u8>,
        I::IntoIter: 'a,
    {
        Self {
            iter: Box::new(units.into_iter()),
        }
    }

    /// Erases an iterator of characters, re-encoding each as UTF-8 units.
    pub fn from_chars<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
        I::IntoIter: 'a,
    {
        Self {
            iter: Box::new(CharUnits {
                inner: chars.into_iter(),
                buf: [0; 4],
                len: 0,
                idx: 0,
            }),
        }
    }

    /// Erases an iterator of UTF-16 code units, combining surrogate pairs.
    /// A lone surrogate is carried through as an invalid unit, so the scan
    /// that reaches it reports an encoding error at that position.
    pub fn from_utf16<I>(units: I) -> Self
    where
        I: IntoIterator<Item = u16>,
        I::IntoIter: 'a,
    {
        Self {
            iter: Box::new(Utf16Units {
                inner: units.into_iter(),
                buf: [0; 4],
                len: 0,
                idx: 0,
            }),
        }
    }
}

impl core::fmt::Debug for Erased<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Erased").finish_non_exhaustive()
    }
}

/// Flattens `char`s into their UTF-8 code units without allocating.
struct CharUnits<I> {
    inner: I,
    buf: [u8; 4],
    len: u8,
    idx: u8,
}

impl<I: Iterator<Item = char>> Iterator for CharUnits<I> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.idx == self.len {
            let ch = self.inner.next()?;
            self.len = ch.encode_utf8(&mut self.buf).len() as u8;
            self.idx = 0;
        }
        let unit = self.buf[self.idx as usize];
        self.idx += 1;
        Some(unit)
    }
}

/// Decodes UTF-16 on the fly and emits UTF-8 code units. An undecodable
/// unit becomes `0xFF`, which no UTF-8 sequence starts with, so the read
/// that lands on it fails with an encoding error.
struct Utf16Units<I> {
    inner: I,
    buf: [u8; 4],
    len: u8,
    idx: u8,
}

impl<I: Iterator<Item = u16>> Iterator for Utf16Units<I> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.idx == self.len {
            let lead = self.inner.next()?;
            match crate::unicode::decode_utf16(lead, || self.inner.next()) {
                Ok(ch) => {
                    self.len = ch.encode_utf8(&mut self.buf).len() as u8;
                }
                Err(_) => {
                    self.buf[0] = 0xFF;
                    self.len = 1;
                }
            }
            self.idx = 0;
        }
        let unit = self.buf[self.idx as usize];
        self.idx += 1;
        Some(unit)
    }
}

/// Cursor for [`Erased`] sources.
pub struct ErasedCursor<'a> {
    iter: Box<dyn Iterator<Item = u8> + 'a>,
    ring: VecDeque<u8>,
    replay: Vec<u8>,
}

impl<'a> ErasedCursor<'a> {
    fn new(source: Erased<'a>) -> Self {
        Self {
            iter: source.iter,
            ring: VecDeque::new(),
            replay: Vec::new(),
        }
    }

    /// True when no units remain. Needs `&mut self` because the only way to
    /// know is to pull on the iterator.
    pub(crate) fn at_end(&mut self) -> bool {
        if !self.ring.is_empty() {
            return false;
        }
        match self.iter.next() {
            Some(unit) => {
                self.ring.push_front(unit);
                false
            }
            None => true,
        }
    }

    /// Drains one unit without recording it for rollback; used when the
    /// cursor has become a leftover and replay no longer applies.
    pub(crate) fn next_untracked(&mut self) -> Option<u8> {
        self.ring.pop_front().or_else(|| self.iter.next())
    }
}

impl core::fmt::Debug for ErasedCursor<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ErasedCursor")
            .field("ring", &self.ring)
            .finish_non_exhaustive()
    }
}

impl Sealed for ErasedCursor<'_> {}

impl Cursor for ErasedCursor<'_> {
    fn rest(&self) -> Option<&str> {
        None
    }

    fn read_unit(&mut self) -> Result<u8> {
        let unit = match self.ring.pop_front() {
            Some(unit) => unit,
            None => self.iter.next().ok_or_else(Error::end_of_range)?,
        };
        self.replay.push(unit);
        Ok(unit)
    }

    fn putback(&mut self, unit: u8) {
        debug_assert_eq!(self.replay.last(), Some(&unit));
        self.replay.pop();
        self.ring.push_front(unit);
    }

    fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            let _ = self.read_unit();
        }
    }

    fn set_rollback(&mut self) {
        self.replay.clear();
    }

    fn reset_to_rollback(&mut self) {
        while let Some(unit) = self.replay.pop() {
            self.ring.push_front(unit);
        }
    }
}

impl<'a> ScanInput for Erased<'a> {
    type Cursor = ErasedCursor<'a>;
    type Leftover = crate::result::ErasedLeftover<'a>;

    fn into_cursor(self) -> Self::Cursor {
        ErasedCursor::new(self)
    }

    fn finish(cursor: Self::Cursor) -> Self::Leftover {
        crate::result::ErasedLeftover::new(cursor)
    }
}
