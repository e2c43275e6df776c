//! The streamed source: standard input with carry-over buffering.
//!
//! Scanning needs lookahead, but units pulled from stdin cannot be pushed
//! back into the operating system. The cursor therefore keeps everything it
//! fetched this call in a local buffer, and `sync` parks the unconsumed
//! tail in a process-wide carry store so the next `input`/`prompt` call
//! sees it first. The caller serializes access; the mutex only guards the
//! hand-off.

use std::io::Read;
use std::sync::Mutex;
use std::vec::Vec;

use crate::error::{Error, ErrorKind, Result};

use super::{sealed::Sealed, Cursor};

/// Units fetched from stdin but not consumed by any finished call.
static CARRY: Mutex<Vec<u8>> = Mutex::new(Vec::new());

/// Cursor over standard input; the `streamed` category.
pub struct StdinCursor<R> {
    reader: R,
    fetched: Vec<u8>,
    pos: usize,
    mark: usize,
    eof: bool,
}

impl StdinCursor<std::io::StdinLock<'static>> {
    pub(crate) fn lock() -> Self {
        let carried = core::mem::take(&mut *CARRY.lock().expect("stdin carry poisoned"));
        Self::with_reader(std::io::stdin().lock(), carried)
    }
}

impl<R: Read> StdinCursor<R> {
    pub(crate) fn with_reader(reader: R, carried: Vec<u8>) -> Self {
        Self {
            reader,
            fetched: carried,
            pos: 0,
            mark: 0,
            eof: false,
        }
    }

    /// Commits the consumed prefix and parks the unconsumed tail for the
    /// next call. Returns a snapshot of that tail.
    pub(crate) fn sync(self) -> Vec<u8> {
        let tail = self.fetched[self.pos..].to_vec();
        *CARRY.lock().expect("stdin carry poisoned") = tail.clone();
        tail
    }

    fn fetch_unit(&mut self) -> Result<Option<u8>> {
        if self.eof {
            return Ok(None);
        }
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(None);
                }
                Ok(_) => return Ok(Some(byte[0])),
                Err(err) if err.kind() == std::io::ErrorKind::Interrupted => {}
                Err(_) => {
                    return Err(Error::new(
                        ErrorKind::UnrecoverableSourceError,
                        "read from stdin failed",
                    ))
                }
            }
        }
    }
}

impl<R> Sealed for StdinCursor<R> {}

impl<R: Read> Cursor for StdinCursor<R> {
    fn rest(&self) -> Option<&str> {
        None
    }

    fn read_unit(&mut self) -> Result<u8> {
        if self.pos < self.fetched.len() {
            let unit = self.fetched[self.pos];
            self.pos += 1;
            return Ok(unit);
        }
        match self.fetch_unit()? {
            Some(unit) => {
                self.fetched.push(unit);
                self.pos += 1;
                Ok(unit)
            }
            None => Err(Error::end_of_range()),
        }
    }

    fn putback(&mut self, unit: u8) {
        debug_assert!(self.pos > 0);
        debug_assert_eq!(self.fetched[self.pos - 1], unit);
        self.pos -= 1;
    }

    fn advance_by(&mut self, n: usize) {
        debug_assert!(self.pos + n <= self.fetched.len());
        self.pos += n;
    }

    fn set_rollback(&mut self) {
        self.mark = self.pos;
    }

    fn reset_to_rollback(&mut self) {
        self.pos = self.mark;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_carry_before_reader() {
        let mut cur = StdinCursor::with_reader(&b"def"[..], b"abc".to_vec());
        let mut got = Vec::new();
        while let Ok(unit) = cur.read_unit() {
            got.push(unit);
        }
        assert_eq!(got, b"abcdef");
    }

    #[test]
    fn rollback_rereads_fetched_units() {
        let mut cur = StdinCursor::with_reader(&b"12"[..], Vec::new());
        cur.set_rollback();
        assert_eq!(cur.read_unit().unwrap(), b'1');
        cur.reset_to_rollback();
        assert_eq!(cur.read_unit().unwrap(), b'1');
        assert_eq!(cur.read_unit().unwrap(), b'2');
    }
}
