//! Standard-input entry points (`std` feature).
//!
//! `input` binds a scan to the process-wide stdin range and synchronizes on
//! return: units fetched but not consumed are parked for the next call, so
//! `input("{}", …)` twice against the line `1 2` sees both numbers. The
//! caller serializes these calls; the library only guards the hand-off.

use std::io::Write;
use std::vec::Vec;

use crate::{
    locale::AsciiLocale,
    range::stdio::StdinCursor,
    result::ScanResult,
    scan::{vscan, Arg},
};

/// Leftover of a streamed source: a snapshot of the units that were fetched
/// past the last consumed position. The same units are parked internally
/// for the next `input` call, so this is a peek, not a drain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamLeftover {
    tail: Vec<u8>,
}

impl StreamLeftover {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tail.is_empty()
    }

    /// The parked units.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.tail
    }
}

/// Reads from standard input according to `format`. Buffered lookahead is
/// committed (`sync`) before returning.
///
/// ```no_run
/// use scanfmt::{args, input};
///
/// let mut n = 0u32;
/// let r = input("{}", &mut args![n]);
/// ```
pub fn input(format: &str, args: &mut [Arg<'_>]) -> ScanResult<StreamLeftover> {
    let mut cur = StdinCursor::lock();
    let err = vscan(&mut cur, &AsciiLocale, format, args).err();
    let tail = cur.sync();
    ScanResult::new(StreamLeftover { tail }, err)
}

/// Writes `text` to standard output, then delegates to [`input`].
///
/// ```no_run
/// use scanfmt::{args, prompt};
///
/// let mut n = 0u32;
/// let r = prompt("favorite number? ", "{}", &mut args![n]);
/// ```
pub fn prompt(text: &str, format: &str, args: &mut [Arg<'_>]) -> ScanResult<StreamLeftover> {
    let mut stdout = std::io::stdout().lock();
    let _ = stdout.write_all(text.as_bytes());
    let _ = stdout.flush();
    drop(stdout);
    input(format, args)
}
