//! Brace-format input scanning: the reading counterpart of format-string
//! output.
//!
//! Give any supported character source and a `{…}` format string; get typed
//! values out, plus the *leftover* portion of the input so scanning can
//! continue where it stopped:
//!
//! ```
//! use scanfmt::{args, scan};
//!
//! let mut day = 0u8;
//! let mut month = String::new();
//! let r = scan("24 Dec remaining", "{} {}", &mut args![day, month]);
//! assert!(r.is_ok());
//! assert_eq!((day, month.as_str()), (24, "Dec"));
//! assert_eq!(r.leftover().as_str(), " remaining");
//! ```
//!
//! Scanning is locale-independent by default (the process locale is never
//! consulted) and zero-copy where the input permits: for contiguous
//! sources the leftover is a borrowed sub-view of the original storage.
//! Non-contiguous sequences are wrapped behind [`Erased`], and with the
//! `std` feature [`input`]/[`prompt`] bind scans to standard input.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod api;
mod error;
mod format;
mod locale;
mod range;
mod result;
mod scan;
#[cfg(feature = "std")]
mod stdio;
mod unicode;

pub use api::{
    getline, getline_with, ignore_until, ignore_until_n, parse_float, parse_integer, scan,
    scan_default, scan_list, scan_list_sep, scan_list_until, scan_list_until_sep, scan_localized,
    scan_value, span_list, ListSink, SpanList,
};
pub use error::{Error, ErrorKind};
pub use format::{CharSet, FloatFormat, IntBase, Specifier, TypeSpec};
pub use locale::{AsciiLocale, CustomLocale, Locale};
pub use range::{Cursor, Erased, ErasedCursor, OwnedCursor, ScanInput, StrCursor};
pub use result::{ErasedLeftover, OwnedLeftover, ScanResult, StrLeftover, ValueResult};
pub use scan::{Arg, Float, Integer, ScanContext, ScanValue, UserScanner};
#[cfg(feature = "std")]
pub use stdio::{input, prompt, StreamLeftover};
