//! Boolean scanning.
//!
//! The bare form accepts exactly `0` and `1`. Under the `l` flag the
//! locale's `truename`/`falsename` are also accepted, longest match wins,
//! and every consumed unit is put back when neither name pans out.

use crate::{
    error::{Error, ErrorKind, Result},
    format::{Specifier, TypeSpec},
    locale::Locale,
    range::{putback_point, read_point, Cursor},
};

use super::skip_space;

/// Incremental matcher for one spelled-out boolean name.
struct NameMatch<'l> {
    rest: core::str::Chars<'l>,
    value: bool,
    alive: bool,
}

impl<'l> NameMatch<'l> {
    fn new(name: &'l str, value: bool) -> Self {
        Self {
            rest: name.chars(),
            value,
            alive: !name.is_empty(),
        }
    }

    /// Feeds one character; returns `Some(value)` when the name completed.
    fn step(&mut self, ch: char) -> Option<bool> {
        if !self.alive {
            return None;
        }
        match self.rest.next() {
            Some(expected) if expected == ch => {
                if self.rest.as_str().is_empty() {
                    self.alive = false;
                    Some(self.value)
                } else {
                    None
                }
            }
            _ => {
                self.alive = false;
                None
            }
        }
    }
}

pub(crate) fn scan_bool<C, L>(cur: &mut C, loc: &L, spec: &Specifier) -> Result<bool>
where
    C: Cursor + ?Sized,
    L: Locale + ?Sized,
{
    if !matches!(spec.ty, TypeSpec::Default) {
        return Err(Error::new(
            ErrorKind::InvalidFormatString,
            "specifier does not apply to a bool argument",
        ));
    }
    skip_space(cur, loc);

    let first = read_point(cur)?;
    match first {
        '0' => return Ok(false),
        '1' => return Ok(true),
        _ => putback_point(cur, first),
    }
    if !spec.localized {
        return Err(Error::new(
            ErrorKind::InvalidScannedValue,
            "expected '0' or '1'",
        ));
    }

    let mut truename = NameMatch::new(loc.truename(), true);
    let mut falsename = NameMatch::new(loc.falsename(), false);
    let mut taken = alloc::vec::Vec::new();
    let mut matched: Option<(bool, usize)> = None;

    while truename.alive || falsename.alive {
        let ch = match read_point(cur) {
            Ok(ch) => ch,
            Err(err) if err.kind() == ErrorKind::EndOfRange => break,
            Err(err) => return Err(err),
        };
        taken.push(ch);
        // Longest match wins, so a later completion overrides an earlier
        // one (relevant when one name is a prefix of the other).
        if let Some(value) = truename.step(ch) {
            matched = Some((value, taken.len()));
        }
        if let Some(value) = falsename.step(ch) {
            matched = Some((value, taken.len()));
        }
    }

    match matched {
        Some((value, used)) => {
            for &ch in taken[used..].iter().rev() {
                putback_point(cur, ch);
            }
            Ok(value)
        }
        None => {
            for &ch in taken.iter().rev() {
                putback_point(cur, ch);
            }
            Err(Error::new(
                ErrorKind::InvalidScannedValue,
                "expected a boolean",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        locale::{AsciiLocale, CustomLocale},
        range::StrCursor,
    };

    fn spec(localized: bool) -> Specifier {
        Specifier {
            localized,
            ..Specifier::default()
        }
    }

    #[test]
    fn digits_always_work() {
        let mut cur = StrCursor::new("1 0");
        assert!(scan_bool(&mut cur, &AsciiLocale, &spec(false)).unwrap());
        assert!(!scan_bool(&mut cur, &AsciiLocale, &spec(false)).unwrap());
    }

    #[test]
    fn names_need_the_l_flag() {
        let mut cur = StrCursor::new("true");
        let err = scan_bool(&mut cur, &AsciiLocale, &spec(false)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidScannedValue);
        assert_eq!(cur.rest(), Some("true"));

        let mut cur = StrCursor::new("true false");
        assert!(scan_bool(&mut cur, &AsciiLocale, &spec(true)).unwrap());
        assert!(!scan_bool(&mut cur, &AsciiLocale, &spec(true)).unwrap());
    }

    #[test]
    fn failed_name_match_puts_everything_back() {
        let mut cur = StrCursor::new("tragic");
        let err = scan_bool(&mut cur, &AsciiLocale, &spec(true)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidScannedValue);
        assert_eq!(cur.rest(), Some("tragic"));
    }

    #[test]
    fn custom_names_and_longest_match() {
        use alloc::string::ToString;

        let loc = CustomLocale {
            truename: "yes".to_string(),
            falsename: "yesterday".to_string(),
            ..CustomLocale::default()
        };
        let mut cur = StrCursor::new("yesterday!");
        assert!(!scan_bool(&mut cur, &loc, &spec(true)).unwrap());
        assert_eq!(cur.rest(), Some("!"));

        let mut cur = StrCursor::new("yesx");
        assert!(scan_bool(&mut cur, &loc, &spec(true)).unwrap());
        assert_eq!(cur.rest(), Some("x"));
    }
}
