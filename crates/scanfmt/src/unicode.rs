//! Code-unit level UTF-8 and UTF-16 decoding.
//!
//! The cursor layer works on bytes; these helpers turn code units back into
//! scalar values. Decoding is strict: an invalid lead unit, a missing or
//! malformed continuation, and a lone UTF-16 surrogate are all reported, never
//! silently replaced.

use crate::error::{Error, ErrorKind, Result};

pub(crate) const MAX_UTF8_LEN: usize = 4;

fn invalid_encoding(msg: &'static str) -> Error {
    Error::new(ErrorKind::InvalidEncoding, msg)
}

/// Expected sequence length for a UTF-8 lead byte, using the standard
/// leading-byte masks. Continuation and invalid lead bytes return `None`.
pub(crate) fn utf8_seq_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// Decodes the first code point of `buf`, which must hold a complete
/// sequence of `utf8_seq_len(buf[0])` bytes.
pub(crate) fn decode_utf8(buf: &[u8]) -> Result<char> {
    let s = core::str::from_utf8(buf)
        .map_err(|_| invalid_encoding("malformed UTF-8 sequence"))?;
    s.chars()
        .next()
        .ok_or_else(|| invalid_encoding("empty UTF-8 sequence"))
}

/// Decodes one scalar value from a stream of UTF-16 code units.
///
/// `next` yields the unit following `lead` when a surrogate pair is needed;
/// it is only invoked for high surrogates. Lone surrogates are invalid.
pub(crate) fn decode_utf16<F>(lead: u16, next: F) -> Result<char>
where
    F: FnOnce() -> Option<u16>,
{
    match lead {
        0xD800..=0xDBFF => {
            let trail = next().ok_or_else(|| invalid_encoding("unpaired high surrogate"))?;
            if !(0xDC00..=0xDFFF).contains(&trail) {
                return Err(invalid_encoding("expected low surrogate"));
            }
            let cp = 0x10000 + ((u32::from(lead) - 0xD800) << 10) + (u32::from(trail) - 0xDC00);
            char::from_u32(cp).ok_or_else(|| invalid_encoding("surrogate pair out of range"))
        }
        0xDC00..=0xDFFF => Err(invalid_encoding("unpaired low surrogate")),
        unit => char::from_u32(u32::from(unit))
            .ok_or_else(|| invalid_encoding("invalid UTF-16 unit")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_len_classes() {
        assert_eq!(utf8_seq_len(b'a'), Some(1));
        assert_eq!(utf8_seq_len(0xC3), Some(2)); // å lead
        assert_eq!(utf8_seq_len(0xE2), Some(3));
        assert_eq!(utf8_seq_len(0xF0), Some(4));
        assert_eq!(utf8_seq_len(0x80), None); // continuation
        assert_eq!(utf8_seq_len(0xFF), None);
    }

    #[test]
    fn decode_multi_byte() {
        assert_eq!(decode_utf8("å".as_bytes()).unwrap(), 'å');
        assert_eq!(decode_utf8("👍".as_bytes()).unwrap(), '👍');
        assert_eq!(
            decode_utf8(&[0xC3, 0x28]).unwrap_err().kind(),
            ErrorKind::InvalidEncoding
        );
    }

    #[test]
    fn utf16_pairs_and_lone_surrogates() {
        assert_eq!(decode_utf16(0x0041, || None).unwrap(), 'A');
        assert_eq!(decode_utf16(0xD83D, || Some(0xDC4D)).unwrap(), '👍');
        assert!(decode_utf16(0xD83D, || None).is_err());
        assert!(decode_utf16(0xDC4D, || None).is_err());
    }
}
