//! Character classification and numeric punctuation, with and without a
//! caller-supplied locale.
//!
//! Default-mode scanning goes through [`AsciiLocale`] and never consults the
//! process locale; results are deterministic regardless of the environment.
//! [`scan_localized`](crate::scan_localized) and the `l` flag bind a
//! [`CustomLocale`] at the call site instead.

use alloc::string::String;

/// Classification callbacks consulted by the typed scanners.
///
/// Every method has a deterministic default; a custom implementation only
/// overrides the pieces it cares about. The trait is object-safe so user
/// scanners can recurse through a type-erased [`ScanContext`].
///
/// [`ScanContext`]: crate::ScanContext
pub trait Locale {
    /// Is `ch` a digit of `base` (2..=36)?
    fn is_digit(&self, ch: char, base: u32) -> bool {
        ch.is_digit(base)
    }

    /// Is `ch` whitespace for the purposes of token delimiting and literal
    /// whitespace skipping?
    fn is_space(&self, ch: char) -> bool {
        ch.is_ascii_whitespace()
    }

    /// Separator accepted between digit groups when the `'` flag is set.
    fn thousands_separator(&self) -> char {
        ','
    }

    /// Radix point accepted inside floating-point values.
    fn decimal_point(&self) -> char {
        '.'
    }

    /// Spelled-out `true`, accepted by `{:l}` boolean scans.
    fn truename(&self) -> &str {
        "true"
    }

    /// Spelled-out `false`, accepted by `{:l}` boolean scans.
    fn falsename(&self) -> &str {
        "false"
    }

    /// Final string-to-float conversion, fed a representation already
    /// normalized to `'.'` as the radix point. Returning `None` makes the
    /// scan fail with an invalid-value error.
    fn parse_float_repr(&self, normalized: &str) -> Option<f64> {
        normalized.parse().ok()
    }
}

/// The static, locale-free profile. This is what every entry point without
/// an explicit locale uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsciiLocale;

impl Locale for AsciiLocale {}

/// A locale bound at the call site.
///
/// The fields mirror what the typed scanners ask of a locale; fill in the
/// ones that differ from the ASCII defaults.
///
/// ```
/// use scanfmt::CustomLocale;
///
/// let fi = CustomLocale {
///     decimal_point: ',',
///     thousands_separator: ' ',
///     ..CustomLocale::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomLocale {
    /// Radix point, e.g. `','` for many European locales.
    pub decimal_point: char,
    /// Digit group separator accepted under the `'` flag.
    pub thousands_separator: char,
    /// Name accepted as `true` under the `l` flag.
    pub truename: String,
    /// Name accepted as `false` under the `l` flag.
    pub falsename: String,
}

impl Default for CustomLocale {
    fn default() -> Self {
        use alloc::string::ToString;

        Self {
            decimal_point: '.',
            thousands_separator: ',',
            truename: "true".to_string(),
            falsename: "false".to_string(),
        }
    }
}

impl Locale for CustomLocale {
    fn thousands_separator(&self) -> char {
        self.thousands_separator
    }

    fn decimal_point(&self) -> char {
        self.decimal_point
    }

    fn truename(&self) -> &str {
        &self.truename
    }

    fn falsename(&self) -> &str {
        &self.falsename
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_defaults() {
        let loc = AsciiLocale;
        assert!(loc.is_digit('7', 10));
        assert!(loc.is_digit('f', 16));
        assert!(!loc.is_digit('g', 16));
        assert!(loc.is_space(' ') && loc.is_space('\n'));
        assert!(!loc.is_space('\u{a0}'));
        assert_eq!(loc.decimal_point(), '.');
        assert_eq!(loc.parse_float_repr("3.5"), Some(3.5));
    }

    #[test]
    fn custom_overrides() {
        use alloc::string::ToString;

        let fi = CustomLocale {
            decimal_point: ',',
            truename: "tosi".to_string(),
            falsename: "epätosi".to_string(),
            ..CustomLocale::default()
        };
        assert_eq!(fi.decimal_point(), ',');
        assert_eq!(fi.truename(), "tosi");
        // Digit classification is not locale-dependent.
        assert!(fi.is_digit('3', 10));
    }
}
