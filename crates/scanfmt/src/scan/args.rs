//! Argument handles: the typed slots a scan call writes into.
//!
//! [`Arg`] is a closed tagged enum over the primitive out-references plus a
//! single erased variant for user scanners, so slot dispatch is a `match`,
//! not a virtual call. Handles live only for the duration of one scan call.

use alloc::string::String;

use crate::{
    error::Result,
    format::Specifier,
    locale::Locale,
    range::{peek_unit, read_point, Cursor},
};

/// One out-reference, tagged with its type.
///
/// Build these with [`Arg::from`] on a `&mut` reference, or with the
/// [`args!`](crate::args) macro:
///
/// ```
/// use scanfmt::{scan, args};
///
/// let mut i = 0i32;
/// let mut word = String::new();
/// let r = scan("7 up", "{} {}", &mut args![i, word]);
/// assert!(r.is_ok());
/// assert_eq!((i, word.as_str()), (7, "up"));
/// ```
pub enum Arg<'a> {
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    I128(&'a mut i128),
    Isize(&'a mut isize),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    U128(&'a mut u128),
    Usize(&'a mut usize),
    F32(&'a mut f32),
    F64(&'a mut f64),
    Bool(&'a mut bool),
    Char(&'a mut char),
    Str(&'a mut String),
    /// A fixed-size buffer of code units; the scan fills a non-space prefix.
    Span(&'a mut [u8]),
    /// Scans a value of the specifier's type and drops it.
    Discard,
    /// A user-registered scanner with `parse`/`scan` hooks.
    User(&'a mut dyn UserScanner),
}

macro_rules! impl_from_arg {
    ($($variant:ident => $t:ty),* $(,)?) => {$(
        impl<'a> From<&'a mut $t> for Arg<'a> {
            fn from(out: &'a mut $t) -> Self {
                Arg::$variant(out)
            }
        }
    )*};
}

impl_from_arg! {
    I8 => i8, I16 => i16, I32 => i32, I64 => i64, I128 => i128, Isize => isize,
    U8 => u8, U16 => u16, U32 => u32, U64 => u64, U128 => u128, Usize => usize,
    F32 => f32, F64 => f64,
    Bool => bool, Char => char, Str => String, Span => [u8],
}

impl<'a> Arg<'a> {
    /// Wraps a user scanner.
    pub fn user<U: UserScanner>(scanner: &'a mut U) -> Self {
        Arg::User(scanner)
    }

    /// A slot whose scanned value is thrown away.
    #[must_use]
    pub fn discard() -> Self {
        Arg::Discard
    }
}

impl core::fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Arg::I8(_) => "i8",
            Arg::I16(_) => "i16",
            Arg::I32(_) => "i32",
            Arg::I64(_) => "i64",
            Arg::I128(_) => "i128",
            Arg::Isize(_) => "isize",
            Arg::U8(_) => "u8",
            Arg::U16(_) => "u16",
            Arg::U32(_) => "u32",
            Arg::U64(_) => "u64",
            Arg::U128(_) => "u128",
            Arg::Usize(_) => "usize",
            Arg::F32(_) => "f32",
            Arg::F64(_) => "f64",
            Arg::Bool(_) => "bool",
            Arg::Char(_) => "char",
            Arg::Str(_) => "String",
            Arg::Span(_) => "span",
            Arg::Discard => "discard",
            Arg::User(_) => "user",
        };
        f.debug_tuple("Arg").field(&name).finish()
    }
}

/// A scanner for a user-defined type.
///
/// `parse` inspects the specifier body (reject flags that make no sense for
/// the type); `scan` consumes input through the [`ScanContext`], typically
/// by recursing into a sub-format:
///
/// ```
/// use scanfmt::{args, Arg, ScanContext, UserScanner};
///
/// #[derive(Default)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl UserScanner for Point {
///     fn scan(&mut self, ctx: &mut ScanContext<'_>) -> Result<(), scanfmt::Error> {
///         ctx.scan_fields("[{}, {}]", &mut args![self.x, self.y])
///     }
/// }
///
/// let mut p = Point::default();
/// let r = scanfmt::scan("[1, 2]", "{}", &mut [Arg::user(&mut p)]);
/// assert!(r.is_ok());
/// assert_eq!((p.x, p.y), (1, 2));
/// ```
pub trait UserScanner {
    /// Inspects the parsed specifier. The default accepts anything.
    fn parse(&mut self, spec: &Specifier) -> Result<()> {
        let _ = spec;
        Ok(())
    }

    /// Scans the value.
    fn scan(&mut self, ctx: &mut ScanContext<'_>) -> Result<()>;
}

/// What a [`UserScanner`] sees: the cursor, the bound locale, and the
/// specifier that selected it.
pub struct ScanContext<'r> {
    pub(crate) cursor: &'r mut (dyn Cursor + 'r),
    pub(crate) locale: &'r dyn Locale,
    pub(crate) spec: &'r Specifier,
}

impl ScanContext<'_> {
    /// The specifier that routed to this scanner.
    #[must_use]
    pub fn spec(&self) -> &Specifier {
        self.spec
    }

    /// Runs a sub-format against sub-arguments at the current position.
    /// Rollback on failure is handled per inner specifier, exactly as in a
    /// top-level scan.
    pub fn scan_fields(&mut self, format: &str, args: &mut [Arg<'_>]) -> Result<()> {
        super::vscan(self.cursor, self.locale, format, args)
    }

    /// Reads one code point.
    pub fn read_char(&mut self) -> Result<char> {
        read_point(self.cursor)
    }

    /// Peeks the next code unit without consuming it.
    pub fn peek_unit(&mut self) -> Result<u8> {
        peek_unit(self.cursor)
    }

    /// Skips locale whitespace, returning how many points were skipped.
    pub fn skip_whitespace(&mut self) -> usize {
        super::skip_space(self.cursor, self.locale)
    }
}

/// Builds a fixed-size `[Arg; N]` from `&mut`-able places.
///
/// `args![i, word]` is `[Arg::from(&mut i), Arg::from(&mut word)]`.
#[macro_export]
macro_rules! args {
    ($($out:expr),* $(,)?) => {
        [$($crate::Arg::from(&mut $out)),*]
    };
}

/// Sugar over [`scan`](crate::scan) for the common case of scanning into
/// locals, converted into a plain `Result` over the leftover:
///
/// ```
/// let mut a = 0i64;
/// let mut b = String::new();
/// let rest = scanfmt::scan!("10 ten...", "{} {}", a, b).unwrap();
/// assert_eq!((a, b.as_str(), rest.as_str()), (10, "ten...", ""));
/// ```
#[macro_export]
macro_rules! scan {
    ($input:expr, $fmt:expr $(, $out:expr)* $(,)?) => {{
        let result = $crate::scan($input, $fmt, &mut $crate::args![$($out),*]);
        result.into_result()
    }};
}
