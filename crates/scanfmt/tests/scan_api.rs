//! End-to-end behavior of the core scanning entry points.

use scanfmt::{
    args, parse_integer, scan, scan_default, scan_localized, scan_value, CustomLocale, ErrorKind,
};

#[test]
fn scans_a_decimal_int() {
    let mut i = 0i32;
    let r = scan("123", "{}", &mut args![i]);
    assert!(r.is_ok());
    assert_eq!(i, 123);
    assert!(r.leftover().is_empty());
}

#[test]
fn reports_invalid_value_with_leftover_at_start() {
    let mut i = 0i32;
    let r = scan("abc", "{}", &mut args![i]);
    assert_eq!(r.err().unwrap().kind(), ErrorKind::InvalidScannedValue);
    assert_eq!(r.leftover().as_str(), "abc");
    assert_eq!(i, 0);
}

#[test]
fn skips_leading_whitespace_and_leaves_the_tail() {
    let mut i = 0i32;
    let r = scan("  42x", "{}", &mut args![i]);
    assert!(r.is_ok());
    assert_eq!(i, 42);
    assert_eq!(r.leftover().as_str(), "x");
}

#[test]
fn scan_value_returns_the_value() {
    let r = scan_value::<i32, _>("42");
    assert!(r.is_ok());
    assert_eq!(r.value(), Some(42));
    assert!(r.leftover().is_empty());
}

#[test]
fn scan_default_walks_bare_slots() {
    let mut a = 0u8;
    let mut b = String::new();
    let mut c = 0f64;
    let r = scan_default("7 word 2.5", &mut args![a, b, c]);
    assert!(r.is_ok());
    assert_eq!((a, b.as_str(), c), (7, "word", 2.5));
}

#[test]
fn localized_decimal_comma() {
    let fi = CustomLocale {
        decimal_point: ',',
        thousands_separator: ' ',
        ..CustomLocale::default()
    };
    let mut d = 0f64;
    let r = scan_localized(&fi, "3,14", "{:l}", &mut args![d]);
    assert!(r.is_ok());
    assert!((d - 3.14).abs() < 1e-12);
}

#[test]
fn default_scans_ignore_any_bound_locale() {
    // The same input scanned in default mode gives the same answer no
    // matter what locale the process (or a neighboring call) uses.
    let fi = CustomLocale {
        decimal_point: ',',
        ..CustomLocale::default()
    };
    let mut plain_before = 0f64;
    let mut localized = 0f64;
    let mut plain_after = 0f64;
    assert!(scan("2.5", "{}", &mut args![plain_before]).is_ok());
    assert!(scan_localized(&fi, "2,5", "{:l}", &mut args![localized]).is_ok());
    assert!(scan("2.5", "{}", &mut args![plain_after]).is_ok());
    assert_eq!(plain_before, plain_after);
    // And a non-`l` specifier never consults the locale either.
    let mut unflagged = 0f64;
    let r = scan_localized(&fi, "2.5", "{}", &mut args![unflagged]);
    assert!(r.is_ok());
    assert_eq!(unflagged, 2.5);
}

#[test]
fn parse_integer_reports_consumed_length() {
    let (value, used) = parse_integer::<u32>("ff", 16).unwrap();
    assert_eq!((value, used), (255, 2));

    let (value, used) = parse_integer::<i64>("-42 tail", 10).unwrap();
    assert_eq!((value, used), (-42, 3));
}

#[test]
fn integer_overflow_boundaries() {
    let mut small = 0i8;
    assert!(scan("-128", "{}", &mut args![small]).is_ok());
    assert_eq!(small, i8::MIN);

    let r = scan("-129", "{}", &mut args![small]);
    assert_eq!(r.err().unwrap().kind(), ErrorKind::ValueOutOfRange);
    // The cursor is back where the number began.
    assert_eq!(r.leftover().as_str(), "-129");
}

#[test]
fn argument_assignment_is_in_specifier_order() {
    let mut a = 0i32;
    let mut b = 0i32;
    let mut c = 0i32;
    let r = scan("1 2 x", "{} {} {}", &mut args![a, b, c]);
    assert!(!r.is_ok());
    // Slots before the failing one hold their values; later ones don't.
    assert_eq!((a, b, c), (1, 2, 0));
    assert_eq!(r.leftover().as_str(), "x");
}

#[test]
fn leftover_chaining_is_idempotent() {
    let mut i = 0i32;
    let r = scan("5 rest", "{}", &mut args![i]);
    assert!(r.is_ok());
    let leftover = r.into_leftover();
    let chained = scan(leftover, "", &mut []);
    assert!(chained.is_ok());
    assert_eq!(chained.leftover().as_str(), leftover.as_str());
}

#[test]
fn borrowed_leftover_is_zero_copy() {
    let src = String::from("10 20 30");
    let mut i = 0i32;
    let r = scan(&src, "{}", &mut args![i]);
    assert!(r.is_ok());
    let view = r.leftover().as_str();
    // The view points inside the original allocation.
    let start = src.as_ptr() as usize;
    let ptr = view.as_ptr() as usize;
    assert!(ptr >= start && ptr <= start + src.len());
    assert_eq!(view, " 20 30");
}

#[test]
fn owned_input_keeps_its_tail() {
    let mut i = 0i32;
    let r = scan(String::from("1 rest"), "{}", &mut args![i]);
    assert!(r.is_ok());
    assert_eq!(r.leftover().as_str(), " rest");
    let tail = r.into_leftover().into_string();
    assert_eq!(tail, " rest");
}

#[test]
fn owned_leftover_rescans() {
    let mut a = 0i32;
    let mut b = 0i32;
    let r = scan(String::from("1 2"), "{}", &mut args![a]);
    assert!(r.is_ok());
    let r = scan(r.into_leftover(), "{}", &mut args![b]);
    assert!(r.is_ok());
    assert_eq!((a, b), (1, 2));
}

#[test]
fn hex_binary_octal_specifiers() {
    let mut h = 0u32;
    let mut b = 0u32;
    let mut o = 0u32;
    let r = scan("ff 1010 17", "{:x} {:b} {:o}", &mut args![h, b, o]);
    assert!(r.is_ok());
    assert_eq!((h, b, o), (0xff, 0b1010, 0o17));
}

#[test]
fn grouped_integers_under_the_tick_flag() {
    let mut n = 0i64;
    let r = scan("1,234,567", "{:'d}", &mut args![n]);
    assert!(r.is_ok());
    assert_eq!(n, 1_234_567);

    // Without the flag the separator ends the number.
    let mut n = 0i64;
    let r = scan("1,234", "{}", &mut args![n]);
    assert!(r.is_ok());
    assert_eq!(n, 1);
    assert_eq!(r.leftover().as_str(), ",234");
}

#[test]
fn bool_digits_and_localized_names() {
    let mut x = true;
    assert!(scan("0", "{}", &mut args![x]).is_ok());
    assert!(!x);

    let r = scan("true", "{}", &mut args![x]);
    assert_eq!(r.err().unwrap().kind(), ErrorKind::InvalidScannedValue);
    assert_eq!(r.leftover().as_str(), "true");

    assert!(scan("true", "{:l}", &mut args![x]).is_ok());
    assert!(x);
}

#[test]
fn char_and_charset() {
    let mut c = ' ';
    let mut rest = String::new();
    let r = scan("a-bc!", "{:c}-{:[b-c]}", &mut args![c, rest]);
    assert!(r.is_ok());
    assert_eq!((c, rest.as_str()), ('a', "bc"));
    assert_eq!(r.leftover().as_str(), "!");
}

#[test]
fn unmatched_literal_reports_where_it_stopped() {
    let mut a = 0i32;
    let mut b = 0i32;
    let r = scan("12-34", "{}+{}", &mut args![a, b]);
    assert_eq!(r.err().unwrap().kind(), ErrorKind::InvalidScannedValue);
    assert_eq!(r.leftover().as_str(), "-34");
}

#[test]
fn exhausted_input_mid_format() {
    let mut a = 0i32;
    let mut b = 0i32;
    let r = scan("5", "{} {}", &mut args![a, b]);
    // The second slot finds no digits at all, which is a missing value.
    assert_eq!(r.err().unwrap().kind(), ErrorKind::InvalidScannedValue);
    assert_eq!((a, b), (5, 0));
}
