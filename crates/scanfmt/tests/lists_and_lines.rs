//! Line reading, ignoring, and list scanning.

use scanfmt::{
    getline, getline_with, ignore_until, ignore_until_n, scan_list, scan_list_sep,
    scan_list_until, span_list, ErrorKind,
};

#[test]
fn getline_stops_at_and_consumes_the_newline() {
    let mut line = String::new();
    let r = getline("hello\nworld", &mut line);
    assert!(r.is_ok());
    assert_eq!(line, "hello");
    assert_eq!(r.leftover().as_str(), "world");
}

#[test]
fn getline_chains_to_the_last_line() {
    let mut line = String::new();
    let r = getline("one\ntwo", &mut line);
    assert_eq!(line, "one");
    let r = getline(r.into_leftover(), &mut line);
    assert!(r.is_ok());
    assert_eq!(line, "two");
    assert!(r.leftover().is_empty());
}

#[test]
fn getline_without_delimiter_returns_the_rest() {
    let mut line = String::new();
    let r = getline("no newline here", &mut line);
    assert!(r.is_ok());
    assert_eq!(line, "no newline here");
    assert!(r.leftover().is_empty());
}

#[test]
fn getline_on_empty_input_is_end_of_range() {
    let mut line = String::from("untouched?");
    let r = getline("", &mut line);
    assert_eq!(r.err().unwrap().kind(), ErrorKind::EndOfRange);
}

#[test]
fn getline_with_custom_delimiter() {
    let mut field = String::new();
    let r = getline_with("a;b;c", &mut field, ';');
    assert!(r.is_ok());
    assert_eq!(field, "a");
    assert_eq!(r.leftover().as_str(), "b;c");
}

#[test]
fn ignore_until_stops_before_the_target() {
    let r = ignore_until::<&str>("skip all this\nkeep", '\n');
    assert!(r.is_ok());
    assert_eq!(r.leftover().as_str(), "\nkeep");

    // Running out of input is fine.
    let r = ignore_until::<&str>("no target", '\n');
    assert!(r.is_ok());
    assert!(r.leftover().is_empty());
}

#[test]
fn ignore_until_n_is_bounded() {
    let r = ignore_until_n::<&str>("abcdef", 3, 'z');
    assert!(r.is_ok());
    assert_eq!(r.leftover().as_str(), "def");
}

#[test]
fn scan_list_of_ints() {
    let mut values: Vec<i32> = Vec::new();
    let r = scan_list("123 456", &mut values);
    assert!(r.is_ok());
    assert_eq!(values, [123, 456]);
    assert!(r.leftover().is_empty());
}

#[test]
fn scan_list_soft_stops_on_unparsable_input() {
    let mut values: Vec<i32> = Vec::new();
    let r = scan_list("1 2 three", &mut values);
    assert!(r.is_ok());
    assert_eq!(values, [1, 2]);
    assert_eq!(r.leftover().as_str(), "three");
}

#[test]
fn scan_list_with_separator() {
    let mut values: Vec<i32> = Vec::new();
    let r = scan_list_sep("123, 456", &mut values, ',');
    assert!(r.is_ok());
    assert_eq!(values, [123, 456]);
}

#[test]
fn scan_list_until_consumes_the_terminator() {
    let mut values: Vec<i32> = Vec::new();
    let r = scan_list_until("123 456\n789", &mut values, '\n');
    assert!(r.is_ok());
    assert_eq!(values, [123, 456]);
    assert_eq!(r.leftover().as_str(), "789");
}

#[test]
fn scan_list_of_words() {
    let mut words: Vec<String> = Vec::new();
    let r = scan_list("to be or not", &mut words);
    assert!(r.is_ok());
    assert_eq!(words, ["to", "be", "or", "not"]);
}

#[test]
fn span_list_fills_to_capacity_without_error() {
    let mut buf = [0u16; 2];
    let mut sink = span_list(&mut buf);
    let r = scan_list("7 8 9", &mut sink);
    assert!(r.is_ok());
    assert_eq!(sink.filled(), &[7, 8]);
    // The third value was never consumed.
    assert_eq!(r.leftover().as_str(), "9");
}

#[test]
fn list_value_overflow_is_a_real_error() {
    let mut values: Vec<i8> = Vec::new();
    let r = scan_list("1 2 999", &mut values);
    assert_eq!(r.err().unwrap().kind(), ErrorKind::ValueOutOfRange);
    assert_eq!(values, [1, 2]);
    assert_eq!(r.leftover().as_str(), "999");
}
