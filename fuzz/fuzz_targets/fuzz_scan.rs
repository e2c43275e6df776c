#![no_main]
use libfuzzer_sys::fuzz_target;
use scanfmt::{args, getline, parse_float, parse_integer, scan, scan_list, Erased};

/// Formats exercising every typed scanner; picked by the first input byte.
static FORMATS: &[&str] = &[
    "{}",
    "{} {}",
    "{:x} {:b}",
    "{:'d}",
    "{:l} {:l}",
    "{} {:c} {}",
    "lit {} eral {}",
    "{:8s} {:[a-z0-9]}",
    "{1} {0}",
    "{:e}{:g}",
];

fuzz_target!(|data: &[u8]| {
    let Some((&selector, payload)) = data.split_first() else {
        return;
    };
    let Ok(text) = core::str::from_utf8(payload) else {
        // Arbitrary bytes still have to be safe through the erased path.
        let mut n = 0i64;
        let _ = scan(
            Erased::from_units(payload.iter().copied()),
            "{}",
            &mut args![n],
        );
        return;
    };

    let format = FORMATS[usize::from(selector) % FORMATS.len()];
    let mut a = 0i64;
    let mut b = 0u32;
    let mut c = ' ';
    let mut s = String::new();

    // Whatever the outcome, the result must carry a leftover that stays
    // inside the input and a re-scan of it must not panic.
    let r = scan(text, format, &mut args![a, s, c, b]);
    let leftover = r.into_leftover();
    assert!(leftover.len() <= text.len());
    let _ = scan(leftover, "{}", &mut args![a]);

    let mut values: Vec<f64> = Vec::new();
    let _ = scan_list(text, &mut values);

    let mut line = String::new();
    let _ = getline(text, &mut line);

    if !text.is_empty() && !text.starts_with(['+', ' ', '\t', '\n']) {
        let _ = parse_integer::<i32>(text, 10);
        let _ = parse_float::<f64>(text);
    }
});
