//! Pull typed fields out of a little CSV-ish line, then keep scanning the
//! leftover.
//!
//! Run with: `cargo run --example csv_row`

use scanfmt::{args, scan, scan_list_sep};

fn main() {
    let row = "tycho-1; 42; 0.97; true | 10, 20, 30";

    let mut name = String::new();
    let mut id = 0u32;
    let mut score = 0f64;
    let mut active = false;
    let r = scan(
        row,
        "{:[a-z0-9-]}; {}; {}; {:l} | ",
        &mut args![name, id, score, active],
    );
    assert!(r.is_ok(), "scan failed: {:?}", r.err());
    println!("name={name} id={id} score={score} active={active}");

    let mut readings: Vec<i32> = Vec::new();
    let tail = scan_list_sep(r.into_leftover(), &mut readings, ',');
    assert!(tail.is_ok());
    println!("readings={readings:?}");
}
