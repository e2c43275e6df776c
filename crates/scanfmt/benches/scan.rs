use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use scanfmt::{args, parse_integer, scan, scan_list};

fn bench_scan_ints(c: &mut Criterion) {
    let input = "1234 -5678 91011 1213141516";
    let mut group = c.benchmark_group("scan");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("four_ints", |b| {
        b.iter(|| {
            let (mut w, mut x, mut y, mut z) = (0i64, 0i64, 0i64, 0i64);
            let r = scan(black_box(input), "{} {} {} {}", &mut args![w, x, y, z]);
            assert!(r.is_ok());
            (w, x, y, z)
        });
    });
    group.finish();
}

fn bench_scan_tokens(c: &mut Criterion) {
    let input = "lorem ipsum dolor sit amet consectetur adipiscing elit";
    let mut group = c.benchmark_group("scan");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("word_list", |b| {
        b.iter(|| {
            let mut words: Vec<String> = Vec::with_capacity(8);
            let r = scan_list(black_box(input), &mut words);
            assert!(r.is_ok());
            words
        });
    });
    group.finish();
}

fn bench_parse_integer(c: &mut Criterion) {
    c.bench_function("parse_integer_u64", |b| {
        b.iter(|| parse_integer::<u64>(black_box("18446744073709551615"), 10).unwrap());
    });
}

criterion_group!(
    benches,
    bench_scan_ints,
    bench_scan_tokens,
    bench_parse_integer
);
criterion_main!(benches);
