use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use intervals::{Domain, Interval, IntervalSet};

fn construction(c: &mut Criterion) {
    c.bench_function("parse bracket form", |b| {
        b.iter(|| Interval::new(Domain::Integer, black_box("[1, 100)")))
    });
    c.bench_function("guess domain", |b| {
        b.iter(|| Interval::guess(black_box("[2000-01-01, 2000-12-31]")))
    });
}

fn operators(c: &mut Criterion) {
    let a = Interval::integer([1, 50]).expect("left");
    let z = Interval::integer([25, 75]).expect("right");
    c.bench_function("intersection", |b| b.iter(|| black_box(&a).intersection(black_box(&z))));
    c.bench_function("addition", |b| b.iter(|| black_box(&a).checked_add(black_box(&z))));
    c.bench_function("equality", |b| b.iter(|| black_box(&a) == black_box(&z)));
}

fn simplify(c: &mut Criterion) {
    // odd members reach the lower bound of the next one
    let members: Vec<[i64; 2]> = (0..1_000).map(|i| [i * 3, i * 3 + (i % 2) * 2 + 1]).collect();
    c.bench_function("simplify 1000 members", |b| {
        b.iter(|| IntervalSet::with_domain(Domain::Integer, black_box(members.clone())))
    });
}

criterion_group!(benches, construction, operators, simplify);
criterion_main!(benches);
