use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fastbitset::BitVector;
use std::hint::black_box;

fn strided(step: usize) -> BitVector {
    let mut bits = BitVector::new();
    for i in 0..1024 {
        bits.set(step * i + 5);
    }
    bits
}

fn bench_bulk_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_operations");
    let b1 = strided(3);
    let b2 = strided(6);

    group.bench_function("clone", |b| {
        b.iter(|| black_box(b1.clone()));
    });

    group.bench_function("union", |b| {
        b.iter(|| black_box(b1.union(black_box(&b2))));
    });

    // A fresh clone per iteration so the in-place union does real work
    group.bench_function("union_with", |b| {
        b.iter_batched_ref(
            || b1.clone(),
            |x| x.union_with(black_box(&b2)),
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function("intersection", |b| {
        b.iter(|| black_box(b1.intersection(black_box(&b2))));
    });

    group.bench_function("difference", |b| {
        b.iter(|| black_box(b1.difference(black_box(&b2))));
    });

    group.bench_function("symmetric_difference", |b| {
        b.iter(|| black_box(b1.symmetric_difference(black_box(&b2))));
    });

    group.bench_function("union_count", |b| {
        b.iter(|| black_box(b1.union_count(black_box(&b2))));
    });

    group.finish();
}

fn bench_bit_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("bit_access");

    group.bench_function("set_growing", |b| {
        b.iter(|| {
            let mut bits = BitVector::new();
            for i in 0..10_000 {
                bits.set(black_box(i));
            }
            bits
        });
    });

    group.bench_function("get", |b| {
        let bits = strided(3);
        let mut i = 0;
        b.iter(|| {
            black_box(bits.get(i % 4000));
            i += 1;
        });
    });

    group.bench_function("clear", |b| {
        let mut bits = strided(3);
        let mut i = 0;
        b.iter(|| {
            bits.clear(black_box(i % 4000));
            i += 1;
        });
    });

    group.finish();
}

fn bench_scanning(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanning");

    for step in &[1, 3, 64, 1000] {
        let mut bits = BitVector::new();
        for i in (0..100_000).step_by(*step) {
            bits.set(i);
        }

        group.bench_with_input(BenchmarkId::new("cardinality", step), &bits, |b, bits| {
            b.iter(|| black_box(bits.cardinality()));
        });

        group.bench_with_input(BenchmarkId::new("next_set_bit", step), &bits, |b, bits| {
            b.iter(|| {
                let mut count = 0;
                let mut next = bits.next_set_bit(0);
                while let Some(i) = next {
                    count += 1;
                    next = bits.next_set_bit(i + 1);
                }
                black_box(count)
            });
        });

        group.bench_with_input(BenchmarkId::new("iter", step), &bits, |b, bits| {
            b.iter(|| {
                for bit in bits {
                    black_box(bit);
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_bulk_operations,
    bench_bit_access,
    bench_scanning
);
criterion_main!(benches);
