//! Classifier lookup benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use proginfo::backend::riscv64::{Opcode, Riscv64};
use proginfo::Classifier;

fn bench_classify(c: &mut Criterion) {
    let classifier = Classifier::<Riscv64>::default();
    let generated: Vec<Opcode> = Opcode::ALL
        .iter()
        .copied()
        .filter(|op| !op.is_assembler_only())
        .collect();

    let mut group = c.benchmark_group("classify");
    group.throughput(Throughput::Elements(generated.len() as u64));

    group.bench_function("riscv64/all_generated", |b| {
        b.iter(|| {
            for &op in &generated {
                black_box(classifier.classify(black_box(op)));
            }
        })
    });

    group.bench_function("riscv64/single", |b| {
        b.iter(|| classifier.classify(black_box(Opcode::Add)))
    });

    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
