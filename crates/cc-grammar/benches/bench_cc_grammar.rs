use cc_grammar::{deserialize, serialize, ClownRecord};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn generate_record(fields: usize) -> ClownRecord {
    let mut record = ClownRecord::new("bench");
    for i in 0..fields {
        record.set(format!("field{i}"), format!("value number {i} with some width"));
    }
    record
}

fn bench_serialize(c: &mut Criterion) {
    let small = generate_record(8);
    let large = generate_record(256);

    c.bench_function("serialize_8_fields", |b| {
        b.iter(|| black_box(serialize(black_box(&small), None).unwrap()))
    });
    c.bench_function("serialize_256_fields", |b| {
        b.iter(|| black_box(serialize(black_box(&large), None).unwrap()))
    });
}

fn bench_deserialize(c: &mut Criterion) {
    let text = serialize(&generate_record(256), None).unwrap();
    c.bench_function("deserialize_256_fields", |b| {
        b.iter(|| black_box(deserialize(black_box(&text), None).unwrap()))
    });
}

criterion_group!(benches, bench_serialize, bench_deserialize);
criterion_main!(benches);
