use cc_condenser::BinaryCondenser;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_bits(len: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| if rng.gen_bool(0.5) { '1' } else { '0' }).collect()
}

fn generate_repetitive_bits(len: usize) -> String {
    let block = "01001000";
    let mut bits = String::with_capacity(len);
    while bits.len() < len {
        bits.push_str(block);
    }
    bits.truncate(len);
    bits
}

fn bench_encode(c: &mut Criterion) {
    let condenser = BinaryCondenser::default();
    let random_1k = generate_bits(1024, 7);
    let random_8k = generate_bits(8 * 1024, 7);
    let repetitive_8k = generate_repetitive_bits(8 * 1024);

    c.bench_function("condense_random_1k", |b| {
        b.iter(|| black_box(condenser.encode(black_box(&random_1k))))
    });
    c.bench_function("condense_random_8k", |b| {
        b.iter(|| black_box(condenser.encode(black_box(&random_8k))))
    });
    c.bench_function("condense_repetitive_8k", |b| {
        b.iter(|| black_box(condenser.encode(black_box(&repetitive_8k))))
    });
}

fn bench_roundtrip(c: &mut Criterion) {
    let condenser = BinaryCondenser::default();
    let bits = generate_repetitive_bits(8 * 1024);
    let condensed = condenser.encode(&bits);

    c.bench_function("decondense_repetitive_8k", |b| {
        b.iter(|| black_box(condenser.decode(black_box(&condensed))))
    });
}

criterion_group!(benches, bench_encode, bench_roundtrip);
criterion_main!(benches);
