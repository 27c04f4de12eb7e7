use cc_charset::defaults::{default_binary, default_efficient_binary};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn generate_text(size: usize) -> String {
    let base = "The quick brown clown jumps over the lazy cipher. ";
    let mut text = String::with_capacity(size);
    while text.len() < size {
        text.push_str(base);
    }
    text.truncate(size);
    text
}

fn bench_binary_normal(c: &mut Criterion) {
    let charset = default_binary();
    let text = generate_text(1024);
    let encoded = charset.encode(&text).unwrap();

    c.bench_function("encode_binary_normal_1k", |b| {
        b.iter(|| black_box(charset.encode(black_box(&text)).unwrap()))
    });
    c.bench_function("decode_binary_normal_1k", |b| {
        b.iter(|| black_box(charset.decode(black_box(&encoded)).unwrap()))
    });
}

fn bench_binary_efficient(c: &mut Criterion) {
    let charset = default_efficient_binary();
    let text = generate_text(1024);
    let encoded = charset.encode(&text).unwrap();

    c.bench_function("encode_binary_efficient_1k", |b| {
        b.iter(|| black_box(charset.encode(black_box(&text)).unwrap()))
    });
    c.bench_function("decode_binary_efficient_1k", |b| {
        b.iter(|| black_box(charset.decode(black_box(&encoded)).unwrap()))
    });
}

criterion_group!(benches, bench_binary_normal, bench_binary_efficient);
criterion_main!(benches);
