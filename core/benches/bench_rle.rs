use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rle_core::rle::{decode, encode, TrailingPolicy};
use rle_core::stream::{encode_sources, CodecConfig, InputSource};

/// Text-like input: mostly short runs.
fn generate_text(size_kb: usize) -> Vec<u8> {
    let base = b"The quick brown fox jumps over the lazy dog.   Aaargh!!!\n\n";
    let mut data = Vec::with_capacity(size_kb * 1024);
    while data.len() < size_kb * 1024 {
        data.extend_from_slice(base);
    }
    data.truncate(size_kb * 1024);
    data
}

/// Sparse binary input: long zero runs with occasional markers.
fn generate_sparse(size_kb: usize) -> Vec<u8> {
    let mut data = vec![0u8; size_kb * 1024];
    for i in (0..data.len()).step_by(997) {
        data[i] = 0xFF;
    }
    data
}

fn bench_encode(c: &mut Criterion) {
    let text_100k = generate_text(100);
    let sparse_1m = generate_sparse(1024);

    c.bench_function("encode_text_100kb", |b| {
        b.iter(|| black_box(encode(black_box(&text_100k))))
    });
    c.bench_function("encode_sparse_1mb", |b| {
        b.iter(|| black_box(encode(black_box(&sparse_1m))))
    });
}

fn bench_decode(c: &mut Criterion) {
    let text_wire = encode(&generate_text(100));
    let sparse_wire = encode(&generate_sparse(1024));

    c.bench_function("decode_text_100kb", |b| {
        b.iter(|| black_box(decode(black_box(&text_wire), TrailingPolicy::Reject)))
    });
    c.bench_function("decode_sparse_1mb", |b| {
        b.iter(|| black_box(decode(black_box(&sparse_wire), TrailingPolicy::Reject)))
    });
}

fn bench_stream(c: &mut Criterion) {
    let sparse_1m = generate_sparse(1024);
    let config = CodecConfig::default();

    c.bench_function("encode_sources_4x256kb", |b| {
        b.iter(|| {
            let sources: Vec<InputSource> = sparse_1m.chunks(256 * 1024).map(InputSource::from).collect();
            let mut out = Vec::new();
            black_box(encode_sources(sources, &mut out, &config).map(|_| out.len()))
        })
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_stream);
criterion_main!(benches);
