use std::hint::black_box;
use std::io::{Cursor, Read};

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use bom_core::{detect_encoding, prepend, trim, BomReader, Encoding};

fn bench_detect_trim(c: &mut Criterion) {
    let payload = vec![b'x'; 4096];
    let marked = prepend(&payload, Encoding::Utf32LittleEndian).into_owned();

    c.bench_function("detect_utf32le", |b| b.iter(|| detect_encoding(black_box(&marked))));
    c.bench_function("trim_utf32le", |b| b.iter(|| trim(black_box(&marked[..]))));
}

fn bench_reader(c: &mut Criterion) {
    let payload = vec![b'x'; 64 * 1024];
    let marked = prepend(&payload, Encoding::Utf8).into_owned();

    let mut group = c.benchmark_group("bom_reader");
    group.throughput(Throughput::Bytes(marked.len() as u64));
    group.bench_function("read_to_end_64k", |b| {
        b.iter(|| {
            let mut rd = BomReader::new(Cursor::new(black_box(&marked[..])));
            let mut out = Vec::with_capacity(payload.len());
            rd.read_to_end(&mut out).unwrap();
            out
        })
    });
    group.finish();
}

criterion_group!(benches, bench_detect_trim, bench_reader);
criterion_main!(benches);
