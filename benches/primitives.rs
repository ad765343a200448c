//! Criterion benchmarks for the hot block-format primitives.
//!
//! Run with:
//!   cargo bench --bench primitives

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use lz4_core::copy::{exact_incremental_copy, safe_incremental_copy, wild_incremental_copy};
use lz4_core::encode::{encode_sequence, max_compressed_length};
use lz4_core::hash::hash_at;
use lz4_core::scan::common_bytes;

/// Deterministic mildly-compressible filler.
fn filler(len: usize) -> Vec<u8> {
    (0..len).map(|i| ((i * 31) % 251) as u8).collect()
}

fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash");
    let buf = filler(64 * 1024);

    group.throughput(Throughput::Bytes(buf.len() as u64));
    group.bench_function("hash_at_sweep_64k", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for off in 0..buf.len() - 4 {
                acc = acc.wrapping_add(hash_at(&buf, off));
            }
            acc
        })
    });
    group.finish();
}

fn bench_common_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("common_bytes");

    // Two identical halves: the scan walks the full second half.
    let half = 64 * 1024;
    let mut buf = filler(half);
    buf.extend_from_within(..);

    group.throughput(Throughput::Bytes(half as u64));
    group.bench_function("identical_64k", |b| {
        b.iter(|| common_bytes(&buf, 0, half, 2 * half))
    });
    group.finish();
}

fn bench_incremental_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("incremental_copy");

    for &len in &[4_096usize, 65_536] {
        // Disjoint regions: gap equals the copy length, slack already
        // rounded for the wild variant.
        let mut buf = filler(2 * len + 8);
        group.throughput(Throughput::Bytes(len as u64));

        group.bench_with_input(BenchmarkId::new("exact", len), &len, |b, &len| {
            b.iter(|| exact_incremental_copy(&mut buf, 0, len, len).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("safe", len), &len, |b, &len| {
            b.iter(|| safe_incremental_copy(&mut buf, 0, len, len).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("wild", len), &len, |b, &len| {
            b.iter(|| wild_incremental_copy(&mut buf, 0, len, len).unwrap())
        });
    }

    // Distance-1 replication: the overlapping path all strategies share.
    let len = 65_536;
    let mut buf = filler(len + 1);
    group.throughput(Throughput::Bytes(len as u64));
    group.bench_function("overlap_distance_1", |b| {
        b.iter(|| safe_incremental_copy(&mut buf, 0, 1, len).unwrap())
    });
    group.finish();
}

fn bench_encode_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_sequence");

    let src = filler(4 * 1024);
    let mut dest = vec![0u8; max_compressed_length(src.len())];
    let dest_len = dest.len();

    // One mid-sized sequence: 64 literals + a 200-byte match.
    group.throughput(Throughput::Bytes(264));
    group.bench_function("run64_match200", |b| {
        b.iter(|| encode_sequence(&src, 0, 64, 32, 200, &mut dest, 0, dest_len).unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_hash,
    bench_common_bytes,
    bench_incremental_copy,
    bench_encode_sequence
);
criterion_main!(benches);
