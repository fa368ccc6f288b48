//! Expansion throughput benchmarks.
//!
//! Run with: `cargo bench --bench expand`
//!
//! Measures the chained expansion per digest type at several output sizes,
//! plus the single-round MAC path. The dual-digest type pays for two full
//! expansions per output byte; SHA-384 amortizes best at large outputs
//! thanks to its 48-byte blocks.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use keyloom::{mac, prf, transcript_digest, DigestRegistry, DigestType, SeedList};

/// Output sizes to benchmark (finished hash, key block, bulk expansion).
const OUTPUT_SIZES: &[usize] = &[12, 104, 1024, 16_384];

fn bench_prf(c: &mut Criterion) {
    let registry = DigestRegistry::new();
    let secret = [0x5au8; 48];
    let (server, client) = ([0x01u8; 32], [0x02u8; 32]);
    let mut seeds = SeedList::new();
    seeds.push(b"key expansion").push(&server).push(&client);

    let mut group = c.benchmark_group("prf");
    for &size in OUTPUT_SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        for ty in [DigestType::Md5Sha1, DigestType::Sha256, DigestType::Sha384] {
            let mut out = vec![0u8; size];
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", ty), size),
                &size,
                |b, _| {
                    b.iter(|| prf(&registry, ty, &secret, &seeds, &mut out).unwrap());
                },
            );
        }
    }
    group.finish();
}

fn bench_mac(c: &mut Criterion) {
    let registry = DigestRegistry::new();
    let secret = [0x5au8; 32];
    let seeds = SeedList::from(&b"finished"[..]);

    let mut out = [0u8; 32];
    c.bench_function("mac/sha256_32", |b| {
        b.iter(|| mac(&registry, DigestType::Sha256, &secret, &seeds, &mut out).unwrap());
    });
}

fn bench_transcript(c: &mut Criterion) {
    let registry = DigestRegistry::new();
    let transcript = vec![0xabu8; 4096];

    let mut out = [0u8; 48];
    c.bench_function("transcript/sha384_4k", |b| {
        b.iter(|| transcript_digest(&registry, DigestType::Sha384, &transcript, &mut out).unwrap());
    });
}

criterion_group!(benches, bench_prf, bench_mac, bench_transcript);
criterion_main!(benches);
