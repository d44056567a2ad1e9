//! Criterion benches for the forward/inverse NTT and pointwise multiply.
//!
//! Input polynomials are deterministic across runs (LCG-based) so results
//! are comparable over time.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use dilithium_ntt2x2::ntt_params::{N, Q};
use dilithium_ntt2x2::{fwdntt, invntt, mul, BankedRam, Mapping, Poly};

/// Deterministic "random" polynomial, seeded by `seed`.
fn det_poly(seed: u64) -> Poly {
    const A: u64 = 1_664_525;
    const C: u64 = 1_013_904_223;
    const M: u64 = 1u64 << 32;

    let mut a = A.wrapping_mul(seed).wrapping_add(C);
    let mut coeffs = [0u32; N];
    for c in coeffs.iter_mut() {
        a = a.wrapping_mul(A).wrapping_add(C) % M;
        *c = (a % Q as u64) as u32;
    }
    Poly { coeffs }
}

fn bench_ntt(c: &mut Criterion) {
    let mut group = c.benchmark_group("ntt2x2_n256");

    let base = det_poly(2024);

    group.bench_function(BenchmarkId::new("fwdntt", "n256"), |b| {
        b.iter_batched(
            || black_box(BankedRam::reshape(&base)),
            |mut ram| {
                fwdntt(black_box(&mut ram), Mapping::Natural);
                black_box(ram);
            },
            BatchSize::SmallInput,
        )
    });

    let mut freq_ram = BankedRam::reshape(&base);
    fwdntt(&mut freq_ram, Mapping::Natural);

    group.bench_function(BenchmarkId::new("invntt", "n256"), |b| {
        b.iter_batched(
            || black_box(freq_ram),
            |mut ram| {
                invntt(black_box(&mut ram), Mapping::AfterNtt);
                black_box(ram);
            },
            BatchSize::SmallInput,
        )
    });

    let mul_ram = BankedRam::reshape(&det_poly(4096));
    group.bench_function(BenchmarkId::new("mul", "n256"), |b| {
        b.iter_batched(
            || black_box(freq_ram),
            |mut ram| {
                mul(black_box(&mut ram), black_box(&mul_ram), Mapping::Natural);
                black_box(ram);
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_ntt);
criterion_main!(benches);
