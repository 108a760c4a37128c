use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pfnc_unpack_codec::{unpack, unpack_10bit_groups, unpack_12bit_groups};
use pfnc_unpack_formats::FormatRegistry;
use std::hint::black_box;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

// 12 MiB of packed data, a whole number of groups for both families.
const PACKED_SIZE: usize = 12 * 1024 * 1024;

fn generate_input(num_bytes: usize) -> Vec<u8> {
    (0..num_bytes).map(|x| (x.wrapping_mul(0x9E37) >> 3) as u8).collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let input = generate_input(PACKED_SIZE);

    let mut group = c.benchmark_group("Unpack Groups");
    group.throughput(Throughput::Bytes(PACKED_SIZE as u64));

    let mut output = vec![0u16; PACKED_SIZE / 4 * 3];
    group.bench_function("unpack_10bit_groups", |b| {
        b.iter(|| unpack_10bit_groups(black_box(&input), black_box(&mut output)))
    });

    let mut output = vec![0u16; PACKED_SIZE / 3 * 2];
    group.bench_function("unpack_12bit_groups", |b| {
        b.iter(|| unpack_12bit_groups(black_box(&input), black_box(&mut output)))
    });
    group.finish();

    // Whole buffer unpack including allocation, per format family.
    let mut group = c.benchmark_group("Unpack Formats");
    group.throughput(Throughput::Bytes(PACKED_SIZE as u64));
    let registry = FormatRegistry::standard();
    for name in ["Mono8", "Mono16", "Coord3D_ABC32f", "Mono10p", "Mono12p"] {
        let Some(descriptor) = registry.resolve_by_name(name) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("unpack", name), &input, |b, input| {
            b.iter(|| unpack(descriptor, black_box(input)))
        });
    }
    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
