use coollex::{binomial::num_comb, combinations, LendingIterator};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_enumerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate");
    for &(n, k) in &[(20, 5), (24, 12), (49, 6)] {
        group.throughput(Throughput::Elements(num_comb(n, k).unwrap()));
        group.bench_with_input(
            BenchmarkId::new("indices", format!("{}_{}", n, k)),
            &(n, k),
            |b, &(n, k)| {
                b.iter(|| {
                    let mut combs = combinations(n, k).unwrap();
                    let mut sum = 0;
                    while let Some(indices) = combs.next() {
                        sum += indices.sum::<usize>();
                    }
                    black_box(sum)
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("transitions", format!("{}_{}", n, k)),
            &(n, k),
            |b, &(n, k)| {
                b.iter(|| {
                    let mut combs = combinations(n, k).unwrap();
                    let mut count = 0u64;
                    while combs.next().is_some() {
                        count += 1;
                    }
                    black_box(count)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_enumerate);
criterion_main!(benches);
