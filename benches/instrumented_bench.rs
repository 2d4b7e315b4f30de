use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use keyed_kv::{install, Dictionary};

fn create_test_data(size: usize) -> Dictionary<String, String> {
    let mut data = Dictionary::new();
    for i in 0..size {
        data.add(format!("key_{:010}", i), format!("value_{}", i))
            .unwrap();
    }
    data
}

fn lookup_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookups");

    let instrumentation = install().unwrap();
    for size in [100, 1000, 10000].iter() {
        let bare = create_test_data(*size);
        let hooked = instrumentation.wrap(bare.clone());
        let test_key = format!("key_{:010}", size / 2);

        group.bench_with_input(BenchmarkId::new("bare", size), size, |b, _size| {
            b.iter(|| black_box(bare.get(black_box(&test_key)).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("instrumented", size), size, |b, _size| {
            b.iter(|| black_box(hooked.get(black_box(&test_key)).unwrap()))
        });
    }

    group.finish();
}

fn insert_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("inserts");

    let instrumentation = install().unwrap();
    let keys: Vec<String> = (0..1000).map(|i| format!("key_{:010}", i)).collect();

    group.bench_function("bare_1k", |b| {
        b.iter(|| {
            let mut dictionary = Dictionary::new();
            for key in &keys {
                dictionary.add(key.clone(), 0i32).unwrap();
            }
            black_box(dictionary)
        })
    });

    group.bench_function("instrumented_1k", |b| {
        b.iter(|| {
            let mut dictionary = instrumentation.wrap(Dictionary::new());
            for key in &keys {
                dictionary.add(key.clone(), 0i32).unwrap();
            }
            black_box(dictionary)
        })
    });

    group.finish();
}

fn failure_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("failures");

    let instrumentation = install().unwrap();
    let bare = create_test_data(1000);
    let hooked = instrumentation.wrap(bare.clone());
    let missing = "missing_key".to_string();

    group.bench_function("bare_miss", |b| {
        b.iter(|| black_box(bare.get(black_box(&missing)).unwrap_err()))
    });

    group.bench_function("instrumented_miss", |b| {
        b.iter(|| black_box(hooked.get(black_box(&missing)).unwrap_err()))
    });

    group.finish();
}

criterion_group!(benches, lookup_benchmark, insert_benchmark, failure_benchmark);
criterion_main!(benches);
