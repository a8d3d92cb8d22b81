use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stockbook_catalog::{CatalogStore, NewProduct};

fn seeded_store(products: usize) -> CatalogStore {
    let mut store = CatalogStore::new();
    for i in 0..products {
        let category = if i % 2 == 0 { "Electronics" } else { "Stationery" };
        store.add(NewProduct::new(format!("Item {i}"), 9.99, 10, category));
    }
    store
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_add");
    group.throughput(Throughput::Elements(1));
    group.bench_function("add_single", |b| {
        b.iter_batched(
            CatalogStore::new,
            |mut store| {
                black_box(store.add(NewProduct::new("Laptop", 999.99, 10, "Electronics")));
                store
            },
            criterion::BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_search");
    for size in [100usize, 1_000, 10_000] {
        let store = seeded_store(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("substring_scan", size), &store, |b, store| {
            b.iter(|| black_box(store.search("electro")))
        });
    }
    group.finish();
}

fn bench_update_delete_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_mutations");
    group.throughput(Throughput::Elements(2));
    group.bench_function("update_then_delete", |b| {
        b.iter_batched(
            || {
                let mut store = CatalogStore::new();
                let id = store.add(NewProduct::new("Widget", 9.99, 5, "Tools")).id();
                (store, id)
            },
            |(mut store, id)| {
                store
                    .update(id, NewProduct::new("Widget XL", 12.99, 5, "Tools"))
                    .unwrap();
                store.delete(id);
                store
            },
            criterion::BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_add, bench_search, bench_update_delete_cycle);
criterion_main!(benches);
