use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use std::sync::Arc;

use salonerp_catalog::{ConsumablePolicy, CustomerAttribute, QuantityMap};
use salonerp_core::{ProductId, ServiceId};
use salonerp_engine::ConsumptionEngine;
use salonerp_infra::{InMemoryCatalog, InMemoryStockStore};
use salonerp_inventory::{StockRecord, UnitKind};

type BenchEngine = ConsumptionEngine<Arc<InMemoryCatalog>, Arc<InMemoryStockStore>>;

/// Seed `service_count` services over a pool of 50 products (heavy overlap,
/// so consolidation does real merging) with full stock.
fn seed(service_count: usize) -> (BenchEngine, Vec<ServiceId>) {
    let catalog = Arc::new(InMemoryCatalog::new());
    let stock = Arc::new(InMemoryStockStore::new());

    let products: Vec<ProductId> = (0..50).map(|_| ProductId::new()).collect();
    for (i, product_id) in products.iter().enumerate() {
        stock.save(
            StockRecord::new(
                *product_id,
                format!("Product {i}"),
                UnitKind::Volume,
                1000,
                250.0,
                10,
            )
            .unwrap(),
        );
    }

    let services: Vec<ServiceId> = (0..service_count)
        .map(|i| {
            let service_id = ServiceId::new();
            let policy = (0..5)
                .map(|j| {
                    ConsumablePolicy::new(
                        products[(i * 5 + j) % products.len()],
                        QuantityMap::uniform(25.0).with_override("female", 35.0),
                        "ml",
                    )
                })
                .collect();
            catalog.upsert(service_id, policy);
            service_id
        })
        .collect();

    (ConsumptionEngine::new(catalog, stock), services)
}

fn bench_consolidation(c: &mut Criterion) {
    let mut group = c.benchmark_group("consolidated_usage");
    let attribute = CustomerAttribute::new("female");

    for service_count in [5usize, 25, 100] {
        let (engine, services) = seed(service_count);
        group.throughput(Throughput::Elements(service_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(service_count),
            &service_count,
            |b, _| {
                b.iter(|| {
                    engine
                        .consolidated_usage(black_box(&services), Some(&attribute))
                        .unwrap()
                })
            },
        );
    }
    group.finish();
}

fn bench_preview(c: &mut Criterion) {
    let (engine, services) = seed(25);
    let attribute = CustomerAttribute::new("female");

    c.bench_function("preview_impact_25_services", |b| {
        b.iter(|| {
            engine
                .preview_impact(black_box(&services), Some(&attribute))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_consolidation, bench_preview);
criterion_main!(benches);
