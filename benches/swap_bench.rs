// ABOUTME: Criterion benchmarks for swap matching, portion normalization, and catalog parsing
// ABOUTME: Measures single searches and parallel batches across growing catalog sizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MacroSwap Contributors

//! Criterion benchmarks for the swap engine.
//!
//! Measures `find_swaps` on synthetic catalogs of increasing size, the rayon
//! batch entry point, and the catalog adapter on the bundled dataset.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use macroswap::catalog::{parse_catalog, BundledCatalog};
use macroswap::intelligence::{find_swaps, find_swaps_batch, grams_from_portion, SwapQuery};
use macroswap::models::{Food, NutrientProfile, SwapMode, SwapOptions};

/// Catalog sizes for the scaling benchmarks
const CATALOG_SIZES: [usize; 3] = [50, 500, 5000];

/// Synthetic catalog with a spread of densities across four groups
#[allow(clippy::cast_precision_loss)]
fn generate_catalog(count: usize) -> Vec<Food> {
    const GROUPS: [&str; 4] = ["protein", "starch", "fat", "fruit"];
    (0..count)
        .map(|index| {
            let protein = 2.0 + ((index * 37) % 300) as f64 / 10.0;
            let carbs = ((index * 53) % 600) as f64 / 10.0;
            let fat = 0.5 + ((index * 19) % 200) as f64 / 10.0;
            Food::new(format!("food_{index}"), format!("Food {index}"))
                .with_group(GROUPS[index % GROUPS.len()])
                .with_serving(100.0, NutrientProfile::macros(protein, carbs, fat))
                .with_unit("cup", 150.0 + (index % 50) as f64)
        })
        .collect()
}

fn bench_find_swaps(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_swaps");

    for size in CATALOG_SIZES {
        let catalog = generate_catalog(size);
        let base = catalog[size / 2].clone();
        group.throughput(Throughput::Elements(size as u64));

        for mode in [SwapMode::Strict, SwapMode::Flex] {
            let options = SwapOptions::new(mode);
            group.bench_with_input(
                BenchmarkId::new(mode.to_string(), size),
                &catalog,
                |b, catalog| {
                    b.iter(|| {
                        find_swaps(
                            black_box(&base),
                            black_box(150.0),
                            black_box(catalog),
                            options,
                        )
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_find_swaps_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_swaps_batch");
    let catalog = generate_catalog(2000);

    for query_count in [8_usize, 64] {
        let queries: Vec<SwapQuery> = catalog
            .iter()
            .step_by(catalog.len() / query_count)
            .take(query_count)
            .map(|base| SwapQuery {
                base: base.clone(),
                base_grams: 120.0,
                options: SwapOptions::new(SwapMode::Flex).with_same_group(true),
            })
            .collect();

        group.throughput(Throughput::Elements(query_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(query_count),
            &queries,
            |b, queries| b.iter(|| find_swaps_batch(black_box(queries), black_box(&catalog))),
        );
    }

    group.finish();
}

fn bench_portion_normalization(c: &mut Criterion) {
    let food = generate_catalog(1).remove(0);

    c.bench_function("grams_from_portion_table_unit", |b| {
        b.iter(|| grams_from_portion(black_box(&food), black_box(1.5), black_box("CUP")));
    });
}

fn bench_catalog_parsing(c: &mut Criterion) {
    let Ok(foods) = BundledCatalog::foods() else {
        return;
    };
    let document = serde_json::json!({ "foods": foods.iter().map(|food| {
        serde_json::json!({
            "id": food.id,
            "name": food.name,
            "group": food.group,
            "servingGrams": food.serving_grams,
            "perServing": food.per_serving.map(|n| serde_json::json!({
                "protein": n.protein_g,
                "carbs": n.carbs_g,
                "fat": n.fat_g,
            })),
            "units": food.units,
        })
    }).collect::<Vec<_>>() })
    .to_string();

    c.bench_function("parse_bundled_catalog", |b| {
        b.iter(|| parse_catalog("bench", black_box(&document)));
    });
}

criterion_group!(
    benches,
    bench_find_swaps,
    bench_find_swaps_batch,
    bench_portion_normalization,
    bench_catalog_parsing,
);
criterion_main!(benches);
