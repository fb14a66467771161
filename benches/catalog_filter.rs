// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the catalog filter path.
//!
//! Measures the performance of:
//! - Deriving the visible items of the selected category
//! - Switching category and deriving again
//! - The navbar scroll handler, which runs on every scroll notification

use bistro::content::SiteContent;
use bistro::domain::menu::{MenuCategory, MenuItem};
use bistro::ui::catalog::Catalog;
use bistro::ui::navbar;
use bistro::ui::state::ScrollThreshold;
use bistro::ui::theming::{DiscardThemeStore, ThemePreference};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Builds a menu with `categories` categories of `per_category` items each,
/// interleaved so that every derive walks the whole list.
fn synthetic_catalog(categories: usize, per_category: usize) -> Catalog {
    let category_list: Vec<_> = (0..categories)
        .map(|c| MenuCategory::new(format!("cat-{c}"), format!("Category {c}")))
        .collect();
    let items: Vec<_> = (0..categories * per_category)
        .map(|i| {
            MenuItem::new(
                format!("item-{i}"),
                format!("Dish {i}"),
                "$10",
                format!("cat-{}", i % categories),
            )
        })
        .collect();
    Catalog::new(category_list, items).expect("synthetic catalog has categories")
}

fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_filter");

    let default = SiteContent::default();
    let catalog = Catalog::new(default.categories, default.items).expect("default content");
    group.bench_function("derive_default_menu", |b| {
        b.iter(|| black_box(catalog.derive().len()));
    });

    for size in [100, 1_000, 10_000] {
        let catalog = synthetic_catalog(8, size / 8);
        group.bench_with_input(BenchmarkId::new("derive", size), &catalog, |b, catalog| {
            b.iter(|| black_box(catalog.derive().len()));
        });
    }

    group.finish();
}

fn bench_select_and_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_filter");
    let mut catalog = synthetic_catalog(8, 125);
    let ids: Vec<String> = catalog.categories().iter().map(|c| c.id.clone()).collect();

    group.bench_function("select_then_derive", |b| {
        let mut next = 0;
        b.iter(|| {
            let id = &ids[next % ids.len()];
            next += 1;
            let _ = catalog.select_category(black_box(id));
            black_box(catalog.derive().len())
        });
    });

    group.finish();
}

fn bench_scroll_handler(c: &mut Criterion) {
    let mut group = c.benchmark_group("navbar");
    let mut state = navbar::State::new(
        SiteContent::default().nav,
        ThemePreference::Dark,
        Box::new(DiscardThemeStore),
        ScrollThreshold::default(),
    );
    state.mount();

    group.bench_function("on_scroll", |b| {
        let mut y = 0.0_f32;
        b.iter(|| {
            y = (y + 7.0) % 60.0;
            state.on_scroll(black_box(y));
            black_box(state.is_scrolled())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_derive,
    bench_select_and_derive,
    bench_scroll_handler
);
criterion_main!(benches);
