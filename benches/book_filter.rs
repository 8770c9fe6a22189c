// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the list filter and the copy-on-write collection updates.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_books::application::catalog::Catalog;
use iced_books::application::query::Listing;
use iced_books::domain::book::{BookFilter, BookId, NewBook, Rating};
use iced_books::infrastructure::SequentialIdGenerator;
use std::hint::black_box;

const AUTHORS: [&str; 5] = [
    "Frank Herbert",
    "Ursula K. Le Guin",
    "Jane Austen",
    "Italo Calvino",
    "Octavia E. Butler",
];

fn catalog_with(count: usize) -> Catalog {
    let mut catalog = Catalog::new(Box::new(SequentialIdGenerator::default()), "placeholder");
    for i in 0..count {
        catalog.append(NewBook {
            name: format!("Book number {i}"),
            author: AUTHORS[i % AUTHORS.len()].to_string(),
            genre: "Fiction".to_string(),
            rating: Rating::new((i % 6) as f64),
            description: String::new(),
        });
    }
    catalog
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    let catalog = catalog_with(10_000);

    for text in ["", "herbert", "NUMBER 99", "book-42", "no such book"] {
        let filter = BookFilter::new(text);
        group.bench_with_input(BenchmarkId::from_parameter(text), &filter, |b, filter| {
            b.iter(|| black_box(Listing::build(catalog.books(), filter)).books.len());
        });
    }

    group.finish();
}

fn bench_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("updates");

    for size in [100, 10_000] {
        group.bench_with_input(BenchmarkId::new("toggle_read", size), &size, |b, &size| {
            let mut catalog = catalog_with(size);
            let id = BookId::from(format!("book-{}", size / 2));
            b.iter(|| black_box(catalog.toggle_read(&id)));
        });

        group.bench_with_input(BenchmarkId::new("append", size), &size, |b, &size| {
            b.iter_batched(
                || catalog_with(size),
                |mut catalog| black_box(catalog.append(NewBook::default())),
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter, bench_updates);
criterion_main!(benches);
