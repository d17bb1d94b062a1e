//! List transformer benchmarks

use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use lnreader_core::types::{Novel, NovelStatus, SortField, SortOrder};
use lnreader_core::{filter_and_sort, LibrarySettings};

fn library(size: u32) -> Vec<Novel> {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..size)
        .map(|i| {
            let status = NovelStatus::ALL[(i % 3) as usize];
            let genre = if i % 2 == 0 { "Fantasy" } else { "Mystery" };
            let mut novel = Novel::new(format!("Novel {}", i), format!("Author {}", i % 17))
                .with_genre(genre)
                .with_status(status)
                .with_chapters(i % 50, 50);
            novel.date_added = base + Duration::minutes(i64::from(i));
            novel
        })
        .collect()
}

fn transform_benchmark(c: &mut Criterion) {
    let novels = library(2_000);

    c.bench_function("sort_by_title", |b| {
        let settings = LibrarySettings {
            sort_by: SortField::Title,
            sort_order: SortOrder::Asc,
            ..Default::default()
        };
        b.iter(|| std::hint::black_box(filter_and_sort(&novels, None, &settings)))
    });

    c.bench_function("search_filter_progress", |b| {
        let settings = LibrarySettings {
            sort_by: SortField::Progress,
            filter_genres: vec!["Fantasy".to_string()],
            hide_read: true,
            ..Default::default()
        };
        b.iter(|| std::hint::black_box(filter_and_sort(&novels, Some("author 3"), &settings)))
    });
}

criterion_group!(benches, transform_benchmark);
criterion_main!(benches);
