//! Library list filtering and ordering
//!
//! [`filter_and_sort`] turns the stored novel collection into the view shown
//! to the user. The pipeline runs in a fixed order: search, genre filter,
//! status filter, hide-read, then a stable sort.

use crate::types::{LibrarySettings, Novel, SortField, SortOrder};
use serde::Serialize;
use std::cmp::Ordering;

/// Novels matching `query` (case-insensitive, title/author/genre), in input
/// order. A blank query matches everything.
pub fn search<'a>(novels: &'a [Novel], query: &str) -> Vec<&'a Novel> {
    if query.is_empty() {
        return novels.iter().collect();
    }
    let needle = query.to_lowercase();
    novels
        .iter()
        .filter(|novel| novel.matches_lowercase(&needle))
        .collect()
}

/// Apply search, filters and ordering from `settings` to the collection
pub fn filter_and_sort<'a>(
    novels: &'a [Novel],
    query: Option<&str>,
    settings: &LibrarySettings,
) -> Vec<&'a Novel> {
    let mut view = match query {
        Some(q) if !q.is_empty() => search(novels, q),
        _ => novels.iter().collect(),
    };

    if !settings.filter_genres.is_empty() {
        view.retain(|novel| {
            novel
                .genres
                .iter()
                .any(|genre| settings.filter_genres.contains(genre))
        });
    }

    if !settings.filter_status.is_empty() {
        view.retain(|novel| settings.filter_status.contains(&novel.status));
    }

    if settings.hide_read {
        view.retain(|novel| !novel.is_finished());
    }

    sort_novels(&mut view, settings.sort_by, settings.sort_order);
    view
}

/// Stable sort in place. Descending inverts the comparison, so equal keys
/// keep their relative order in both directions.
pub fn sort_novels(novels: &mut [&Novel], field: SortField, order: SortOrder) {
    novels.sort_by(|a, b| {
        let ordering = compare_by(a, b, field);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn compare_by(a: &Novel, b: &Novel, field: SortField) -> Ordering {
    match field {
        SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortField::Author => a.author.to_lowercase().cmp(&b.author.to_lowercase()),
        SortField::DateAdded => a.date_added.cmp(&b.date_added),
        SortField::LastRead => last_read_millis(a).cmp(&last_read_millis(b)),
        SortField::Progress => a.progress().total_cmp(&b.progress()),
    }
}

// Never-read novels sort as if read at the epoch
fn last_read_millis(novel: &Novel) -> i64 {
    novel
        .last_read_date
        .map_or(0, |date| date.timestamp_millis())
}

/// Footer figures for a library view
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct LibrarySummary {
    /// Novels in the filtered view
    pub shown: usize,

    /// Novels in the whole library
    pub total: usize,

    /// Chapters read across the whole library
    pub chapters_read: u64,
}

impl LibrarySummary {
    pub fn new(view: &[&Novel], library: &[Novel]) -> Self {
        Self {
            shown: view.len(),
            total: library.len(),
            chapters_read: library
                .iter()
                .map(|novel| u64::from(novel.read_chapters))
                .sum(),
        }
    }
}
