//! Property tests for the list transformer and catalog

use chrono::{Duration, TimeZone, Utc};
use lnreader_core::transform::{search, sort_novels};
use lnreader_core::types::{Novel, NovelStatus, SortField, SortOrder};
use lnreader_core::{filter_and_sort, Catalog, LibrarySettings};
use proptest::prelude::*;

fn arb_status() -> impl Strategy<Value = NovelStatus> {
    prop_oneof![
        Just(NovelStatus::Ongoing),
        Just(NovelStatus::Completed),
        Just(NovelStatus::Hiatus),
    ]
}

fn arb_field() -> impl Strategy<Value = SortField> {
    prop_oneof![
        Just(SortField::Title),
        Just(SortField::Author),
        Just(SortField::DateAdded),
        Just(SortField::LastRead),
        Just(SortField::Progress),
    ]
}

fn arb_order() -> impl Strategy<Value = SortOrder> {
    prop_oneof![Just(SortOrder::Asc), Just(SortOrder::Desc)]
}

prop_compose! {
    fn arb_novel()(
        title in "[A-Ca-c]{1,3}",
        author in "[xyz]{1,2}",
        genres in prop::collection::vec(prop_oneof![Just("Fantasy"), Just("Mystery"), Just("Drama")], 0..3),
        status in arb_status(),
        total in 0u32..5,
        read in 0u32..6,
        added in 0i64..4,
        last_read in prop::option::of(0i64..4),
    ) -> Novel {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut novel = Novel::new(title, author).with_status(status).with_chapters(read, total);
        novel.genres = genres.into_iter().map(String::from).collect();
        novel.date_added = base + Duration::days(added);
        novel.last_read_date = last_read.map(|d| base + Duration::days(d));
        novel
    }
}

#[derive(Debug, PartialEq)]
enum SortKey {
    Text(String),
    Millis(i64),
    Ratio(f64),
}

fn sort_key(novel: &Novel, field: SortField) -> SortKey {
    match field {
        SortField::Title => SortKey::Text(novel.title.to_lowercase()),
        SortField::Author => SortKey::Text(novel.author.to_lowercase()),
        SortField::DateAdded => SortKey::Millis(novel.date_added.timestamp_millis()),
        SortField::LastRead => {
            SortKey::Millis(novel.last_read_date.map_or(0, |d| d.timestamp_millis()))
        }
        SortField::Progress => SortKey::Ratio(novel.progress()),
    }
}

fn ids(novels: &[&Novel]) -> Vec<String> {
    novels.iter().map(|n| n.id.clone()).collect()
}

proptest! {
    #[test]
    fn sorting_is_idempotent(
        novels in prop::collection::vec(arb_novel(), 0..12),
        field in arb_field(),
        order in arb_order(),
    ) {
        let mut once: Vec<&Novel> = novels.iter().collect();
        sort_novels(&mut once, field, order);
        let mut twice = once.clone();
        sort_novels(&mut twice, field, order);
        prop_assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn sorting_is_stable(
        novels in prop::collection::vec(arb_novel(), 0..12),
        field in arb_field(),
        order in arb_order(),
    ) {
        // ties on the sort key keep their input order in both directions
        let mut sorted: Vec<&Novel> = novels.iter().collect();
        sort_novels(&mut sorted, field, order);

        let position = |id: &str| novels.iter().position(|n| n.id == id).unwrap();
        for pair in sorted.windows(2) {
            if sort_key(pair[0], field) == sort_key(pair[1], field) {
                prop_assert!(position(&pair[0].id) < position(&pair[1].id));
            }
        }
    }

    #[test]
    fn empty_search_returns_everything_in_order(
        novels in prop::collection::vec(arb_novel(), 0..12),
    ) {
        let all: Vec<&Novel> = novels.iter().collect();
        prop_assert_eq!(ids(&search(&novels, "")), ids(&all));
    }

    #[test]
    fn filters_only_remove(
        novels in prop::collection::vec(arb_novel(), 0..12),
        hide_read in any::<bool>(),
        status in arb_status(),
    ) {
        let settings = LibrarySettings {
            hide_read,
            filter_status: vec![status],
            filter_genres: vec!["Fantasy".to_string()],
            ..Default::default()
        };
        let view = filter_and_sort(&novels, None, &settings);
        for novel in &view {
            prop_assert_eq!(novel.status, status);
            prop_assert!(novel.genres.iter().any(|g| g == "Fantasy"));
            if hide_read {
                prop_assert!(novel.read_chapters < novel.total_chapters);
            }
        }
    }

    #[test]
    fn remove_novel_leaves_no_dependents(
        chapters_per_novel in prop::collection::vec(0u32..4, 1..5),
        victim in 0usize..5,
    ) {
        let mut catalog = Catalog::new();
        for (index, count) in chapters_per_novel.iter().enumerate() {
            let novel_id = format!("n{}", index);
            catalog.add_novel(Novel::new("T", "A").with_id(&novel_id));
            for number in 0..*count {
                let chapter_id = format!("{}-{}", novel_id, number);
                catalog.add_chapter(lnreader_core::Chapter::new(&chapter_id, &novel_id, "C", number));
                catalog.add_bookmark(lnreader_core::Bookmark::new(&novel_id, &chapter_id, 0, "t"));
            }
        }

        let victim_id = format!("n{}", victim % chapters_per_novel.len());
        catalog.remove_novel(&victim_id);

        prop_assert!(catalog.chapters().iter().all(|c| c.novel_id != victim_id));
        prop_assert!(catalog.bookmarks().iter().all(|b| b.novel_id != victim_id));
        prop_assert!(catalog.get_novel(&victim_id).is_none());
    }
}
