//! Core record types for the novel library

/// Copy every `Some` field of a patch onto the target
macro_rules! merge_patch {
    ($target:ident, $patch:ident, $($field:ident),* $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = value;
            }
        )*
    };
}

mod bookmark;
mod category;
mod chapter;
mod genre;
mod novel;
mod reader_settings;
mod settings;
mod source;

pub use bookmark::Bookmark;
pub use category::Category;
pub use chapter::Chapter;
pub use genre::{canonical_genre, GENRES};
pub use novel::{Novel, NovelStatus};
pub use reader_settings::{ReaderSettings, ReaderSettingsPatch, TextAlign, Theme};
pub use settings::{LibrarySettings, LibrarySettingsPatch, SortField, SortOrder, ViewMode};
pub use source::{default_sources, NovelSource};
