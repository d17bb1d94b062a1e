//! Library view settings

use super::NovelStatus;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field the library list is ordered by
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Title,
    Author,
    #[default]
    DateAdded,
    LastRead,
    Progress,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Author => "author",
            SortField::DateAdded => "dateAdded",
            SortField::LastRead => "lastRead",
            SortField::Progress => "progress",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    /// Accepts both `dateAdded` and `date-added` spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "title" => Ok(SortField::Title),
            "author" => Ok(SortField::Author),
            "dateadded" => Ok(SortField::DateAdded),
            "lastread" => Ok(SortField::LastRead),
            "progress" => Ok(SortField::Progress),
            _ => Err(format!("unknown sort field '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        })
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            _ => Err(format!("unknown sort order '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            _ => Err(format!("unknown view mode '{}'", s)),
        }
    }
}

/// Persisted settings for the library list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LibrarySettings {
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    pub view_mode: ViewMode,
    pub grid_columns: u32,
    pub show_genres: bool,
    pub show_progress: bool,

    /// Keep novels carrying any of these genres (empty = no filter)
    pub filter_genres: Vec<String>,

    /// Keep novels in any of these statuses (empty = no filter)
    pub filter_status: Vec<NovelStatus>,

    /// Drop novels whose read count has reached the total
    pub hide_read: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            sort_by: SortField::DateAdded,
            sort_order: SortOrder::Desc,
            view_mode: ViewMode::Grid,
            grid_columns: 4,
            show_genres: true,
            show_progress: true,
            filter_genres: Vec::new(),
            filter_status: Vec::new(),
            hide_read: false,
        }
    }
}

impl LibrarySettings {
    /// Shallow-merge every field present in the patch
    pub fn apply(&mut self, patch: LibrarySettingsPatch) {
        merge_patch!(
            self,
            patch,
            sort_by,
            sort_order,
            view_mode,
            grid_columns,
            show_genres,
            show_progress,
            filter_genres,
            filter_status,
            hide_read,
        );
    }

    /// Add the genre to the filter, or remove it if already present
    pub fn toggle_genre_filter(&mut self, genre: &str) {
        if let Some(pos) = self.filter_genres.iter().position(|g| g == genre) {
            self.filter_genres.remove(pos);
        } else {
            self.filter_genres.push(genre.to_string());
        }
    }

    /// Add the status to the filter, or remove it if already present
    pub fn toggle_status_filter(&mut self, status: NovelStatus) {
        if let Some(pos) = self.filter_status.iter().position(|s| *s == status) {
            self.filter_status.remove(pos);
        } else {
            self.filter_status.push(status);
        }
    }

    pub fn clear_filters(&mut self) {
        self.filter_genres.clear();
        self.filter_status.clear();
        self.hide_read = false;
    }

    /// Number of active filter criteria (hide-read counts as one)
    pub fn active_filter_count(&self) -> usize {
        self.filter_genres.len() + self.filter_status.len() + usize::from(self.hide_read)
    }
}

/// Partial update for [`LibrarySettings`]; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LibrarySettingsPatch {
    pub sort_by: Option<SortField>,
    pub sort_order: Option<SortOrder>,
    pub view_mode: Option<ViewMode>,
    pub grid_columns: Option<u32>,
    pub show_genres: Option<bool>,
    pub show_progress: Option<bool>,
    pub filter_genres: Option<Vec<String>>,
    pub filter_status: Option<Vec<NovelStatus>>,
    pub hide_read: Option<bool>,
}

impl LibrarySettingsPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_is_shallow_merge() {
        let mut settings = LibrarySettings::default();
        settings.apply(LibrarySettingsPatch {
            sort_by: Some(SortField::Title),
            hide_read: Some(true),
            ..Default::default()
        });

        assert_eq!(settings.sort_by, SortField::Title);
        assert!(settings.hide_read);
        assert_eq!(settings.sort_order, SortOrder::Desc);
        assert_eq!(settings.grid_columns, 4);
    }

    #[test]
    fn test_toggle_filters() {
        let mut settings = LibrarySettings::default();
        settings.toggle_genre_filter("Fantasy");
        settings.toggle_status_filter(NovelStatus::Hiatus);
        settings.hide_read = true;
        assert_eq!(settings.active_filter_count(), 3);

        settings.toggle_genre_filter("Fantasy");
        assert!(settings.filter_genres.is_empty());

        settings.clear_filters();
        assert_eq!(settings.active_filter_count(), 0);
    }

    #[test]
    fn test_sort_field_parse_and_wire_name() {
        assert_eq!("date-added".parse::<SortField>(), Ok(SortField::DateAdded));
        assert_eq!("lastRead".parse::<SortField>(), Ok(SortField::LastRead));
        assert_eq!(
            serde_json::to_string(&SortField::DateAdded).unwrap(),
            "\"dateAdded\""
        );
        assert!("rating".parse::<SortField>().is_err());
    }
}
