//! Reader display preferences

use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Sepia,
    Custom,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "sepia" => Ok(Theme::Sepia),
            "custom" => Ok(Theme::Custom),
            _ => Err(format!("unknown theme '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    #[default]
    Justify,
}

impl FromStr for TextAlign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(TextAlign::Left),
            "center" => Ok(TextAlign::Center),
            "justify" => Ok(TextAlign::Justify),
            _ => Err(format!("unknown text alignment '{}'", s)),
        }
    }
}

/// Typography and layout settings for the chapter reader.
/// Values are stored as given; ranges are not validated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReaderSettings {
    pub font_size: u32,
    pub font_family: String,
    pub line_height: f64,
    pub paragraph_spacing: f64,
    pub background_color: String,
    pub text_color: String,
    pub theme: Theme,
    pub page_width: u32,
    pub padding: u32,
    pub text_align: TextAlign,
    pub column_count: u32,
    pub auto_scroll: bool,
    pub scroll_speed: f64,
    pub bionic_reading: bool,
    pub immersive_mode: bool,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            font_size: 16,
            font_family: "Inter, sans-serif".to_string(),
            line_height: 1.6,
            paragraph_spacing: 1.2,
            background_color: "#ffffff".to_string(),
            text_color: "#1a1a1a".to_string(),
            theme: Theme::Light,
            page_width: 800,
            padding: 40,
            text_align: TextAlign::Justify,
            column_count: 1,
            auto_scroll: false,
            scroll_speed: 1.0,
            bionic_reading: false,
            immersive_mode: false,
        }
    }
}

impl ReaderSettings {
    /// Shallow-merge every field present in the patch
    pub fn apply(&mut self, patch: ReaderSettingsPatch) {
        merge_patch!(
            self,
            patch,
            font_size,
            font_family,
            line_height,
            paragraph_spacing,
            background_color,
            text_color,
            theme,
            page_width,
            padding,
            text_align,
            column_count,
            auto_scroll,
            scroll_speed,
            bionic_reading,
            immersive_mode,
        );
    }
}

/// Partial update for [`ReaderSettings`]; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReaderSettingsPatch {
    pub font_size: Option<u32>,
    pub font_family: Option<String>,
    pub line_height: Option<f64>,
    pub paragraph_spacing: Option<f64>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub theme: Option<Theme>,
    pub page_width: Option<u32>,
    pub padding: Option<u32>,
    pub text_align: Option<TextAlign>,
    pub column_count: Option<u32>,
    pub auto_scroll: Option<bool>,
    pub scroll_speed: Option<f64>,
    pub bionic_reading: Option<bool>,
    pub immersive_mode: Option<bool>,
}
