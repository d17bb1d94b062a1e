//! User-defined novel groupings

use serde::{Deserialize, Serialize};

/// A named, colored group of novels
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,

    /// Display color, e.g. `#3b82f6`
    pub color: String,

    /// Member novel ids in insertion order
    pub novel_ids: Vec<String>,
}

impl Category {
    /// Create an empty category with a fresh id
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            color: color.into(),
            novel_ids: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn contains(&self, novel_id: &str) -> bool {
        self.novel_ids.iter().any(|id| id == novel_id)
    }
}
