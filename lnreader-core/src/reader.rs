//! Persisted reader preferences

use crate::error::Result;
use crate::library::{load_or_default, save};
use crate::storage::StorageProvider;
use crate::types::{ReaderSettings, ReaderSettingsPatch};
use std::sync::Arc;

/// Storage key for the reader settings record
pub const READER_SETTINGS_KEY: &str = "lnreader-reader-settings";

/// Holds the reader settings record and writes it back on every change
pub struct ReaderStore {
    storage: Arc<dyn StorageProvider>,
    settings: ReaderSettings,
}

impl ReaderStore {
    pub async fn load(storage: Arc<dyn StorageProvider>) -> Self {
        let settings =
            load_or_default(storage.as_ref(), READER_SETTINGS_KEY, ReaderSettings::default).await;
        Self { storage, settings }
    }

    pub fn settings(&self) -> &ReaderSettings {
        &self.settings
    }

    /// Shallow-merge the patch into the current settings
    pub async fn update_settings(&mut self, patch: ReaderSettingsPatch) -> Result<()> {
        self.settings.apply(patch);
        save(self.storage.as_ref(), READER_SETTINGS_KEY, &self.settings).await
    }

    /// Restore the default record
    pub async fn reset_settings(&mut self) -> Result<()> {
        self.settings = ReaderSettings::default();
        save(self.storage.as_ref(), READER_SETTINGS_KEY, &self.settings).await
    }
}
