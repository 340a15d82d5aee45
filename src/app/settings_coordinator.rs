//! Generic settings persistence coordination.
//!
//! Settings are stored in eframe's persistent storage as JSON strings, so any
//! serde type can be kept across sessions.

use serde::{Deserialize, Serialize};

/// Coordinates generic settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Attempts to load a setting, returning None if not found or invalid.
    ///
    /// # Examples
    /// ```ignore
    /// let dir: Option<PathBuf> = SettingsCoordinator::try_load_setting(storage, "last_directory");
    /// ```
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let storage = storage?;
        let json_str = storage.get_string(key)?;
        serde_json::from_str(&json_str).ok()
    }

    /// Saves a setting to persistent storage.
    ///
    /// Values that fail to serialize are logged and skipped.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => storage.set_string(key, json_str),
            Err(e) => log::warn!("Could not persist setting {}: {}", key, e),
        }
    }
}
