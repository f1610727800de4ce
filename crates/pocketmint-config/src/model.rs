use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Stores user-configurable preferences and the storage location.
///
/// The data root decides where the JSON store keeps its collections; it is
/// resolved once at startup and the resulting store handed to every
/// repository, so no consumer ever picks a backend on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for persisted collections.
    /// Defaults to `~/Documents/Pocketmint`.
    pub data_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-IN".into(),
            currency: "INR".into(),
            data_root: None,
        }
    }
}

impl Config {
    pub fn resolve_data_root(&self) -> PathBuf {
        if let Some(path) = &self.data_root {
            return path.clone();
        }

        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("Pocketmint")
    }
}
