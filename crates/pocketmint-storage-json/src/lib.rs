//! pocketmint-storage-json
//!
//! Filesystem-backed implementation of the core [`KeyValueStore`] trait:
//! one JSON document per key, written atomically via a temp file rename so
//! a failed write never corrupts the previous payload.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use pocketmint_core::{CoreError, KeyValueStore};

const ENTRY_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Stores each key as `<root>/<sanitized-key>.json`.
#[derive(Debug, Clone)]
pub struct JsonKeyValueStore {
    root: PathBuf,
}

impl JsonKeyValueStore {
    /// Opens the store rooted at `root`, creating the directory if needed.
    pub fn new(root: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem location backing `key`.
    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_key(key), ENTRY_EXTENSION))
    }
}

impl KeyValueStore for JsonKeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, CoreError> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), CoreError> {
        let path = self.entry_path(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = tmp_path(&path);
        write_atomic(&tmp, payload)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        let path = self.entry_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

fn canonical_key(key: &str) -> String {
    let sanitized: String = key
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "entry".into()
    } else {
        sanitized
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
