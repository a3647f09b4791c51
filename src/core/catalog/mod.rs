//! Catalog model and on-disk formats.
//!
//! Two formats are supported:
//!
//! - `tcat`: the line-oriented catalog text format (see [`text`]), used for
//!   generated dumps and merge targets.
//! - `json`: a flat JSON object of string values, accepted as a merge target.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::error::{Error, Result};

pub mod json;
pub mod text;

/// Insertion-ordered mapping from translation key to display string.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`. An existing key keeps its position.
    ///
    /// Returns `true` if the key was not present before.
    pub fn insert(&mut self, key: String, value: String) -> bool {
        match self.index.get(&key) {
            Some(&pos) => {
                self.entries[pos].1 = value;
                false
            }
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                true
            }
        }
    }

    /// Adds `key` only if it is absent. Existing values are never touched.
    pub fn insert_if_absent(&mut self, key: &str, value: &str) -> bool {
        if self.index.contains_key(key) {
            return false;
        }
        self.insert(key.to_string(), value.to_string())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl FromIterator<(String, String)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for (key, value) in iter {
            catalog.insert(key, value);
        }
        catalog
    }
}

/// On-disk catalog format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Text,
    Json,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(text::EXTENSION) => Some(CatalogFormat::Text),
            Some("json") => Some(CatalogFormat::Json),
            _ => None,
        }
    }

    pub fn parse(self, content: &str) -> Result<Catalog, String> {
        match self {
            CatalogFormat::Text => text::parse(content).map_err(|e| e.to_string()),
            CatalogFormat::Json => json::parse(content),
        }
    }

    /// Renders `catalog` for rewriting a merge target.
    ///
    /// Text targets get the "updated" banner; JSON has no room for one.
    pub fn render_merged(self, catalog: &Catalog) -> Result<String, serde_json::Error> {
        match self {
            CatalogFormat::Text => Ok(text::render_catalog(text::UPDATED_BANNER, catalog)),
            CatalogFormat::Json => json::render(catalog),
        }
    }
}

/// Reads and parses an existing catalog file in the given format.
pub fn load_catalog(path: &Path, format: CatalogFormat) -> Result<Catalog> {
    let content =
        fs::read_to_string(path).map_err(|e| Error::catalog_load(path, e.to_string()))?;
    format
        .parse(&content)
        .map_err(|reason| Error::catalog_load(path, reason))
}

/// Writes `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::write(parent, e))?;
    }
    fs::write(path, content).map_err(|e| Error::write(PathBuf::from(path), e))
}
