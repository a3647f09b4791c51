use std::{collections::HashMap, fmt};

use super::catalog::Catalog;

/// Where a key was seen: a project-relative file path and a byte offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub file_path: String,
    pub offset: usize,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, offset: usize) -> Self {
        Self {
            file_path: file_path.into(),
            offset,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file_path, self.offset)
    }
}

/// Keys discovered while scanning one root.
///
/// Iteration order is the order in which keys were first discovered across
/// the whole scan. Every repeat sighting of a key, whether in the same file
/// or another one, is counted as one duplicate.
#[derive(Debug, Default)]
pub struct KeyRegistry {
    keys: Vec<String>,
    locations: HashMap<String, SourceLocation>,
    duplicates: Vec<String>,
}

impl KeyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a sighting of `key`. Returns `true` if the key is new.
    ///
    /// The stored location is always replaced by `location`.
    pub fn record(&mut self, key: String, location: SourceLocation) -> bool {
        let is_new = !self.locations.contains_key(&key);
        if is_new {
            self.keys.push(key.clone());
        } else {
            self.duplicates.push(key.clone());
        }
        self.locations.insert(key, location);
        is_new
    }

    /// Unique keys in first-discovery order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// The most recently recorded location of `key`.
    pub fn location_of(&self, key: &str) -> Option<&SourceLocation> {
        self.locations.get(key)
    }

    /// Keys seen again after their first sighting, once per repeat.
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    pub fn duplicate_count(&self) -> usize {
        self.duplicates.len()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Scaffold catalog where every key maps to itself.
    pub fn to_catalog(&self) -> Catalog {
        self.keys().map(|key| (key.to_string(), key.to_string())).collect()
    }
}
