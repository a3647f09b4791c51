//! Merging discovered keys into existing catalogs.
//!
//! Existing entries always win: a key already present keeps its value and
//! position, and new keys are appended in discovery order mapped to
//! themselves.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{
    catalog::{Catalog, CatalogFormat, load_catalog, write_file},
    registry::KeyRegistry,
};
use crate::error::{Error, Result};

/// Outcome of merging into one catalog file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub path: PathBuf,
    /// Keys appended to the catalog, in discovery order.
    pub added: Vec<String>,
}

/// Finds every merge target under `catalog_dir`.
///
/// A target is a file named `<catalog_name>.<ext>` where `ext` is a
/// supported catalog format. Anything under `exclude_dir` (the dump
/// directory) is skipped. A missing directory has no targets; an entry that
/// cannot be read is yielded as an error in walk order.
pub fn find_merge_targets(
    catalog_dir: &Path,
    catalog_name: &str,
    exclude_dir: Option<&Path>,
) -> Vec<Result<PathBuf>> {
    if !catalog_dir.is_dir() {
        return Vec::new();
    }

    WalkDir::new(catalog_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| exclude_dir.is_none_or(|dir| !entry.path().starts_with(dir)))
        .filter_map(|entry| match entry {
            Ok(entry) => (entry.file_type().is_file()
                && is_merge_target(entry.path(), catalog_name))
            .then(|| Ok(entry.into_path())),
            Err(e) => Some(Err(walk_error(catalog_dir, e))),
        })
        .collect()
}

fn is_merge_target(path: &Path, catalog_name: &str) -> bool {
    path.file_stem().and_then(|s| s.to_str()) == Some(catalog_name)
        && CatalogFormat::from_path(path).is_some()
}

fn walk_error(catalog_dir: &Path, error: walkdir::Error) -> Error {
    let path = error.path().unwrap_or(catalog_dir).to_path_buf();
    Error::catalog_load(path, error.to_string())
}

/// Appends every registry key missing from `catalog`. Returns the added keys.
pub fn merge_keys(catalog: &mut Catalog, registry: &KeyRegistry) -> Vec<String> {
    let mut added = Vec::new();
    for key in registry.keys() {
        if catalog.insert_if_absent(key, key) {
            added.push(key.to_string());
        }
    }
    added
}

/// Loads `path`, merges the registry's keys into it and rewrites it.
pub fn merge_into_file(path: &Path, registry: &KeyRegistry) -> Result<MergeOutcome> {
    let format = CatalogFormat::from_path(path)
        .ok_or_else(|| Error::catalog_load(path, "unsupported catalog file extension"))?;
    let mut catalog = load_catalog(path, format)?;

    let added = merge_keys(&mut catalog, registry);

    let content = format
        .render_merged(&catalog)
        .map_err(|e| Error::render(path, e))?;
    write_file(path, &content)?;

    Ok(MergeOutcome {
        path: path.to_path_buf(),
        added,
    })
}

/// Merges into every target. A failing target does not stop the others.
pub fn merge_all(
    targets: &[PathBuf],
    registry: &KeyRegistry,
) -> Vec<Result<MergeOutcome>> {
    targets
        .iter()
        .map(|path| merge_into_file(path, registry))
        .collect()
}
