//! Scanning of a single root: walk, extract, accumulate.

use std::{
    fs,
    path::{Path, PathBuf},
};

use super::{
    extractor::extract_keys,
    file_scanner::{IgnoreRules, walk_files},
    registry::{KeyRegistry, SourceLocation},
};
use crate::{error::Result, utils::relative_path};

/// A directory designated as a source of translation keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRoot {
    /// Absolute directory path.
    pub path: PathBuf,
    /// Path relative to the project root, `/`-separated. Names the dump file.
    pub name: String,
}

impl ScanRoot {
    pub fn new(project_root: &Path, dir: impl AsRef<Path>) -> Self {
        let path = project_root.join(dir);
        let name = relative_path(&path, project_root);
        Self { path, name }
    }
}

/// What happened to a single file during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Keys found, in file order.
    Extracted(Vec<(String, SourceLocation)>),
    NoMatches,
    /// Extension not in the configured set; never read.
    UnsupportedExtension,
    /// The file or directory entry could not be read and was skipped.
    Unreadable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Project-relative path.
    pub path: String,
    pub outcome: FileOutcome,
}

/// Result of scanning one root.
#[derive(Debug)]
pub struct RootScan {
    pub root: ScanRoot,
    pub registry: KeyRegistry,
    pub files: Vec<FileReport>,
}

impl RootScan {
    pub fn scanned_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| {
                matches!(
                    f.outcome,
                    FileOutcome::Extracted(_) | FileOutcome::NoMatches
                )
            })
            .count()
    }

    pub fn unreadable(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().filter_map(|f| match &f.outcome {
            FileOutcome::Unreadable(reason) => Some((f.path.as_str(), reason.as_str())),
            _ => None,
        })
    }
}

/// Settings shared by every root of one run.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub project_root: PathBuf,
    pub extensions: Vec<String>,
    pub ignores: IgnoreRules,
}

/// Scans `root` into a fresh registry.
///
/// Fails only when the root itself is inaccessible. Unreadable files are
/// recorded in the report and skipped.
pub fn scan_root(root: &ScanRoot, options: &ScanOptions) -> Result<RootScan> {
    let mut registry = KeyRegistry::new();
    let mut files = Vec::new();

    for entry in walk_files(&root.path, &options.ignores)? {
        let file = match entry {
            Ok(file) => file,
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| relative_path(p, &options.project_root))
                    .unwrap_or_else(|| root.name.clone());
                files.push(FileReport {
                    path,
                    outcome: FileOutcome::Unreadable(e.to_string()),
                });
                continue;
            }
        };

        let path = relative_path(&file.path, &options.project_root);
        let outcome = if file.has_extension(&options.extensions) {
            extract_file(&file.path, &path, &mut registry)
        } else {
            FileOutcome::UnsupportedExtension
        };
        files.push(FileReport { path, outcome });
    }

    Ok(RootScan {
        root: root.clone(),
        registry,
        files,
    })
}

fn extract_file(path: &Path, relative: &str, registry: &mut KeyRegistry) -> FileOutcome {
    let content = match fs::read(path) {
        Ok(content) => content,
        Err(e) => return FileOutcome::Unreadable(e.to_string()),
    };

    let found: Vec<_> = extract_keys(&content)
        .map(|m| (m.key, SourceLocation::new(relative, m.offset)))
        .collect();

    if found.is_empty() {
        return FileOutcome::NoMatches;
    }
    for (key, location) in &found {
        registry.record(key.clone(), location.clone());
    }
    FileOutcome::Extracted(found)
}
