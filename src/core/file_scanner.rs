use std::{
    fs,
    path::{Path, PathBuf},
};

use glob::Pattern;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// A regular file found under a scan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Suffix after the last `.` of the file name, if any.
    pub extension: Option<String>,
}

impl SourceFile {
    fn new(path: PathBuf) -> Self {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned());
        Self { path, extension }
    }

    pub fn has_extension(&self, extensions: &[String]) -> bool {
        self.extension
            .as_deref()
            .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
    }
}

/// Paths to leave out of a walk.
///
/// Literal entries are directories relative to the project root and skip
/// everything beneath them; entries with `*` or `?` are glob patterns matched
/// against the full path.
#[derive(Debug, Default, Clone)]
pub struct IgnoreRules {
    literal_paths: Vec<PathBuf>,
    glob_patterns: Vec<Pattern>,
}

impl IgnoreRules {
    /// Builds rules from config entries, relative to `base_dir`.
    pub fn new(base_dir: &Path, ignores: &[String]) -> Result<Self, glob::PatternError> {
        let mut rules = IgnoreRules::default();

        for p in ignores {
            if is_glob_pattern(p) {
                rules.glob_patterns.push(Pattern::new(p)?);
            } else {
                rules.literal_paths.push(base_dir.join(p));
            }
        }

        Ok(rules)
    }

    pub fn is_ignored(&self, path: &Path) -> bool {
        if self
            .literal_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            return true;
        }
        let path_str = path.to_string_lossy();
        self.glob_patterns.iter().any(|p| p.matches(&path_str))
    }
}

/// Lazily walks every regular file under `root`, depth first.
///
/// Fails up front when the root is missing, not a directory, or unreadable.
/// Errors on entries deeper in the tree are yielded in place and do not stop
/// the walk. Directory symlinks are not followed; entries are visited in file
/// name order so repeated walks agree.
pub fn walk_files<'a>(
    root: &'a Path,
    ignores: &'a IgnoreRules,
) -> Result<impl Iterator<Item = Result<SourceFile, walkdir::Error>> + 'a> {
    let metadata = fs::metadata(root).map_err(|e| Error::scan(root, e.to_string()))?;
    if !metadata.is_dir() {
        return Err(Error::scan(root, "not a directory"));
    }
    fs::read_dir(root).map_err(|e| Error::scan(root, e.to_string()))?;

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| !ignores.is_ignored(entry.path()));

    Ok(walker.filter_map(|entry| match entry {
        Ok(entry) => {
            let path = entry.path();
            path.is_file()
                .then(|| Ok(SourceFile::new(entry.into_path())))
        }
        Err(e) => Some(Err(e)),
    }))
}
