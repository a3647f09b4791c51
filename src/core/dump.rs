//! Generated catalogs: one file per scan root, rebuilt on every run.

use std::path::{Path, PathBuf};

use super::{
    catalog::{
        text::{self, Entry, GENERATED_BANNER},
        write_file,
    },
    registry::KeyRegistry,
    scan::ScanRoot,
};
use crate::{error::Result, utils::slug};

/// `<dump_dir>/<slug(root name)>.tcat`
pub fn dump_path(dump_dir: &Path, root: &ScanRoot) -> PathBuf {
    dump_dir.join(format!("{}.{}", slug(&root.name), text::EXTENSION))
}

/// Renders the registry as a generated catalog, keys mapped to themselves.
///
/// With `include_locations`, every line carries a `path:offset` comment for
/// the last place the key was seen.
pub fn render_dump(registry: &KeyRegistry, include_locations: bool) -> String {
    let locations: Vec<Option<String>> = registry
        .keys()
        .map(|key| {
            include_locations
                .then(|| registry.location_of(key).map(ToString::to_string))
                .flatten()
        })
        .collect();

    text::render(
        GENERATED_BANNER,
        registry.keys().zip(&locations).map(|(key, location)| Entry {
            key,
            value: key,
            comment: location.as_deref(),
        }),
    )
}

/// Renders and writes the dump for `root`, returning the file written.
pub fn write_dump(
    dump_dir: &Path,
    root: &ScanRoot,
    registry: &KeyRegistry,
    include_locations: bool,
) -> Result<PathBuf> {
    let path = dump_path(dump_dir, root);
    write_file(&path, &render_dump(registry, include_locations))?;
    Ok(path)
}
