use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".transcollect.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directories scanned by default, relative to the project root.
    #[serde(default = "default_roots")]
    pub roots: Vec<String>,
    /// Directories scanned in test mode instead of `roots`.
    #[serde(default = "default_test_roots")]
    pub test_roots: Vec<String>,
    /// File extensions passed to the extractor.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Where generated catalogs are written.
    #[serde(default = "default_dump_dir")]
    pub dump_dir: String,
    /// Directory searched (recursively) for merge targets.
    #[serde(default = "default_catalog_dir")]
    pub catalog_dir: String,
    /// File stem of merge targets, e.g. `messages` for `en/messages.tcat`.
    #[serde(default = "default_catalog_name")]
    pub catalog_name: String,
}

fn default_roots() -> Vec<String> {
    ["app", "resources/views"].map(String::from).to_vec()
}

fn default_test_roots() -> Vec<String> {
    vec!["tests/translations".to_string()]
}

fn default_extensions() -> Vec<String> {
    vec!["php".to_string()]
}

fn default_dump_dir() -> String {
    "resources/lang/dump".to_string()
}

fn default_catalog_dir() -> String {
    "resources/lang".to_string()
}

fn default_catalog_name() -> String {
    "messages".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            test_roots: default_test_roots(),
            extensions: default_extensions(),
            ignores: Vec::new(),
            dump_dir: default_dump_dir(),
            catalog_dir: default_catalog_dir(),
            catalog_name: default_catalog_name(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if an ignore glob is invalid or no extension is set.
    pub fn validate(&self) -> Result<()> {
        // Entries without * or ? are literal directory paths, not globs.
        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, or `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
