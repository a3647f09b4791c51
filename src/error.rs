//! Error types returned by the collector library.
//!
//! Extraction itself never fails: a file either yields keys or it doesn't.
//! Only root access, catalog loading, rendering and writing can go wrong.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A scan root is missing, not a directory, or unreadable.
    #[error("cannot scan {}: {reason}", path.display())]
    Scan { path: PathBuf, reason: String },

    /// An existing catalog could not be read or parsed.
    #[error("cannot load catalog {}: {reason}", path.display())]
    CatalogLoad { path: PathBuf, reason: String },

    /// A merged catalog could not be rendered; the target is left untouched.
    #[error("cannot render catalog {}: {source}", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An output file or its directory could not be written.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn scan(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::Scan {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn catalog_load(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::CatalogLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn render(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::Render {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Write {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
