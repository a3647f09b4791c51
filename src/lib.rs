//! trans-collect - translation key collector
//!
//! Scans source and template files for `trans('...')` calls, writes a
//! deterministic generated catalog per scanned directory, and can merge newly
//! found keys into existing message catalogs without touching existing
//! entries.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Collection engine (walk, extract, accumulate, dump, merge)
//! - `error`: Library error type
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use error::{Error, Result};
