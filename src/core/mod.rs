//! Core collection engine.
//!
//! The pipeline for one scan root:
//!
//! 1. **Walk** (`file_scanner`): enumerate files, filter by extension
//! 2. **Extract** (`extractor`): find `trans('...')` literals with offsets
//! 3. **Accumulate** (`registry`): dedupe keys in discovery order
//! 4. **Dump** (`dump`): write the generated catalog for the root
//! 5. **Merge** (`merge`, optional): add new keys to existing catalogs
//!
//! `scan` ties steps 1-3 together. Nothing in this module prints.

pub mod catalog;
pub mod dump;
pub mod extractor;
pub mod file_scanner;
pub mod merge;
pub mod registry;
pub mod scan;

pub use catalog::{Catalog, CatalogFormat};
pub use registry::{KeyRegistry, SourceLocation};
pub use scan::{FileOutcome, FileReport, RootScan, ScanOptions, ScanRoot, scan_root};
