//! Report formatting and printing utilities.
//!
//! All console output of the collector lives here, so the `core` library can
//! be used without printing side effects. Errors and warnings always go to
//! stderr; diagnostics (files scanned, keys found, duplicates) are printed
//! only in verbose mode.

use std::{
    collections::HashSet,
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::{
    FileOutcome, FileReport, RootScan, ScanRoot, SourceLocation, merge::MergeOutcome,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

const KEY_HEADER: &str = "Translation string";
const LOCATION_HEADER: &str = "Location";

/// Print an error. Always shown.
pub fn print_error(message: impl std::fmt::Display) {
    eprintln!("{} {}", "error:".bold().red(), message);
}

/// Print a warning. Always shown.
pub fn print_warning(message: impl std::fmt::Display) {
    eprintln!("{} {}", "warning:".bold().yellow(), message);
}

/// Print a success line with a checkmark.
pub fn print_success(message: &str) {
    println!("{} {}", SUCCESS_MARK.green(), message.green());
}

/// Print the verbose details of a finished scan.
pub fn print_scan(scan: &RootScan) {
    print_scan_to(scan, &mut io::stdout().lock());
}

pub fn print_scan_to<W: Write>(scan: &RootScan, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        "Scanning recursively".bold(),
        scan.root.path.display()
    );

    for file in &scan.files {
        print_file_to(file, writer);
    }

    let _ = writeln!(
        writer,
        "{} {} {} scanned, {} {} found, {} {}",
        "Summary:".bold(),
        scan.scanned_count(),
        plural(scan.scanned_count(), "file", "files"),
        scan.registry.len(),
        plural(scan.registry.len(), "key", "keys"),
        scan.registry.duplicate_count(),
        plural(scan.registry.duplicate_count(), "duplicate", "duplicates"),
    );

    // one line per repeated key, in discovery order
    let repeated: HashSet<&str> = scan
        .registry
        .duplicates()
        .iter()
        .map(String::as_str)
        .collect();
    for key in scan.registry.keys().filter(|key| repeated.contains(key)) {
        let _ = writeln!(
            writer,
            "  {} {}",
            "duplicate:".yellow(),
            display_key(key)
        );
    }
}

fn print_file_to<W: Write>(file: &FileReport, writer: &mut W) {
    match &file.outcome {
        FileOutcome::UnsupportedExtension => {
            let _ = writeln!(
                writer,
                "{} {} {}",
                "Skipping".dimmed(),
                file.path.dimmed(),
                "(extension not scanned)".dimmed()
            );
        }
        FileOutcome::NoMatches => {
            let _ = writeln!(writer, "Scanning file {}: no translations found", file.path);
        }
        FileOutcome::Unreadable(_) => {
            // reported as a warning by `print_unreadable`
        }
        FileOutcome::Extracted(found) => {
            let _ = writeln!(writer, "Scanning file {}:", file.path);
            print_key_table_to(found, writer);
        }
    }
}

/// Print files that could not be read. Always shown.
pub fn print_unreadable(scan: &RootScan) {
    for (path, reason) in scan.unreadable() {
        print_warning(format!("Skipped {}: {}", path, reason));
    }
}

/// Print a two-column table of keys and locations, aligned by display width.
pub fn print_key_table_to<W: Write>(rows: &[(String, SourceLocation)], writer: &mut W) {
    let keys: Vec<String> = rows.iter().map(|(key, _)| display_key(key)).collect();
    let width = keys
        .iter()
        .map(|k| UnicodeWidthStr::width(k.as_str()))
        .chain([UnicodeWidthStr::width(KEY_HEADER)])
        .max()
        .unwrap_or(0);

    let _ = writeln!(
        writer,
        "  {}{}  {}",
        KEY_HEADER.bold(),
        pad(KEY_HEADER, width),
        LOCATION_HEADER.bold()
    );
    for (key, (_, location)) in keys.iter().zip(rows) {
        let _ = writeln!(
            writer,
            "  {}{}  {}",
            key,
            pad(key, width),
            location.to_string().cyan()
        );
    }
}

/// Print where the generated catalog of a root was written.
pub fn print_dump_written(root: &ScanRoot, path: &Path) {
    print_success(&format!(
        "Dumped {} into {}",
        root.name,
        path.display()
    ));
}

/// Print the result of merging into one catalog.
pub fn print_merge(outcome: &MergeOutcome, verbose: bool) {
    print_merge_to(outcome, verbose, &mut io::stdout().lock());
}

pub fn print_merge_to<W: Write>(outcome: &MergeOutcome, verbose: bool, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Updated {}", outcome.path.display()).green()
    );
    if verbose {
        for key in &outcome.added {
            let _ = writeln!(writer, "  {} {}", "+".green(), display_key(key));
        }
    }
}

/// Keys may contain newlines; keep every key on one line.
fn display_key(key: &str) -> String {
    key.replace('\n', "\\n").replace('\r', "\\r")
}

fn pad(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(UnicodeWidthStr::width(text)))
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
