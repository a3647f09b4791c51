use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use super::super::{
    args::{CollectArgs, CollectCommand},
    exit_status::ExitStatus,
    report::{
        print_dump_written, print_error, print_merge, print_scan, print_unreadable,
        print_warning,
    },
};
use crate::{
    config::{Config, load_config},
    core::{
        KeyRegistry, ScanOptions, ScanRoot,
        dump::write_dump,
        file_scanner::IgnoreRules,
        merge::{find_merge_targets, merge_all},
        scan_root,
    },
};

/// Everything a collect run needs, resolved once up front.
///
/// Configuration priority (highest to lowest):
/// 1. CLI arguments (e.g. `--root`, `--dump-dir`)
/// 2. `.transcollect.json` config file
/// 3. Built-in defaults
#[derive(Debug)]
pub struct CollectContext {
    pub project_root: PathBuf,
    pub config: Config,
    pub roots: Vec<ScanRoot>,
    pub options: ScanOptions,
    pub dump_dir: PathBuf,
    pub catalog_dir: PathBuf,
    pub include_locations: bool,
    pub append: bool,
    pub verbose: bool,
}

impl CollectContext {
    pub fn new(args: &CollectArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read current directory")?;
        let (project_root, config) = resolve_project(&cwd, args.common.project_root.as_deref())?;

        if !project_root.is_dir() {
            bail!("Project root does not exist: {}", project_root.display());
        }

        let roots = if !args.roots.is_empty() {
            args.roots
                .iter()
                .map(|dir| ScanRoot::new(&project_root, dir))
                .collect()
        } else if args.test {
            config
                .test_roots
                .iter()
                .map(|dir| ScanRoot::new(&project_root, dir))
                .collect()
        } else {
            config
                .roots
                .iter()
                .map(|dir| ScanRoot::new(&project_root, dir))
                .collect()
        };

        let ignores = IgnoreRules::new(&project_root, &config.ignores)
            .context("Invalid glob pattern in 'ignores'")?;
        let dump_dir = project_root.join(
            args.dump_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.dump_dir)),
        );
        let catalog_dir = project_root.join(
            args.catalog_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.catalog_dir)),
        );

        Ok(Self {
            options: ScanOptions {
                project_root: project_root.clone(),
                extensions: config.extensions.clone(),
                ignores,
            },
            project_root,
            roots,
            dump_dir,
            catalog_dir,
            include_locations: args.location,
            append: args.append,
            verbose: args.common.verbose,
            config,
        })
    }
}

/// Finds the project root and its configuration.
///
/// An explicit root is used as is. Otherwise the directory holding the
/// config file wins, falling back to the current directory.
fn resolve_project(cwd: &Path, explicit_root: Option<&Path>) -> Result<(PathBuf, Config)> {
    match explicit_root {
        Some(root) => {
            let root = cwd.join(root);
            let loaded = load_config(&root)?;
            Ok((root, loaded.config))
        }
        None => {
            let loaded = load_config(cwd)?;
            let root = loaded
                .path
                .as_deref()
                .and_then(Path::parent)
                .map(Path::to_path_buf)
                .unwrap_or_else(|| cwd.to_path_buf());
            Ok((root, loaded.config))
        }
    }
}

pub fn collect(cmd: CollectCommand) -> Result<ExitStatus> {
    let ctx = CollectContext::new(&cmd.args)?;

    let mut failed = false;
    for root in &ctx.roots {
        if !collect_root(&ctx, root) {
            failed = true;
        }
    }

    Ok(if failed {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    })
}

/// Scans, dumps and optionally merges one root. Returns false on any failure.
fn collect_root(ctx: &CollectContext, root: &ScanRoot) -> bool {
    let scan = match scan_root(root, &ctx.options) {
        Ok(scan) => scan,
        Err(e) => {
            print_error(e);
            return false;
        }
    };

    if ctx.verbose {
        print_scan(&scan);
    }
    print_unreadable(&scan);

    let mut ok = true;
    match write_dump(&ctx.dump_dir, root, &scan.registry, ctx.include_locations) {
        Ok(path) => print_dump_written(root, &path),
        Err(e) => {
            print_error(e);
            ok = false;
        }
    }

    if ctx.append && !merge_catalogs(ctx, &scan.registry) {
        ok = false;
    }

    ok
}

fn merge_catalogs(ctx: &CollectContext, registry: &KeyRegistry) -> bool {
    let mut ok = true;
    let mut targets = Vec::new();
    for found in find_merge_targets(
        &ctx.catalog_dir,
        &ctx.config.catalog_name,
        Some(&ctx.dump_dir),
    ) {
        match found {
            Ok(path) => targets.push(path),
            Err(e) => {
                print_error(e);
                ok = false;
            }
        }
    }

    if targets.is_empty() {
        if ok {
            print_warning(format!(
                "No {} catalogs found under {}",
                ctx.config.catalog_name.bold(),
                ctx.catalog_dir.display()
            ));
        }
        return ok;
    }

    for result in merge_all(&targets, registry) {
        match result {
            Ok(outcome) => print_merge(&outcome, ctx.verbose),
            Err(e) => {
                print_error(e);
                ok = false;
            }
        }
    }
    ok
}
