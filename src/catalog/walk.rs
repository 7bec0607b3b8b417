use globset::{Glob, GlobSet, GlobSetBuilder};
use std::cmp::Ordering;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::path_info::PathInfo;

/// Build-output and tooling folders that never hold listable sources.
pub const DEFAULT_IGNORES: &[&str] = &[
    "bin",
    "Builds",
    "obj",
    "Debug",
    "x64",
    ".vs",
    ".git",
    "Properties",
];

/// Build a GlobSet from directory names or glob patterns.
/// Invalid patterns are skipped and reported.
pub fn build_ignore_set<S: AsRef<str>>(patterns: &[S]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    let mut invalid = Vec::new();
    for pattern in patterns {
        match Glob::new(pattern.as_ref()) {
            Ok(g) => {
                builder.add(g);
            }
            Err(_) => invalid.push(pattern.as_ref().to_string()),
        }
    }
    if !invalid.is_empty() {
        warn!(?invalid, "invalid ignore pattern(s), skipped");
    }
    builder.build().unwrap_or_else(|e| {
        warn!("failed to build ignore set: {e}");
        GlobSet::empty()
    })
}

/// List every file under `root` in pre-order, skipping ignored directories.
///
/// Within a folder, files come before subfolders and each group is ordered
/// by name. A missing root is reported and yields an empty list.
pub fn list_files(root: &Path, ignore_names: &GlobSet) -> Vec<PathInfo> {
    walk_files(root, ignore_names, false)
}

pub(crate) fn walk_files(
    root: &Path,
    ignore_names: &GlobSet,
    follow_symlinks: bool,
) -> Vec<PathInfo> {
    if !root.is_dir() {
        warn!("directory not found: {}", root.display());
        return Vec::new();
    }

    let ignore_names = ignore_names.clone();
    let walker = WalkDir::new(root)
        .follow_links(follow_symlinks)
        .sort_by(sort_cmp)
        .into_iter()
        // Pruning here keeps ignored folders from being descended at all.
        .filter_entry(move |entry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || !ignore_names.is_match(entry.file_name())
        });

    let mut files = Vec::new();
    for entry_result in walker {
        match entry_result {
            Ok(entry) => {
                if entry.file_type().is_dir() {
                    continue;
                }
                files.push(PathInfo::from_path(entry.path()));
            }
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "???".to_string());
                warn!("skipping {path}: {e}");
            }
        }
    }

    debug!(count = files.len(), root = %root.display(), "listed files");
    files
}

/// Files before directories, then case-insensitive alphabetical.
fn sort_cmp(a: &DirEntry, b: &DirEntry) -> Ordering {
    let a_is_dir = a.file_type().is_dir();
    let b_is_dir = b.file_type().is_dir();

    if a_is_dir != b_is_dir {
        return if a_is_dir {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }

    let a_name = a.file_name().to_string_lossy().to_lowercase();
    let b_name = b.file_name().to_string_lossy().to_lowercase();
    a_name
        .cmp(&b_name)
        .then_with(|| a.file_name().cmp(b.file_name()))
}
