#![allow(dead_code)]

use mintree::layout::DrawCommand;
use mintree::path_info::PathInfo;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create small files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, format!("// {p}\n")).unwrap();
        }
    }
    tmp
}

/// `/`-separated relative paths, as the layout engine receives them.
pub fn rel_paths(paths: &[&str]) -> Vec<PathInfo> {
    paths
        .iter()
        .map(|p| PathInfo::with_separator(*p, '/'))
        .collect()
}

/// Discovered paths below `root`, rendered with `/` for comparison.
pub fn below_root(root: &Path, files: &[PathInfo]) -> Vec<String> {
    files
        .iter()
        .map(|f| {
            Path::new(f.full_path())
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

pub fn folder_names(labels: &[DrawCommand]) -> Vec<&str> {
    labels
        .iter()
        .filter_map(|l| match l {
            DrawCommand::FolderLabel { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

pub fn file_names(labels: &[DrawCommand]) -> Vec<&str> {
    labels
        .iter()
        .filter_map(|l| match l {
            DrawCommand::FileLabel { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

pub fn label_text(label: &DrawCommand) -> &str {
    match label {
        DrawCommand::FolderLabel { text, .. } | DrawCommand::FileLabel { text, .. } => {
            text.as_str()
        }
        DrawCommand::Connector { .. } => "",
    }
}
