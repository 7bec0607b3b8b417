//! File discovery, ignore filtering, and language classification.

mod classify;
mod languages;
pub(crate) mod walk;

use globset::GlobSet;
use std::path::Path;

use crate::path_info::PathInfo;

pub use classify::{classify, Catalog, RetainedFile};
pub use languages::LanguageMap;
pub use walk::{build_ignore_set, list_files, DEFAULT_IGNORES};

/// Configuration for discovering and classifying source files.
pub struct CatalogConfig {
    /// Directory names that are never descended into.
    pub ignore_names: GlobSet,
    /// Extension to listing language table.
    pub languages: LanguageMap,
    /// Whether to follow symbolic links during traversal.
    pub follow_symlinks: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            ignore_names: build_ignore_set(DEFAULT_IGNORES),
            languages: LanguageMap::default(),
            follow_symlinks: false,
        }
    }
}

/// Abstraction over file discovery so it can be swapped or mocked.
pub trait FileLister {
    fn list_files(&self, root: &Path, config: &CatalogConfig) -> Vec<PathInfo>;
}

/// Default `FileLister` backed by walkdir.
pub struct WalkdirLister;

impl FileLister for WalkdirLister {
    fn list_files(&self, root: &Path, config: &CatalogConfig) -> Vec<PathInfo> {
        walk::walk_files(root, &config.ignore_names, config.follow_symlinks)
    }
}

/// Discover every file under `root` and keep the ones with a known language.
pub fn scan(root: &Path, config: &CatalogConfig) -> Catalog {
    scan_with(&WalkdirLister, root, config)
}

/// Like [`scan`], with an explicit lister.
pub fn scan_with(lister: &dyn FileLister, root: &Path, config: &CatalogConfig) -> Catalog {
    let files = lister.list_files(root, config);
    let discovered = files.len();
    let catalog = classify(files, &config.languages);
    tracing::debug!(
        discovered,
        retained = catalog.len(),
        languages = config.languages.len(),
        root = %root.display(),
        "classified source files"
    );
    catalog
}
