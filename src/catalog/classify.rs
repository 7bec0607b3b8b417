use std::collections::HashMap;

use super::LanguageMap;
use crate::path_info::PathInfo;

/// A file kept for the document, with its listing language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetainedFile {
    pub path: PathInfo,
    pub language: String,
}

/// Retained files keyed by path string, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    files: Vec<RetainedFile>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a file. Returns `false` (and keeps the first entry) when the
    /// path is already present.
    pub fn insert(&mut self, path: PathInfo, language: impl Into<String>) -> bool {
        if self.index.contains_key(path.full_path()) {
            return false;
        }
        self.index
            .insert(path.full_path().to_string(), self.files.len());
        self.files.push(RetainedFile {
            path,
            language: language.into(),
        });
        true
    }

    pub fn get(&self, path: &str) -> Option<&RetainedFile> {
        self.index.get(path).map(|&i| &self.files[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &RetainedFile> {
        self.files.iter()
    }

    /// Path strings in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.path.full_path())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a RetainedFile;
    type IntoIter = std::slice::Iter<'a, RetainedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

/// Keep files whose extension has a language, preserving input order.
pub fn classify(files: Vec<PathInfo>, languages: &LanguageMap) -> Catalog {
    let mut catalog = Catalog::new();
    for file in files {
        if let Some(language) = languages.language_for(file.extension()) {
            let language = language.to_string();
            catalog.insert(file, language);
        }
    }
    catalog
}
