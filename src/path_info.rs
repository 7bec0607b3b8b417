//! Path decomposition into folder segments, file name, and extension.

use std::path::{Path, MAIN_SEPARATOR};

const EXTENSION_SEPARATOR: char = '.';

/// One discovered file: its path, final segment, and compound extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathInfo {
    full_path: String,
    file_name: String,
    extension: String,
    separator: char,
}

impl PathInfo {
    /// Build from a path string using the platform directory separator.
    pub fn new(full_path: impl Into<String>) -> Self {
        Self::with_separator(full_path, MAIN_SEPARATOR)
    }

    /// Build from a path string split on `separator`.
    pub fn with_separator(full_path: impl Into<String>, separator: char) -> Self {
        let full_path = full_path.into();
        let file_name = full_path
            .rsplit(separator)
            .next()
            .unwrap_or_default()
            .to_string();
        let extension = extract_extension(&file_name);
        Self {
            full_path,
            file_name,
            extension,
            separator,
        }
    }

    /// Build from a filesystem path (non-UTF-8 bytes are replaced).
    pub fn from_path(path: &Path) -> Self {
        Self::new(path.to_string_lossy().into_owned())
    }

    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Everything from the first `.` of the file name, so `Foo.xaml.cs` gives
    /// `.xaml.cs`. Empty when the name has no `.`.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.full_path.split(self.separator)
    }

    /// Folder nesting of the file: number of segments minus one.
    pub fn depth(&self) -> usize {
        self.segments().count().saturating_sub(1)
    }

    /// The path re-written with `separator` between segments.
    pub fn path_with_separator(&self, separator: char) -> String {
        self.full_path.replace(self.separator, &separator.to_string())
    }

    /// Path beneath `start`, prefixed with the last segment of `start`.
    ///
    /// `/home/u/proj/src/a.cs` relative to `/home/u/proj` is `proj/src/a.cs`.
    /// A filesystem-root start has no name, so the path keeps its leading
    /// separator (`/a.cs`). Returns `None` when the file is not under `start`.
    pub fn relative_to(&self, start: &str) -> Option<PathInfo> {
        let start = start.trim_end_matches(self.separator);
        let rest = self.full_path.strip_prefix(start)?;
        if !rest.starts_with(self.separator) {
            return None;
        }
        let start_name = start.rsplit(self.separator).next().unwrap_or_default();
        Some(PathInfo::with_separator(
            format!("{start_name}{rest}"),
            self.separator,
        ))
    }
}

/// Split on the first `.` only so compound extensions survive.
fn extract_extension(file_name: &str) -> String {
    match file_name.split_once(EXTENSION_SEPARATOR) {
        Some((_, rest)) => format!("{EXTENSION_SEPARATOR}{rest}"),
        None => String::new(),
    }
}
