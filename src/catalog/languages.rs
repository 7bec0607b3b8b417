use std::collections::HashMap;

/// Default extension table: C# sources plus XAML and manifest markup.
const DEFAULT_LANGUAGES: &[(&str, &str)] = &[
    (".cs", "cs"),
    (".xaml.cs", "cs"),
    (".xaml", "xml"),
    (".manifest", "xml"),
    (".appxmanifest", "xml"),
];

/// Maps a compound extension (with its leading `.`) to a minted language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageMap {
    by_extension: HashMap<String, String>,
}

impl LanguageMap {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            by_extension: pairs
                .into_iter()
                .map(|(ext, lang)| (ext.to_string(), lang.to_string()))
                .collect(),
        }
    }

    /// Language for an exact extension match. The empty extension never matches.
    pub fn language_for(&self, extension: &str) -> Option<&str> {
        if extension.is_empty() {
            return None;
        }
        self.by_extension.get(extension).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_extension.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_extension.is_empty()
    }
}

impl Default for LanguageMap {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_LANGUAGES.iter().copied())
    }
}
