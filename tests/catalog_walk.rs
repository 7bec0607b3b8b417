mod common;

use common::{below_root, create_fixture};
use mintree::catalog::{
    build_ignore_set, classify, list_files, scan, CatalogConfig, LanguageMap, DEFAULT_IGNORES,
};
use std::path::Path;

fn default_ignores() -> globset::GlobSet {
    build_ignore_set(DEFAULT_IGNORES)
}

// --- Ordering ---

#[test]
fn test_files_before_subfolders() {
    let tmp = create_fixture(&[
        "z.cs",
        "a.cs",
        "Lib/b.cs",
        "App/c.xaml.cs",
        "App/Views/d.xaml",
    ]);
    let files = list_files(tmp.path(), &default_ignores());
    assert_eq!(
        below_root(tmp.path(), &files),
        vec![
            "a.cs",
            "z.cs",
            "App/c.xaml.cs",
            "App/Views/d.xaml",
            "Lib/b.cs"
        ]
    );
}

#[test]
fn test_case_insensitive_name_order() {
    let tmp = create_fixture(&["Banana.cs", "apple.cs", "Cherry.cs"]);
    let files = list_files(tmp.path(), &default_ignores());
    let names: Vec<&str> = files.iter().map(|f| f.file_name()).collect();
    assert_eq!(names, vec!["apple.cs", "Banana.cs", "Cherry.cs"]);
}

// --- Ignore names ---

#[test]
fn test_default_ignored_folders_skipped() {
    let tmp = create_fixture(&[
        "Program.cs",
        "bin/Debug/App.cs",
        "obj/Gen.cs",
        ".git/config",
        "Properties/AssemblyInfo.cs",
        "Src/x64/Native.cs",
        "Src/Keep.cs",
    ]);
    let files = list_files(tmp.path(), &default_ignores());
    assert_eq!(
        below_root(tmp.path(), &files),
        vec!["Program.cs", "Src/Keep.cs"]
    );
}

#[test]
fn test_ignored_name_only_applies_to_folders() {
    let tmp = create_fixture(&["bin", "main.cs"]);
    let files = list_files(tmp.path(), &default_ignores());
    assert_eq!(below_root(tmp.path(), &files), vec!["bin", "main.cs"]);
}

#[test]
fn test_root_inside_ignored_name_still_walked() {
    let tmp = create_fixture(&["bin/proj/a.cs"]);
    let root = tmp.path().join("bin/proj");
    let files = list_files(&root, &default_ignores());
    assert_eq!(below_root(&root, &files), vec!["a.cs"]);
}

#[test]
fn test_custom_glob_ignore() {
    let tmp = create_fixture(&["gen-1/a.cs", "gen-2/b.cs", "src/c.cs"]);
    let files = list_files(tmp.path(), &build_ignore_set(&["gen-*"]));
    assert_eq!(below_root(tmp.path(), &files), vec!["src/c.cs"]);
}

#[test]
fn test_invalid_pattern_skipped() {
    let set = build_ignore_set(&["[", "obj"]);
    assert!(set.is_match("obj"));
    assert_eq!(set.len(), 1);
}

// --- Missing directories ---

#[test]
fn test_missing_root_yields_empty() {
    let files = list_files(
        Path::new("/this/path/does/not/exist"),
        &default_ignores(),
    );
    assert!(files.is_empty());
}

#[test]
fn test_file_as_root_yields_empty() {
    let tmp = create_fixture(&["only.cs"]);
    let files = list_files(&tmp.path().join("only.cs"), &default_ignores());
    assert!(files.is_empty());
}

// --- Classification ---

#[test]
fn test_scan_keeps_known_languages_in_walk_order() {
    let tmp = create_fixture(&[
        "App.xaml",
        "App.xaml.cs",
        "README.md",
        "Package.appxmanifest",
        "Views/Main.xaml.cs",
        "Views/notes.txt",
        "obj/Temp.cs",
    ]);
    let catalog = scan(tmp.path(), &CatalogConfig::default());
    let languages: Vec<(&str, &str)> = catalog
        .iter()
        .map(|f| (f.path.file_name(), f.language.as_str()))
        .collect();
    assert_eq!(
        languages,
        vec![
            ("App.xaml", "xml"),
            ("App.xaml.cs", "cs"),
            ("Package.appxmanifest", "xml"),
            ("Main.xaml.cs", "cs"),
        ]
    );
}

#[test]
fn test_scan_with_custom_languages() {
    let tmp = create_fixture(&["main.rs", "lib.rs", "build.cs"]);
    let config = CatalogConfig {
        languages: LanguageMap::from_pairs([(".rs", "rust")]),
        ..CatalogConfig::default()
    };
    let catalog = scan(tmp.path(), &config);
    assert_eq!(catalog.len(), 2);
    assert!(catalog.iter().all(|f| f.language == "rust"));
}

#[test]
fn test_classify_drops_unlisted_extension() {
    let files = common::rel_paths(&["a.cs", "b.txt", "c.xaml.cs"]);
    let map = LanguageMap::from_pairs([(".cs", "cs"), (".xaml.cs", "cs")]);
    let catalog = classify(files, &map);
    let kept: Vec<&str> = catalog.paths().collect();
    assert_eq!(kept, vec!["a.cs", "c.xaml.cs"]);
}

#[test]
fn test_scan_missing_root_is_empty_catalog() {
    let catalog = scan(
        Path::new("/this/path/does/not/exist"),
        &CatalogConfig::default(),
    );
    assert!(catalog.is_empty());
}
