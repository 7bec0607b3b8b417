//! LaTeX document assembly: header, TikZ tree figure, minted listings, trailer.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

use crate::catalog::{Catalog, RetainedFile};
use crate::layout::{layout_tree, DrawCommand, LayoutConfig, TreeLayout};
use crate::path_info::PathInfo;

const SUBFILE_HEADER: &[&str] = &[
    r"\documentclass[../main.tex]{subfiles}",
    "",
    r"\begin{document}",
    r"\chapter{Source code}",
    r"\label{sourceCode}",
];

const STANDALONE_HEADER: &[&str] = &[
    r"\documentclass{article}",
    "",
    r"\usepackage{tikz}",
    r"\usepackage{minted}",
    r"\usepackage{hyperref}",
    r"\newcommand{\fileref}[2]{\hyperref[#1]{#2}}",
    r"\begin{document}",
];

const TRAILER: &[&str] = &[r"\end{document}"];

/// Output settings for the generated document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentConfig {
    /// Lines written before anything else.
    pub header: Vec<String>,
    /// Lines written last.
    pub trailer: Vec<String>,
    /// `scale` option of the tikzpicture.
    pub scale: f64,
    /// Folder labels are shifted left by this much so their background
    /// covers the elbow that leads into them.
    pub folder_label_offset: f64,
    /// Name shown in the generated-by comment.
    pub generator: String,
}

impl DocumentConfig {
    /// Header for a `subfiles` chapter included from `../main.tex`.
    pub fn subfile() -> Self {
        Self::with_header(SUBFILE_HEADER)
    }

    /// Self-contained article preamble.
    pub fn standalone() -> Self {
        Self::with_header(STANDALONE_HEADER)
    }

    fn with_header(header: &[&str]) -> Self {
        Self {
            header: to_lines(header),
            trailer: to_lines(TRAILER),
            scale: 0.85,
            folder_label_offset: 0.25,
            generator: concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self::subfile()
    }
}

fn to_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}

/// Create `output` and write the full document into it.
pub fn write_document(
    output: &Path,
    start: &Path,
    catalog: &Catalog,
    layout: &LayoutConfig,
    config: &DocumentConfig,
) -> Result<()> {
    anyhow::ensure!(!output.is_dir(), "{}: Is a directory", output.display());

    let file = File::create(output)
        .with_context(|| format!("{}: failed to create output file", output.display()))?;
    let mut writer = BufWriter::new(file);
    render(&mut writer, start, catalog, layout, config)
        .and_then(|()| writer.flush())
        .with_context(|| format!("{}: failed to write document", output.display()))?;

    info!(
        files = catalog.len(),
        output = %output.display(),
        "wrote document"
    );
    Ok(())
}

/// Write the document for `catalog`, with paths shown relative to `start`.
pub fn render<W: Write>(
    writer: &mut W,
    start: &Path,
    catalog: &Catalog,
    layout: &LayoutConfig,
    config: &DocumentConfig,
) -> io::Result<()> {
    let files = relative_files(start, catalog);

    write_lines(writer, &config.header)?;
    writeln!(
        writer,
        "% LaTeX automatically generated by {}.",
        config.generator
    )?;
    writeln!(writer, r"\section{{Project code structure}}")?;

    let paths: Vec<PathInfo> = files.iter().map(|(rel, _)| rel.clone()).collect();
    let tree = layout_tree(&paths, layout);
    write_figure(writer, &tree, config)?;

    writeln!(writer, r"\clearpage")?;
    writeln!(writer, r"\section{{Source code}}")?;
    for (rel, file) in &files {
        write_listing(writer, rel, &file.language)?;
    }

    write_lines(writer, &config.trailer)
}

/// Pair each retained file with its path relative to `start`.
fn relative_files<'a>(start: &Path, catalog: &'a Catalog) -> Vec<(PathInfo, &'a RetainedFile)> {
    let start = start.to_string_lossy();
    catalog
        .iter()
        .filter_map(|file| match file.path.relative_to(&start) {
            Some(rel) => Some((rel, file)),
            None => {
                warn!("{}: outside {}, skipped", file.path.full_path(), start);
                None
            }
        })
        .collect()
}

fn write_lines<W: Write, S: AsRef<str>>(writer: &mut W, lines: &[S]) -> io::Result<()> {
    for line in lines {
        writeln!(writer, "{}", line.as_ref())?;
    }
    Ok(())
}

fn write_figure<W: Write>(
    writer: &mut W,
    tree: &TreeLayout,
    config: &DocumentConfig,
) -> io::Result<()> {
    writeln!(writer, r"\begin{{figure}}[ht]")?;
    writeln!(
        writer,
        r"\begin{{tikzpicture}}[scale={}]",
        number(config.scale)
    )?;
    for command in tree.connectors.iter().chain(&tree.labels) {
        writeln!(writer, "{}", draw_command_line(command, config))?;
    }
    writeln!(writer, r"\end{{tikzpicture}}")?;
    writeln!(writer, r"\end{{figure}}")
}

fn write_listing<W: Write>(writer: &mut W, rel: &PathInfo, language: &str) -> io::Result<()> {
    let path = rel.path_with_separator('/');
    writeln!(writer, r"\subsection*{{{}}}", escape_latex(rel.file_name()))?;
    writeln!(writer, r"\label{{{}}}", listing_label(&path))?;
    if path.contains(UNSAFE_PATH_CHARS) {
        warn!("{path}: name cannot be passed to minted, listing omitted");
        return writeln!(
            writer,
            r"\textit{{Listing omitted: \texttt{{{}}} cannot be read by minted.}}",
            escape_latex(&path)
        );
    }
    writeln!(
        writer,
        r"\inputminted[breaklines]{{{}}}{{{{{}}}}}",
        language, path
    )
}

/// Characters TeX reads specially inside a macro argument, so a file path
/// holding one cannot be handed to `\inputminted` verbatim.
const UNSAFE_PATH_CHARS: &[char] = &['%', '#', '\\', '{', '}', '~'];

/// Cross-reference key shared by a listing's `\label` and its tree node.
///
/// Built from the `/`-separated relative path, so it is unique per file.
/// Letters, digits, `.` and `/` are kept; anything else becomes `-<hex>-`.
pub fn listing_label(path: &str) -> String {
    let mut key = String::with_capacity(path.len() + 5);
    key.push_str("file:");
    for c in path.chars() {
        if c.is_ascii_alphanumeric() || c == '.' || c == '/' {
            key.push(c);
        } else {
            key.push_str(&format!("-{:x}-", c as u32));
        }
    }
    key
}

/// TikZ source for one drawing command.
pub fn draw_command_line(command: &DrawCommand, config: &DocumentConfig) -> String {
    match command {
        DrawCommand::Connector { from, to } => format!(
            r"\draw ({}, {}) |- ({}, {});",
            number(from.x),
            number(from.y),
            number(to.x),
            number(to.y)
        ),
        DrawCommand::FileLabel { text, path, at } => format!(
            r"\node[right] at ({}, {}) {{\fileref{{{}}}{{{}}}}};",
            number(at.x),
            number(at.y),
            listing_label(path),
            escape_latex(text)
        ),
        DrawCommand::FolderLabel { text, at } => format!(
            r"\node[right, fill=white] at ({}, {}) {{{}}};",
            number(at.x - config.folder_label_offset),
            number(at.y),
            escape_latex(text)
        ),
    }
}

/// Decimal form rounded to four places, trailing zeros dropped, never `-0`.
fn number(value: f64) -> String {
    let fixed = format!("{value:.4}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        _ => trimmed.to_string(),
    }
}

/// Escape characters that are special in LaTeX text mode.
pub fn escape_latex(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}
