#![forbid(unsafe_code)]
//! Writes shell completions and the man page for `mintree`.
//!
//! Usage: `generate-assets [OUT_DIR]` (defaults to `dist`).

use anyhow::Context;
use clap::{CommandFactory, ValueEnum};
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use mintree::cli::Args;
use std::fs;
use std::path::{Path, PathBuf};

fn main() -> anyhow::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));

    let written = write_completions(&out_dir.join("completions"))?;
    let man_page = write_man_page(&out_dir.join("man"))?;

    for path in written.iter().chain(std::iter::once(&man_page)) {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn write_completions(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("{}: cannot create", dir.display()))?;
    Shell::value_variants()
        .iter()
        .map(|shell| {
            let mut cmd = Args::command();
            generate_to(*shell, &mut cmd, "mintree", dir)
                .with_context(|| format!("{shell} completions"))
        })
        .collect()
}

fn write_man_page(dir: &Path) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("{}: cannot create", dir.display()))?;
    let mut page = Vec::new();
    Man::new(Args::command()).render(&mut page)?;
    let path = dir.join("mintree.1");
    fs::write(&path, page).with_context(|| format!("{}: cannot write", path.display()))?;
    Ok(path)
}
