#![forbid(unsafe_code)]
use anyhow::Result;
use clap::Parser;
use mintree::catalog::{scan, CatalogConfig};
use mintree::cli::Args;
use mintree::document::{write_document, DocumentConfig};
use mintree::layout::LayoutConfig;
use mintree::logging;
use tracing::debug;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("mintree: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    logging::init(args.verbose, args.quiet);

    // A missing directory is not fatal: the scan reports it and the
    // document is written with no files.
    let source = args
        .source_dir
        .canonicalize()
        .unwrap_or_else(|_| args.source_dir.clone());
    debug!(source = %source.display(), output = %args.output.display(), "starting");

    let catalog = scan(&source, &CatalogConfig::default());
    let document = if args.standalone {
        DocumentConfig::standalone()
    } else {
        DocumentConfig::subfile()
    };

    write_document(
        &args.output,
        &source,
        &catalog,
        &LayoutConfig::default(),
        &document,
    )
}
