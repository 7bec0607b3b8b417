#![forbid(unsafe_code)]
//! mintree: scan a source tree and emit a LaTeX appendix with a TikZ
//! folder diagram followed by one minted listing per source file.

pub mod catalog;
pub mod cli;
pub mod document;
pub mod layout;
pub mod logging;
pub mod path_info;
