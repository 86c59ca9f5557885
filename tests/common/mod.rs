//! Shared test utilities for dstv-peddimat integration tests.

#![allow(dead_code)]

pub mod builders;

pub use builders::Nc1Builder;

use dstv_peddimat::{DstvReader, SteelPart};
use std::fs;
use std::path::{Path, PathBuf};

/// Decode builder output with the builder's partmark
pub fn read_part(partmark: &str, builder: &Nc1Builder) -> SteelPart {
    DstvReader::from_text(&builder.build(), partmark)
        .read()
        .expect("NC1 text should decode")
}

/// Write an NC1 file named `<partmark>.nc1` into `dir`
pub fn write_nc1(dir: &Path, partmark: &str, builder: &Nc1Builder) -> PathBuf {
    let path = dir.join(format!("{}.nc1", partmark));
    fs::write(&path, builder.build()).expect("write NC1 file");
    path
}
