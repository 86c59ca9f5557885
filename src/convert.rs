//! Batch conversion of NC1 files into Peddimat records
//!
//! Parts share no state, so a batch is converted in parallel. Outcomes are
//! reported per file in input order.

use crate::error::Result;
use crate::io::dstv::{DstvReader, DstvReaderConfiguration};
use crate::io::peddimat::PeddimatWriter;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File extension of DSTV part files
pub const NC1_EXTENSION: &str = "nc1";

/// Result of converting one source file
#[derive(Debug)]
pub struct ConvertOutcome {
    pub source: PathBuf,
    /// Path of the written Peddimat file
    pub result: Result<PathBuf>,
}

impl ConvertOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Decode one NC1 file and write its Peddimat record into `output_dir`
pub fn convert_file<P, Q>(
    input: P,
    output_dir: Q,
    config: &DstvReaderConfiguration,
) -> Result<PathBuf>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let part = DstvReader::from_file(input.as_ref())?
        .with_configuration(config.clone())
        .read()?;

    for notification in part.notifications() {
        warn!(source = %input.as_ref().display(), "{}", notification);
    }

    let path = PeddimatWriter::new(&part).write_to_dir(output_dir)?;
    info!(partmark = part.partmark(), output = %path.display(), "converted");
    Ok(path)
}

/// Convert many files in parallel
pub fn convert_files<P>(
    inputs: &[P],
    output_dir: &Path,
    config: &DstvReaderConfiguration,
) -> Result<Vec<ConvertOutcome>>
where
    P: AsRef<Path> + Sync,
{
    fs::create_dir_all(output_dir)?;

    Ok(inputs
        .par_iter()
        .map(|input| ConvertOutcome {
            source: input.as_ref().to_path_buf(),
            result: convert_file(input, output_dir, config),
        })
        .collect())
}

/// List the NC1 files in a directory, sorted by path
pub fn find_nc1_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_nc1 = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(NC1_EXTENSION));
        if path.is_file() && is_nc1 {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
