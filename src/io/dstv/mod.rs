//! DSTV/NC1 reading

mod reader;

pub use reader::{DstvReader, DstvReaderConfiguration, HeaderLayout};

use crate::error::Result;
use crate::part::SteelPart;
use std::path::Path;

/// Convenience function to decode an NC1 file with the default configuration
pub fn read_dstv<P: AsRef<Path>>(path: P) -> Result<SteelPart> {
    DstvReader::from_file(path)?.read()
}
