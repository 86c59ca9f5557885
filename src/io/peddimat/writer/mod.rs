//! Peddimat record writer

mod text_writer;

pub use text_writer::PeddimatTextWriter;

use super::tool_registry::{ToolNumber, ToolRegistry};
use crate::error::{ConvertError, Result};
use crate::part::SteelPart;
use crate::types::Thousandths;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes one steel part as a Peddimat record
pub struct PeddimatWriter<'a> {
    part: &'a SteelPart,
}

impl<'a> PeddimatWriter<'a> {
    pub fn new(part: &'a SteelPart) -> Self {
        Self { part }
    }

    /// Write to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        self.write_to_writer(writer)
    }

    /// Write into `dir` under the part's partmark and return the file path
    pub fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let path = dir.as_ref().join(self.part.partmark());
        self.write_to_file(&path)?;
        Ok(path)
    }

    /// Write to any writer.
    ///
    /// The whole record is resolved before the first byte is written, so an
    /// unencodable part leaves the writer untouched.
    pub fn write_to_writer<W: Write>(&self, writer: W) -> Result<()> {
        let part = self.part;
        let profile_code = part.profile_type().code().ok_or_else(|| {
            ConvertError::UnsupportedProfileType(part.header().profile_code.clone())
        })?;

        let registry = ToolRegistry::build(part)?;
        let hole_rows = part
            .holes()
            .iter()
            .map(|hole| Ok((hole.x_distance(), hole.y_distance(), registry.tool_for(hole)?)))
            .collect::<Result<Vec<(Thousandths, Thousandths, ToolNumber)>>>()?;

        debug!(partmark = part.partmark(), holes = hole_rows.len(), "writing Peddimat record");

        let mut text = PeddimatTextWriter::new(writer);
        text.write_text(part.partmark())?;
        text.write_text(part.profile())?;
        text.write_text(profile_code)?;
        text.write_profile_info(part.header())?;
        text.write_tools(registry.rows())?;
        // The format counts one reference entry in addition to the holes
        text.write_count(hole_rows.len() + 1)?;
        for (x, y, tool) in hole_rows {
            text.write_hole(x, y, tool)?;
        }
        text.flush()
    }

    /// Write to a byte vector
    pub fn write_to_vec(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_to_writer(&mut buffer)?;
        Ok(buffer)
    }

    /// Render the record as a string
    pub fn write_to_string(&self) -> Result<String> {
        let bytes = self.write_to_vec()?;
        String::from_utf8(bytes).map_err(|e| ConvertError::Custom(e.to_string()))
    }

    pub fn part(&self) -> &SteelPart {
        self.part
    }
}

/// Convenience function to write a part into a directory
pub fn write_peddimat<P: AsRef<Path>>(part: &SteelPart, dir: P) -> Result<PathBuf> {
    PeddimatWriter::new(part).write_to_dir(dir)
}
