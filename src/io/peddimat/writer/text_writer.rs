//! Peddimat row formatting

use crate::error::Result;
use crate::io::peddimat::ToolNumber;
use crate::part::PartHeader;
use crate::types::Thousandths;
use std::io::Write;

/// Writes the individual rows of a Peddimat record
pub struct PeddimatTextWriter<W: Write> {
    writer: W,
}

impl<W: Write> PeddimatTextWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write a free-text row (partmark, profile, profile type)
    pub fn write_text(&mut self, value: &str) -> Result<()> {
        writeln!(self.writer, "{}", value)?;
        Ok(())
    }

    /// Quantity and profile dimensions, with three unused fields before the length
    pub fn write_profile_info(&mut self, header: &PartHeader) -> Result<()> {
        let fields = [
            header.quantity.to_string(),
            header.profile_depth.to_string(),
            header.web_thickness.to_string(),
            header.flange_height.to_string(),
            header.flange_thickness.to_string(),
            "0".to_string(),
            "0".to_string(),
            "0".to_string(),
            header.length.to_string(),
        ];
        writeln!(self.writer, " {}", fields.join("  "))?;
        Ok(())
    }

    /// All tool slots on one line, each size preceded by two spaces
    pub fn write_tools<'a, I>(&mut self, rows: I) -> Result<()>
    where
        I: IntoIterator<Item = [&'a str; 3]>,
    {
        for row in rows {
            for size in row {
                write!(self.writer, "  {}", size)?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    pub fn write_count(&mut self, count: usize) -> Result<()> {
        writeln!(self.writer, " {}", count)?;
        Ok(())
    }

    pub fn write_hole(&mut self, x: Thousandths, y: Thousandths, tool: ToolNumber) -> Result<()> {
        writeln!(self.writer, " {}  {}.{}", x, y, tool)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Get the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}
