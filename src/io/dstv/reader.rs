//! DSTV/NC1 file reader

mod header_reader;
mod hole_block;
mod hole_reader;
mod source_text;

pub use header_reader::HeaderLayout;

use hole_block::{split_hole_lines, HoleLine};
use hole_reader::{read_hole, HoleContext};
use source_text::{decode_text, SourceLines};

use crate::error::{ConvertError, Result};
use crate::notification::{NotificationCollection, NotificationType};
use crate::part::{Hole, SteelPart};
use encoding_rs::Encoding;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Configuration for the DSTV reader.
#[derive(Debug, Clone, Default)]
pub struct DstvReaderConfiguration {
    /// When `true`, a malformed hole line is skipped and reported as a
    /// notification instead of aborting the read.
    ///
    /// Default: `false` (strict mode, errors propagate).
    pub failsafe: bool,
    /// Encoding used when the file is not valid UTF-8.
    /// `None` maps bytes straight to Latin-1.
    pub fallback_encoding: Option<&'static Encoding>,
}

/// DSTV/NC1 reader producing a [`SteelPart`]
pub struct DstvReader {
    bytes: Vec<u8>,
    expected_partmark: String,
    config: DstvReaderConfiguration,
}

impl DstvReader {
    /// Create a reader over in-memory text
    pub fn from_text(content: &str, expected_partmark: impl Into<String>) -> Self {
        Self::from_bytes(content.as_bytes().to_vec(), expected_partmark)
    }

    /// Create a reader over raw file bytes
    pub fn from_bytes(bytes: Vec<u8>, expected_partmark: impl Into<String>) -> Self {
        Self {
            bytes,
            expected_partmark: expected_partmark.into(),
            config: DstvReaderConfiguration::default(),
        }
    }

    /// Create a reader from any byte source
    pub fn from_reader<R: Read>(
        mut reader: R,
        expected_partmark: impl Into<String>,
    ) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::from_bytes(bytes, expected_partmark))
    }

    /// Open an NC1 file. The expected partmark is the file's base name.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let expected = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| {
                ConvertError::Custom(format!("Cannot derive partmark from {}", path.display()))
            })?
            .to_string();

        let file = File::open(path)?;
        Self::from_reader(file, expected)
    }

    /// Set the reader configuration.
    pub fn with_configuration(mut self, config: DstvReaderConfiguration) -> Self {
        self.config = config;
        self
    }

    pub fn expected_partmark(&self) -> &str {
        &self.expected_partmark
    }

    /// Decode the document into a steel part
    pub fn read(self) -> Result<SteelPart> {
        let text = decode_text(self.bytes, self.config.fallback_encoding);
        let lines = SourceLines::new(&text);
        let mut notifications = NotificationCollection::new();

        let header =
            header_reader::read_header(&lines, &self.expected_partmark, &mut notifications)?;
        let ctx = HoleContext::from(&header);

        let hole_lines = split_hole_lines(&lines, HeaderLayout::END);
        debug!(
            partmark = %header.partmark,
            lines = lines.len(),
            holes = hole_lines.len(),
            "decoded NC1 header"
        );

        let holes = read_holes(&hole_lines, ctx, self.config.failsafe, &mut notifications)?;
        SteelPart::with_notifications(header, holes, notifications)
    }
}

fn read_holes(
    hole_lines: &[HoleLine<'_>],
    ctx: HoleContext,
    failsafe: bool,
    notifications: &mut NotificationCollection,
) -> Result<Vec<Hole>> {
    let mut holes = Vec::with_capacity(hole_lines.len());

    for hole_line in hole_lines {
        match read_hole(hole_line, ctx) {
            Ok(hole) => holes.push(hole),
            Err(err) if failsafe => {
                warn!(line = hole_line.line, error = %err, "skipping malformed hole");
                notifications.notify_at(NotificationType::Error, hole_line.line, err.to_string());
            }
            Err(err) => return Err(err),
        }
    }

    Ok(holes)
}
