//! Raw NC1 text and line access

use crate::error::{ConvertError, Result};
use encoding_rs::Encoding;

/// Decode source bytes, trying UTF-8 first.
///
/// Falls back to `encoding` when given, otherwise maps bytes 1:1 to
/// Latin-1 code points. A leading byte order mark is dropped.
pub(crate) fn decode_text(bytes: Vec<u8>, encoding: Option<&'static Encoding>) -> String {
    let text = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(err) => {
            let bytes = err.into_bytes();
            if let Some(enc) = encoding {
                let (decoded, _, _) = enc.decode(&bytes);
                decoded.into_owned()
            } else {
                bytes.iter().map(|&b| b as char).collect()
            }
        }
    };

    match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

/// The lines of an NC1 document, indexed from 0
pub(crate) struct SourceLines<'a> {
    lines: Vec<&'a str>,
}

impl<'a> SourceLines<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
        }
    }

    /// Trimmed content of a line, if the document is long enough
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.lines.get(index).map(|line| line.trim())
    }

    /// Trimmed content of a required header line
    pub fn field(&self, index: usize, field: &'static str) -> Result<&'a str> {
        self.get(index)
            .ok_or(ConvertError::MissingField { field, line: index })
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.lines.iter().copied().enumerate()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}
