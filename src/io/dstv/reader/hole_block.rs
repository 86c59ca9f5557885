//! Hole block splitting.
//!
//! Holes are listed between a `BO` line and the `EN` line that ends the
//! document. Other DSTV blocks (`AK`, `IK`, `SI`, ...) end a hole block too,
//! so contour points are never taken for holes.

use super::source_text::SourceLines;
use crate::types::Surface;

const BLOCK_START: &str = "BO";
const DOCUMENT_END: &str = "EN";

/// A tokenized hole line
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HoleLine<'a> {
    /// 0-based source line
    pub line: usize,
    pub tokens: Vec<&'a str>,
}

impl<'a> HoleLine<'a> {
    /// Slotted lines carry depth and slot elongation after the diameter.
    pub fn is_slotted(&self) -> bool {
        self.tokens.len() > 4
    }
}

/// Collect the hole lines of every `BO` block, in source order.
///
/// Scanning starts at line `start`, so header values that happen to read
/// `EN` or `BO` are never taken for markers. Nothing is returned unless
/// the `EN` marker follows the blocks; a document without markers simply
/// has no holes.
pub(crate) fn split_hole_lines<'a>(lines: &SourceLines<'a>, start: usize) -> Vec<HoleLine<'a>> {
    let mut committed = Vec::new();
    let mut in_block = false;

    for (index, raw) in lines.iter().skip(start) {
        let trimmed = raw.trim();

        if trimmed == DOCUMENT_END {
            return committed;
        }
        if trimmed == BLOCK_START {
            in_block = true;
            continue;
        }
        if is_block_identifier(trimmed) {
            in_block = false;
            continue;
        }
        if !in_block {
            continue;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        if tokens.first().is_some_and(|code| Surface::is_code(code)) {
            committed.push(HoleLine {
                line: index,
                tokens,
            });
        }
    }

    Vec::new()
}

/// DSTV block identifiers are two upper-case letters on their own line.
fn is_block_identifier(line: &str) -> bool {
    line.len() == 2 && line.bytes().all(|b| b.is_ascii_uppercase())
}
