//! Machining reference faces of a steel part

use super::ProfileType;
use crate::error::{ConvertError, Result};
use std::fmt;

/// One of the three faces a hole can be drilled into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Surface {
    /// Web face (DSTV `v` on most profiles)
    Front,
    /// Upper flange (DSTV `o` on most profiles)
    Top,
    /// Lower flange (DSTV `u`)
    Bottom,
}

impl Surface {
    /// Surfaces in the column order of the Peddimat tool line
    pub const TOOL_ORDER: [Surface; 3] = [Surface::Front, Surface::Bottom, Surface::Top];

    /// Map a DSTV surface code to a surface.
    ///
    /// Tee sections are machined with the web and flange references swapped,
    /// so `v` and `o` trade places for them.
    pub fn from_code(code: &str, profile_type: ProfileType) -> Result<Self> {
        let tee = profile_type == ProfileType::Tee;
        match code {
            "v" if tee => Ok(Surface::Top),
            "v" => Ok(Surface::Front),
            "o" if tee => Ok(Surface::Front),
            "o" => Ok(Surface::Top),
            "u" => Ok(Surface::Bottom),
            other => Err(ConvertError::Custom(format!(
                "Unknown surface code {:?}",
                other
            ))),
        }
    }

    /// Whether a DSTV code names one of the drillable surfaces
    pub fn is_code(code: &str) -> bool {
        matches!(code, "v" | "o" | "u")
    }

    /// 1-based index used as the hundreds digit of a tool number
    pub const fn tool_index(&self) -> u32 {
        match self {
            Surface::Front => 1,
            Surface::Bottom => 2,
            Surface::Top => 3,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Surface::Front => "front",
            Surface::Top => "top",
            Surface::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
