//! Cross-section families

use std::fmt;

/// Cross-section family of a steel part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileType {
    /// Flanged beam (DSTV `I`)
    WideFlange,
    /// Channel (DSTV `U`)
    Channel,
    /// Rectangular or square tube (DSTV `M`)
    Tube,
    /// Tee section (DSTV `T`)
    Tee,
    /// Any profile code this converter does not handle
    Invalid,
}

impl ProfileType {
    /// Classify a DSTV profile code
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "I" => ProfileType::WideFlange,
            "U" => ProfileType::Channel,
            "M" => ProfileType::Tube,
            "T" => ProfileType::Tee,
            _ => ProfileType::Invalid,
        }
    }

    /// DSTV code for a supported profile type
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            ProfileType::WideFlange => Some("I"),
            ProfileType::Channel => Some("U"),
            ProfileType::Tube => Some("M"),
            ProfileType::Tee => Some("T"),
            ProfileType::Invalid => None,
        }
    }

    pub const fn is_valid(&self) -> bool {
        !matches!(self, ProfileType::Invalid)
    }

    pub const fn is_tee(&self) -> bool {
        matches!(self, ProfileType::Tee)
    }
}

impl fmt::Display for ProfileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileType::WideFlange => write!(f, "WideFlange"),
            ProfileType::Channel => write!(f, "Channel"),
            ProfileType::Tube => write!(f, "Tube"),
            ProfileType::Tee => write!(f, "Tee"),
            ProfileType::Invalid => write!(f, "Invalid"),
        }
    }
}
