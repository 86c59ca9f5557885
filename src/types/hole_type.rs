//! Hole kinds encoded as a suffix on the DSTV y coordinate

use std::fmt;

/// Kind of machining operation at a hole position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HoleType {
    /// Plain drilled hole
    #[default]
    Standard,
    /// Right-hand thread (`g`)
    RightThread,
    /// Left-hand thread (`l`)
    LeftThread,
    /// Centre punch mark (`m`), carries no drilled geometry
    CenterMark,
}

impl HoleType {
    /// Split a y token into its numeric part and hole type.
    ///
    /// Returns `None` when the token ends in a letter that is not a known
    /// marker.
    pub fn split_marker(token: &str) -> Option<(&str, HoleType)> {
        let hole_type = match token.chars().last() {
            Some('g') => HoleType::RightThread,
            Some('l') => HoleType::LeftThread,
            Some('m') => HoleType::CenterMark,
            Some(c) if c.is_ascii_alphabetic() => return None,
            _ => return Some((token, HoleType::Standard)),
        };
        Some((&token[..token.len() - 1], hole_type))
    }

    pub const fn marker(&self) -> Option<char> {
        match self {
            HoleType::Standard => None,
            HoleType::RightThread => Some('g'),
            HoleType::LeftThread => Some('l'),
            HoleType::CenterMark => Some('m'),
        }
    }
}

impl fmt::Display for HoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoleType::Standard => write!(f, "Standard"),
            HoleType::RightThread => write!(f, "RightThread"),
            HoleType::LeftThread => write!(f, "LeftThread"),
            HoleType::CenterMark => write!(f, "CenterMark"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_marker() {
        assert_eq!(HoleType::split_marker("50.00"), Some(("50.00", HoleType::Standard)));
        assert_eq!(HoleType::split_marker("50.00g"), Some(("50.00", HoleType::RightThread)));
        assert_eq!(HoleType::split_marker("50.00l"), Some(("50.00", HoleType::LeftThread)));
        assert_eq!(HoleType::split_marker("50.00m"), Some(("50.00", HoleType::CenterMark)));
    }

    #[test]
    fn test_unknown_marker() {
        assert_eq!(HoleType::split_marker("50.00x"), None);
    }

    #[test]
    fn test_marker_roundtrip() {
        for ht in [HoleType::RightThread, HoleType::LeftThread, HoleType::CenterMark] {
            let token = format!("12.5{}", ht.marker().unwrap());
            assert_eq!(HoleType::split_marker(&token), Some(("12.5", ht)));
        }
        assert_eq!(HoleType::Standard.marker(), None);
    }
}
