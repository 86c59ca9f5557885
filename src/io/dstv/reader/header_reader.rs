//! Header field extraction.
//!
//! NC1 headers carry no keys: each datum sits on a fixed line. Every field
//! is read by its own function from the line table, and the header is
//! assembled once at the end.

use super::source_text::SourceLines;
use crate::error::{ConvertError, Result};
use crate::notification::{NotificationCollection, NotificationType};
use crate::part::PartHeader;
use crate::types::{ProfileType, Tenths};
use tracing::warn;

/// Line positions of the header fields (line 0 is `ST`)
///
/// Positions follow the DSTV `ST` block order: order number, drawing
/// number, phase, piece number (the partmark), steel grade, quantity,
/// profile, profile code, then the dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLayout {
    pub partmark: usize,
    pub quantity: usize,
    pub profile: usize,
    pub profile_code: usize,
    pub length: usize,
    pub profile_depth: usize,
    pub flange_height: usize,
    pub flange_thickness: usize,
    pub web_thickness: usize,
}

impl HeaderLayout {
    /// Positions used by flanged beams, channels and tubes
    pub const STANDARD: HeaderLayout = HeaderLayout {
        partmark: 4,
        quantity: 6,
        profile: 7,
        profile_code: 8,
        length: 9,
        profile_depth: 11,
        flange_height: 12,
        flange_thickness: 13,
        web_thickness: 14,
    };

    /// First line after the header fields; blocks start here
    pub const END: usize = Self::STANDARD.web_thickness + 1;

    /// Tee sections store their two principal dimensions in reverse order.
    pub const fn for_profile(profile_type: ProfileType) -> HeaderLayout {
        let standard = Self::STANDARD;
        if profile_type.is_tee() {
            HeaderLayout {
                profile_depth: standard.flange_height,
                flange_height: standard.profile_depth,
                ..standard
            }
        } else {
            standard
        }
    }
}

/// Read and validate the part header.
///
/// A partmark that differs from `expected_partmark` or a quantity that is
/// not a positive integer aborts the read. An unknown profile code does
/// not: it is recorded in `notifications` and the remaining fields are
/// still decoded.
pub(crate) fn read_header(
    lines: &SourceLines<'_>,
    expected_partmark: &str,
    notifications: &mut NotificationCollection,
) -> Result<PartHeader> {
    let partmark = read_partmark(lines, expected_partmark)?;
    let quantity = read_quantity(lines)?;
    let profile = lines
        .field(HeaderLayout::STANDARD.profile, "profile")?
        .to_string();
    let (profile_type, profile_code) = read_profile_type(lines)?;

    if !profile_type.is_valid() {
        warn!(partmark = %partmark, code = %profile_code, "unsupported profile code");
        notifications.notify_at(
            NotificationType::NotSupported,
            HeaderLayout::STANDARD.profile_code,
            format!("profile code {:?} is not supported", profile_code),
        );
    }

    let layout = HeaderLayout::for_profile(profile_type);

    Ok(PartHeader {
        partmark,
        profile,
        profile_type,
        profile_code,
        quantity,
        profile_depth: read_dimension(lines, layout.profile_depth, "profile depth")?,
        web_thickness: read_dimension(lines, layout.web_thickness, "web thickness")?,
        flange_height: read_dimension(lines, layout.flange_height, "flange height")?,
        flange_thickness: read_dimension(lines, layout.flange_thickness, "flange thickness")?,
        length: read_dimension(lines, layout.length, "length")?,
    })
}

fn read_partmark(lines: &SourceLines<'_>, expected: &str) -> Result<String> {
    let found = lines.field(HeaderLayout::STANDARD.partmark, "partmark")?;
    if found != expected {
        return Err(ConvertError::PartmarkMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        });
    }
    Ok(found.to_string())
}

fn read_quantity(lines: &SourceLines<'_>) -> Result<u32> {
    let raw = lines.field(HeaderLayout::STANDARD.quantity, "quantity")?;
    match raw.parse::<u32>() {
        Ok(quantity) if quantity > 0 => Ok(quantity),
        _ => Err(ConvertError::InvalidQuantity(raw.to_string())),
    }
}

fn read_profile_type(lines: &SourceLines<'_>) -> Result<(ProfileType, String)> {
    let code = lines.field(HeaderLayout::STANDARD.profile_code, "profile code")?;
    Ok((ProfileType::from_code(code), code.to_string()))
}

fn read_dimension(lines: &SourceLines<'_>, line: usize, field: &'static str) -> Result<Tenths> {
    let raw = lines.field(line, field)?;
    match raw.parse::<f64>().ok().and_then(Tenths::try_from_millimeters) {
        Some(tenths) => Ok(tenths),
        None => Err(ConvertError::InvalidField {
            field,
            line,
            value: raw.to_string(),
        }),
    }
}
