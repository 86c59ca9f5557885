//! Hole derivation from tokenized hole lines

use super::hole_block::HoleLine;
use crate::error::{ConvertError, Result};
use crate::part::{Hole, PartHeader, Slot};
use crate::types::{HoleType, ProfileType, Surface, Tenths, Thousandths};

const SURFACE: usize = 0;
const X: usize = 1;
const Y: usize = 2;
const DIAMETER: usize = 3;
const SLOT_X: usize = 5;
const SLOT_Y: usize = 6;

/// What a hole needs to know about the part it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HoleContext {
    pub profile_type: ProfileType,
    pub profile_depth: Tenths,
}

impl From<&PartHeader> for HoleContext {
    fn from(header: &PartHeader) -> Self {
        HoleContext {
            profile_type: header.profile_type,
            profile_depth: header.profile_depth,
        }
    }
}

/// Derive one hole from its tokens.
pub(crate) fn read_hole(hole_line: &HoleLine<'_>, ctx: HoleContext) -> Result<Hole> {
    let tokens = &hole_line.tokens;
    let malformed = |reason: String| ConvertError::MalformedHole {
        line: hole_line.line,
        reason,
    };

    let required = if hole_line.is_slotted() { SLOT_Y + 1 } else { DIAMETER + 1 };
    if tokens.len() < required {
        return Err(malformed(format!(
            "expected {} tokens, found {}",
            required,
            tokens.len()
        )));
    }

    let surface = Surface::from_code(tokens[SURFACE], ctx.profile_type)
        .map_err(|e| malformed(e.to_string()))?;

    let diameter = parse_extent(tokens[DIAMETER], "diameter").map_err(malformed)?;

    let (y_token, hole_type) = HoleType::split_marker(tokens[Y])
        .ok_or_else(|| malformed(format!("unknown hole type marker in {:?}", tokens[Y])))?;

    let slot = if hole_line.is_slotted() {
        Some(Slot::new(
            parse_extent(tokens[SLOT_X], "slot x").map_err(malformed)?,
            parse_extent(tokens[SLOT_Y], "slot y").map_err(malformed)?,
        ))
    } else {
        None
    };
    let slot_x = slot.map_or(Tenths::ZERO, |s| s.x);
    let slot_y = slot.map_or(Tenths::ZERO, |s| s.y);

    let x = parse_position(strip_unit_suffix(tokens[X]), "x").map_err(malformed)?;
    let y = parse_position(y_token, "y").map_err(malformed)?;

    let x_distance = x + slot_x.half_to_thousandths();
    let y_distance = y_distance(surface, ctx, y, slot_y);

    Ok(Hole::new(surface, diameter, slot, hole_type, x_distance, y_distance))
}

/// Distance from the surface origin along the part's cross axis.
///
/// Front holes on everything but tees are measured from the far flange in
/// the source and are flipped onto the origin using the profile depth.
fn y_distance(surface: Surface, ctx: HoleContext, y: Thousandths, slot_y: Tenths) -> Thousandths {
    let half_slot = slot_y.half_to_thousandths();
    match surface {
        Surface::Front if !ctx.profile_type.is_tee() => {
            ctx.profile_depth.to_thousandths() - y + half_slot
        }
        Surface::Front | Surface::Top | Surface::Bottom => y - half_slot,
    }
}

/// Drop the reference letter DSTV appends to x coordinates (`100.00s`).
fn strip_unit_suffix(token: &str) -> &str {
    match token.chars().last() {
        Some(c) if c.is_ascii_alphabetic() => &token[..token.len() - 1],
        _ => token,
    }
}

/// A coordinate in millimetres
fn parse_position(token: &str, field: &str) -> std::result::Result<Thousandths, String> {
    token
        .parse::<f64>()
        .ok()
        .and_then(Thousandths::try_from_millimeters)
        .ok_or_else(|| format!("invalid {} {:?}", field, token))
}

/// A diameter or slot elongation in millimetres; never negative
fn parse_extent(token: &str, field: &str) -> std::result::Result<Tenths, String> {
    match token.parse::<f64>().ok().and_then(Tenths::try_from_millimeters) {
        Some(extent) if extent.value() >= 0 => Ok(extent),
        _ => Err(format!("invalid {} {:?}", field, token)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(profile_type: ProfileType, depth: i64) -> HoleContext {
        HoleContext {
            profile_type,
            profile_depth: Tenths::new(depth),
        }
    }

    fn line(text: &str) -> HoleLine<'_> {
        HoleLine {
            line: 20,
            tokens: text.split_whitespace().collect(),
        }
    }

    #[test]
    fn test_front_hole_on_wide_flange() {
        let hole = read_hole(&line("v 0500 100 2.2"), ctx(ProfileType::WideFlange, 2000)).unwrap();
        assert_eq!(hole.surface(), Surface::Front);
        assert_eq!(hole.diameter(), Tenths::new(22));
        assert_eq!(hole.size(), "22");
        assert_eq!(hole.hole_type(), HoleType::Standard);
        assert_eq!(hole.x_distance(), Thousandths::new(500_000));
        assert_eq!(hole.y_distance(), Thousandths::new(100_000));
    }

    #[test]
    fn test_x_suffix_is_stripped() {
        let hole =
            read_hole(&line("o 250.50s 40.00 18.00"), ctx(ProfileType::Channel, 1600)).unwrap();
        assert_eq!(hole.surface(), Surface::Top);
        assert_eq!(hole.x_distance(), Thousandths::new(250_500));
        assert_eq!(hole.y_distance(), Thousandths::new(40_000));
        assert_eq!(hole.diameter(), Tenths::new(180));
    }

    #[test]
    fn test_front_hole_on_tee_is_not_flipped() {
        // `o` is the front face on a tee
        let hole = read_hole(&line("o 100.00s 30.00 14.00"), ctx(ProfileType::Tee, 1000)).unwrap();
        assert_eq!(hole.surface(), Surface::Front);
        assert_eq!(hole.y_distance(), Thousandths::new(30_000));

        let hole = read_hole(&line("v 100.00s 30.00 14.00"), ctx(ProfileType::Tee, 1000)).unwrap();
        assert_eq!(hole.surface(), Surface::Top);
        assert_eq!(hole.y_distance(), Thousandths::new(30_000));
    }

    #[test]
    fn test_invalid_profile_uses_default_branch() {
        let hole =
            read_hole(&line("v 100.00s 30.00 14.00"), ctx(ProfileType::Invalid, 1000)).unwrap();
        assert_eq!(hole.surface(), Surface::Front);
        assert_eq!(hole.y_distance(), Thousandths::new(100_000 - 30_000));
    }

    #[test]
    fn test_slotted_front_hole() {
        let hole = read_hole(
            &line("v 500.00s 60.00 22.00 0.00 30.00 10.00 0.00"),
            ctx(ProfileType::WideFlange, 1900),
        )
        .unwrap();
        assert!(hole.is_slotted());
        assert_eq!(hole.slot_x(), Tenths::new(300));
        assert_eq!(hole.slot_y(), Tenths::new(100));
        assert_eq!(hole.size(), "520X320");
        assert_eq!(hole.x_distance(), Thousandths::new(500_000 + 15_000));
        assert_eq!(hole.y_distance(), Thousandths::new(190_000 - 60_000 + 5_000));
    }

    #[test]
    fn test_slotted_flange_hole() {
        let hole = read_hole(
            &line("u 500.00s 60.00 22.00 0.00 30.00 10.00 0.00"),
            ctx(ProfileType::WideFlange, 1900),
        )
        .unwrap();
        assert_eq!(hole.surface(), Surface::Bottom);
        assert_eq!(hole.y_distance(), Thousandths::new(60_000 - 5_000));
    }

    #[test]
    fn test_hole_type_markers() {
        let c = ctx(ProfileType::WideFlange, 2000);
        let hole = read_hole(&line("o 100.00s 40.00g 16.00"), c).unwrap();
        assert_eq!(hole.hole_type(), HoleType::RightThread);
        assert_eq!(hole.y_distance(), Thousandths::new(40_000));
        assert_eq!(hole.size(), "160");

        let hole = read_hole(&line("o 100.00s 40.00l 16.00"), c).unwrap();
        assert_eq!(hole.hole_type(), HoleType::LeftThread);

        let hole = read_hole(&line("o 100.00s 40.00m 16.00"), c).unwrap();
        assert_eq!(hole.hole_type(), HoleType::CenterMark);
        assert_eq!(hole.diameter(), Tenths::ZERO);
        assert_eq!(hole.size(), "0");
        assert_eq!(hole.y_distance(), Thousandths::new(40_000));
    }

    #[test]
    fn test_malformed_holes() {
        let c = ctx(ProfileType::WideFlange, 2000);
        for text in [
            "v 100.00s 40.00",
            "v 100.00s 40.00 abc",
            "v 100.00s 40.00x 22.00",
            "v 100.00s 40.00 22.00 0.00 30.00",
            "v 100.00s 40.00 22.00 0.00 thirty 0.00",
            "v s 40.00 22.00",
        ] {
            let err = read_hole(&line(text), c).unwrap_err();
            assert!(
                matches!(err, ConvertError::MalformedHole { line: 20, .. }),
                "{:?} gave {:?}",
                text,
                err
            );
        }
    }

    #[test]
    fn test_slotted_front_hole_on_tee() {
        // Tee front holes keep the source y and move to the slot centre
        let hole = read_hole(
            &line("o 100.00s 30.00 14.00 0.00 20.00 10.00 0.00"),
            ctx(ProfileType::Tee, 1000),
        )
        .unwrap();
        assert_eq!(hole.surface(), Surface::Front);
        assert_eq!(hole.x_distance(), Thousandths::new(100_000 + 10_000));
        assert_eq!(hole.y_distance(), Thousandths::new(30_000 - 5_000));
    }

    #[test]
    fn test_out_of_range_numbers_are_malformed() {
        let c = ctx(ProfileType::WideFlange, 2000);
        for text in [
            "v 1e300 30.00 22.00 0.00 30.00 0.00 0.00",
            "v 100.00s -1e300 22.00",
            "v 100.00s 30.00 1e300",
            "v 100.00s 30.00 22.00 0.00 1e300 0.00 0.00",
            "v 100.00s 30.00 22.00 0.00 0.00 inf 0.00",
        ] {
            let err = read_hole(&line(text), c).unwrap_err();
            assert!(matches!(err, ConvertError::MalformedHole { line: 20, .. }), "{:?}", text);
        }
    }

    #[test]
    fn test_negative_sizes_are_malformed() {
        let c = ctx(ProfileType::WideFlange, 2000);
        for text in [
            "v 100.00s 30.00 -22.00",
            "v 100.00s 30.00 22.00 0.00 -30.00 0.00 0.00",
            "v 100.00s 30.00 22.00 0.00 30.00 -10.00 0.00",
        ] {
            let err = read_hole(&line(text), c).unwrap_err();
            assert!(matches!(err, ConvertError::MalformedHole { .. }), "{:?}", text);
        }

        // Negative coordinates are valid positions
        let hole = read_hole(&line("o -10.00s -5.00 22.00"), c).unwrap();
        assert_eq!(hole.x_distance(), Thousandths::new(-10_000));
        assert_eq!(hole.y_distance(), Thousandths::new(-5_000));
    }

    #[test]
    fn test_strip_unit_suffix() {
        assert_eq!(strip_unit_suffix("100.00s"), "100.00");
        assert_eq!(strip_unit_suffix("0500"), "0500");
    }
}
