//! Holes drilled into a steel part

use crate::types::{HoleType, Surface, Tenths, Thousandths};

/// Elongation of a slotted hole along the part's two local axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Slot {
    pub x: Tenths,
    pub y: Tenths,
}

impl Slot {
    pub const fn new(x: Tenths, y: Tenths) -> Self {
        Slot { x, y }
    }
}

/// A single hole on one surface of a steel part.
///
/// The size strings are computed once from the geometry, so a hole can
/// never carry a size that disagrees with its diameter and slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hole {
    surface: Surface,
    diameter: Tenths,
    slot: Option<Slot>,
    hole_type: HoleType,
    size: String,
    size_mm: String,
    size_inch: String,
    x_distance: Thousandths,
    y_distance: Thousandths,
}

impl Hole {
    /// Create a hole.
    ///
    /// Centre marks carry no drilled geometry: their diameter and size are
    /// zero regardless of what was passed in.
    pub fn new(
        surface: Surface,
        diameter: Tenths,
        slot: Option<Slot>,
        hole_type: HoleType,
        x_distance: Thousandths,
        y_distance: Thousandths,
    ) -> Self {
        let (diameter, size, size_mm, size_inch) = if hole_type == HoleType::CenterMark {
            (
                Tenths::ZERO,
                "0".to_string(),
                format_mm(Tenths::ZERO),
                format_inch(Tenths::ZERO),
            )
        } else {
            (
                diameter,
                render_size(diameter, slot, |t| t.value().to_string()),
                render_size(diameter, slot, format_mm),
                render_size(diameter, slot, format_inch),
            )
        };

        Hole {
            surface,
            diameter,
            slot,
            hole_type,
            size,
            size_mm,
            size_inch,
            x_distance,
            y_distance,
        }
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Drill diameter; zero for centre marks
    pub fn diameter(&self) -> Tenths {
        self.diameter
    }

    pub fn is_slotted(&self) -> bool {
        self.slot.is_some()
    }

    pub fn slot(&self) -> Option<Slot> {
        self.slot
    }

    pub fn slot_x(&self) -> Tenths {
        self.slot.map_or(Tenths::ZERO, |s| s.x)
    }

    pub fn slot_y(&self) -> Tenths {
        self.slot.map_or(Tenths::ZERO, |s| s.y)
    }

    pub fn hole_type(&self) -> HoleType {
        self.hole_type
    }

    /// Tool deduplication key: `"220"` for a round hole, `"520X220"` for a slot
    pub fn size(&self) -> &str {
        &self.size
    }

    /// Size in millimetres, e.g. `"22.0"` or `"52.0X22.0"`
    pub fn size_mm(&self) -> &str {
        &self.size_mm
    }

    /// Size in inches, e.g. `"0.866"`
    pub fn size_inch(&self) -> &str {
        &self.size_inch
    }

    pub fn x_distance(&self) -> Thousandths {
        self.x_distance
    }

    pub fn y_distance(&self) -> Thousandths {
        self.y_distance
    }

    /// Row for the hole information table
    pub fn summary(&self) -> HoleSummary {
        HoleSummary {
            surface: self.surface,
            size: self.size.clone(),
            x_distance: self.x_distance,
            y_distance: self.y_distance,
        }
    }
}

/// Read-only projection of a hole for list views
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoleSummary {
    pub surface: Surface,
    pub size: String,
    pub x_distance: Thousandths,
    pub y_distance: Thousandths,
}

fn render_size(diameter: Tenths, slot: Option<Slot>, fmt: impl Fn(Tenths) -> String) -> String {
    match slot {
        None => fmt(diameter),
        Some(slot) => format!("{}X{}", fmt(diameter + slot.x), fmt(diameter + slot.y)),
    }
}

fn format_mm(value: Tenths) -> String {
    format!("{:.1}", value.millimeters())
}

fn format_inch(value: Tenths) -> String {
    format!("{:.3}", value.inches())
}
