//! Steel part model

mod hole;

pub use hole::{Hole, HoleSummary, Slot};

use crate::error::{ConvertError, Result};
use crate::notification::NotificationCollection;
use crate::types::{ProfileType, Surface, Tenths};

/// Scalar header data of a steel part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartHeader {
    /// Unique identifier; matches the source file's base name
    pub partmark: String,
    /// Free-text profile label, e.g. `HEA200`
    pub profile: String,
    pub profile_type: ProfileType,
    /// Profile code as written in the source, kept for diagnostics
    pub profile_code: String,
    pub quantity: u32,
    pub profile_depth: Tenths,
    pub web_thickness: Tenths,
    pub flange_height: Tenths,
    pub flange_thickness: Tenths,
    pub length: Tenths,
}

/// Outline dimensions needed to draw a part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartGeometry {
    pub profile_depth: Tenths,
    pub web_thickness: Tenths,
    pub flange_height: Tenths,
    pub flange_thickness: Tenths,
    pub length: Tenths,
}

/// A machined steel part: header data plus its holes in source order.
///
/// Parts are assembled once and never mutated. Hole order matters: it
/// decides which tool slot a size lands in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteelPart {
    header: PartHeader,
    holes: Vec<Hole>,
    notifications: NotificationCollection,
}

impl SteelPart {
    /// Assemble a part from its header and holes.
    ///
    /// Fails when the length is not positive, the quantity is zero, or a
    /// supported profile has no depth.
    pub fn new(header: PartHeader, holes: Vec<Hole>) -> Result<Self> {
        Self::with_notifications(header, holes, NotificationCollection::new())
    }

    pub(crate) fn with_notifications(
        header: PartHeader,
        holes: Vec<Hole>,
        notifications: NotificationCollection,
    ) -> Result<Self> {
        if header.quantity == 0 {
            return Err(ConvertError::InvalidQuantity(header.quantity.to_string()));
        }
        if !header.length.is_positive() {
            return Err(ConvertError::Custom(format!(
                "Part {} has non-positive length {}",
                header.partmark, header.length
            )));
        }
        if header.profile_type.is_valid() && !header.profile_depth.is_positive() {
            return Err(ConvertError::Custom(format!(
                "Part {} has non-positive profile depth {}",
                header.partmark, header.profile_depth
            )));
        }

        Ok(SteelPart {
            header,
            holes,
            notifications,
        })
    }

    pub fn header(&self) -> &PartHeader {
        &self.header
    }

    pub fn partmark(&self) -> &str {
        &self.header.partmark
    }

    pub fn profile(&self) -> &str {
        &self.header.profile
    }

    pub fn profile_type(&self) -> ProfileType {
        self.header.profile_type
    }

    pub fn quantity(&self) -> u32 {
        self.header.quantity
    }

    pub fn profile_depth(&self) -> Tenths {
        self.header.profile_depth
    }

    pub fn web_thickness(&self) -> Tenths {
        self.header.web_thickness
    }

    pub fn flange_height(&self) -> Tenths {
        self.header.flange_height
    }

    pub fn flange_thickness(&self) -> Tenths {
        self.header.flange_thickness
    }

    pub fn length(&self) -> Tenths {
        self.header.length
    }

    /// False when the profile code was not recognised
    pub fn is_valid(&self) -> bool {
        self.header.profile_type.is_valid()
    }

    /// All holes in source order
    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    /// Holes on one surface, in source order
    pub fn holes_on(&self, surface: Surface) -> impl Iterator<Item = &Hole> {
        self.holes.iter().filter(move |h| h.surface() == surface)
    }

    /// Diagnostics collected while decoding
    pub fn notifications(&self) -> &NotificationCollection {
        &self.notifications
    }

    pub fn geometry(&self) -> PartGeometry {
        PartGeometry {
            profile_depth: self.header.profile_depth,
            web_thickness: self.header.web_thickness,
            flange_height: self.header.flange_height,
            flange_thickness: self.header.flange_thickness,
            length: self.header.length,
        }
    }

    /// One summary row per hole, in source order
    pub fn hole_table(&self) -> Vec<HoleSummary> {
        self.holes.iter().map(Hole::summary).collect()
    }
}
