//! Per-part tool registry.
//!
//! Peddimat refers to holes by tool number instead of by diameter. Each
//! surface gets up to nine tools, one per distinct hole size, numbered in
//! the order the sizes first appear among the part's holes.

use crate::error::{ConvertError, Result};
use crate::part::{Hole, SteelPart};
use crate::types::Surface;
use indexmap::IndexSet;
use std::fmt;

/// Tool slots available per surface
pub const TOOL_CAPACITY: usize = 9;

/// Placeholder written for an unused tool slot
pub const EMPTY_TOOL: &str = "0";

/// Encoded tool reference: `surface * 100 + slot * 10`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToolNumber(u32);

impl ToolNumber {
    /// Tool number for a 0-based slot position on a surface
    pub const fn new(surface: Surface, position: usize) -> Self {
        ToolNumber(surface.tool_index() * 100 + (position as u32 + 1) * 10)
    }

    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ToolNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Distinct hole sizes per surface, in first-seen order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRegistry {
    /// Indexed by `Surface::tool_index() - 1`
    sizes: [IndexSet<String>; 3],
}

impl ToolRegistry {
    /// Collect the tools used by a part.
    ///
    /// Fails with [`ConvertError::UnsupportedCapacity`] when a surface needs
    /// more than [`TOOL_CAPACITY`] distinct sizes.
    pub fn build(part: &SteelPart) -> Result<Self> {
        let mut sizes: [IndexSet<String>; 3] = Default::default();

        for hole in part.holes() {
            let set = &mut sizes[slot_of(hole.surface())];
            if !set.contains(hole.size()) {
                set.insert(hole.size().to_string());
            }
        }

        for surface in Surface::TOOL_ORDER {
            let distinct = sizes[slot_of(surface)].len();
            if distinct > TOOL_CAPACITY {
                return Err(ConvertError::UnsupportedCapacity {
                    surface,
                    distinct,
                    max: TOOL_CAPACITY,
                });
            }
        }

        Ok(ToolRegistry { sizes })
    }

    /// Distinct sizes on a surface, without padding
    pub fn sizes(&self, surface: Surface) -> impl Iterator<Item = &str> {
        self.sizes[slot_of(surface)].iter().map(String::as_str)
    }

    /// Number of distinct sizes on a surface
    pub fn len(&self, surface: Surface) -> usize {
        self.sizes[slot_of(surface)].len()
    }

    /// Tool slots of a surface, padded with [`EMPTY_TOOL`]
    pub fn slots(&self, surface: Surface) -> [&str; TOOL_CAPACITY] {
        let mut slots = [EMPTY_TOOL; TOOL_CAPACITY];
        for (slot, size) in slots.iter_mut().zip(self.sizes(surface)) {
            *slot = size;
        }
        slots
    }

    /// One `[front, bottom, top]` triple per tool slot
    pub fn rows(&self) -> [[&str; 3]; TOOL_CAPACITY] {
        let front = self.slots(Surface::Front);
        let bottom = self.slots(Surface::Bottom);
        let top = self.slots(Surface::Top);
        std::array::from_fn(|i| [front[i], bottom[i], top[i]])
    }

    /// Tool number of a size on a surface
    pub fn tool_number(&self, size: &str, surface: Surface) -> Option<ToolNumber> {
        self.sizes[slot_of(surface)]
            .get_index_of(size)
            .map(|position| ToolNumber::new(surface, position))
    }

    /// Tool number for one of the part's holes
    pub fn tool_for(&self, hole: &Hole) -> Result<ToolNumber> {
        self.tool_number(hole.size(), hole.surface())
            .ok_or_else(|| ConvertError::UnknownTool {
                surface: hole.surface(),
                size: hole.size().to_string(),
            })
    }
}

fn slot_of(surface: Surface) -> usize {
    surface.tool_index() as usize - 1
}
