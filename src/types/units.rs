//! Length units used by the two formats
//!
//! Part dimensions, diameters and slot elongations are carried in tenths of
//! a millimetre; hole positions are carried in thousandths of a millimetre.
//! Values only move between the two scales through the conversions here.

use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Millimetres per inch
const MM_PER_INCH: f64 = 25.4;

/// Largest magnitude read from a source file, in millimetres
pub const MAX_MILLIMETERS: f64 = 1.0e9;

fn in_range(mm: f64) -> bool {
    mm.is_finite() && mm.abs() <= MAX_MILLIMETERS
}

/// A length in tenths of a millimetre (0.1 mm)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Tenths(i64);

impl Tenths {
    /// Zero length
    pub const ZERO: Tenths = Tenths(0);

    /// Create a length from a raw tenths-of-millimetre value
    #[inline]
    pub const fn new(value: i64) -> Self {
        Tenths(value)
    }

    /// Get the raw value
    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Round a millimetre reading to the nearest tenth
    pub fn from_millimeters(mm: f64) -> Self {
        Tenths((mm * 10.0).round() as i64)
    }

    /// Like [`Tenths::from_millimeters`], but `None` outside
    /// ±[`MAX_MILLIMETERS`] so later unit arithmetic cannot overflow
    pub fn try_from_millimeters(mm: f64) -> Option<Self> {
        in_range(mm).then(|| Self::from_millimeters(mm))
    }

    /// Length in millimetres
    pub fn millimeters(&self) -> f64 {
        self.0 as f64 / 10.0
    }

    /// Length in inches
    pub fn inches(&self) -> f64 {
        self.millimeters() / MM_PER_INCH
    }

    /// Same length on the thousandths scale
    #[inline]
    pub const fn to_thousandths(self) -> Thousandths {
        Thousandths(self.0 * 100)
    }

    /// Half of this length on the thousandths scale.
    ///
    /// Shifts a coordinate from one end of a slot to its centre.
    #[inline]
    pub const fn half_to_thousandths(self) -> Thousandths {
        Thousandths(self.0 * 50)
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl Add for Tenths {
    type Output = Tenths;

    fn add(self, rhs: Tenths) -> Tenths {
        Tenths(self.0 + rhs.0)
    }
}

impl From<i64> for Tenths {
    fn from(value: i64) -> Self {
        Tenths(value)
    }
}

impl fmt::Display for Tenths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A length in thousandths of a millimetre (0.001 mm)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Thousandths(i64);

impl Thousandths {
    /// Zero length
    pub const ZERO: Thousandths = Thousandths(0);

    #[inline]
    pub const fn new(value: i64) -> Self {
        Thousandths(value)
    }

    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Round a millimetre reading to the nearest thousandth
    pub fn from_millimeters(mm: f64) -> Self {
        Thousandths((mm * 1000.0).round() as i64)
    }

    pub fn try_from_millimeters(mm: f64) -> Option<Self> {
        in_range(mm).then(|| Self::from_millimeters(mm))
    }

    pub fn millimeters(&self) -> f64 {
        self.0 as f64 / 1000.0
    }
}

impl Add for Thousandths {
    type Output = Thousandths;

    fn add(self, rhs: Thousandths) -> Thousandths {
        Thousandths(self.0 + rhs.0)
    }
}

impl Sub for Thousandths {
    type Output = Thousandths;

    fn sub(self, rhs: Thousandths) -> Thousandths {
        Thousandths(self.0 - rhs.0)
    }
}

impl Neg for Thousandths {
    type Output = Thousandths;

    fn neg(self) -> Thousandths {
        Thousandths(-self.0)
    }
}

impl From<i64> for Thousandths {
    fn from(value: i64) -> Self {
        Thousandths(value)
    }
}

impl fmt::Display for Thousandths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
