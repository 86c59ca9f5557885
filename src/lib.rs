//! # dstv-peddimat
//!
//! Converts DSTV/NC1 steel part files into Peddimat drilling records.
//!
//! NC1 files describe a structural steel part by fixed line positions: a
//! header with the part's identifier, profile and dimensions, followed by a
//! `BO` block listing the holes on each face. Peddimat records describe the
//! same part for a drill line, with holes referring to per-surface tool
//! numbers instead of diameters.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dstv_peddimat::{decode, encode};
//!
//! let part = decode("1002B.nc1")?;
//! for hole in part.holes() {
//!     println!("{} {} at {}", hole.surface(), hole.size(), hole.x_distance());
//! }
//!
//! let record = encode(&part)?;
//! # Ok::<(), dstv_peddimat::ConvertError>(())
//! ```
//!
//! ## Units
//!
//! Dimensions and diameters are [`Tenths`] of a millimetre, hole positions
//! are [`Thousandths`] of a millimetre.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod convert;
pub mod error;
pub mod io;
pub mod notification;
pub mod part;
pub mod types;

pub use error::{ConvertError, Result};
pub use types::{HoleType, ProfileType, Surface, Tenths, Thousandths};

pub use part::{Hole, HoleSummary, PartGeometry, PartHeader, Slot, SteelPart};

pub use io::dstv::{DstvReader, DstvReaderConfiguration};
pub use io::peddimat::{PeddimatWriter, ToolNumber, ToolRegistry};

pub use convert::{convert_file, convert_files, ConvertOutcome};

use std::path::Path;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Decode an NC1 file; the file's base name is the expected partmark
pub fn decode<P: AsRef<Path>>(path: P) -> Result<SteelPart> {
    io::dstv::read_dstv(path)
}

/// Render a part as a Peddimat record
pub fn encode(part: &SteelPart) -> Result<String> {
    PeddimatWriter::new(part).write_to_string()
}
