//! Core value types shared by the reader, the model and the writer

pub mod hole_type;
pub mod profile_type;
pub mod surface;
pub mod units;

pub use hole_type::HoleType;
pub use profile_type::ProfileType;
pub use surface::Surface;
pub use units::{Tenths, Thousandths};
