//! I/O module for reading DSTV/NC1 files and writing Peddimat records

pub mod dstv;
pub mod peddimat;

pub use dstv::{DstvReader, DstvReaderConfiguration};
pub use peddimat::{PeddimatWriter, ToolRegistry};
