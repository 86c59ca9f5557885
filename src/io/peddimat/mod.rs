//! Peddimat writing

mod tool_registry;
mod writer;

pub use tool_registry::{ToolNumber, ToolRegistry, EMPTY_TOOL, TOOL_CAPACITY};
pub use writer::{write_peddimat, PeddimatTextWriter, PeddimatWriter};
