//! Input and output helpers for the LESS compiler.
//!
//! Sources are drained into memory with [to_byte_array], which closes the
//! stream on every path through [close_quietly]. Compiled output is written
//! with [write()]. Path strings of either separator convention are inspected
//! with the helpers in [path].
//!
//! Arguments a caller may leave unset are taken as `Option`s and rejected
//! with [LessIoError::InvalidArgument] before any I/O happens.

mod close;
mod drain;
mod encoding;
mod errors;
pub mod path;
pub mod text;
mod write;

pub use close::{close_quietly, Close, Closing};
pub use drain::{read_file, read_to_string, to_byte_array, CHUNK_SIZE};
pub use encoding::Encoding;
pub use errors::{LessIoError, Result};
pub use write::{write, write_bytes};
