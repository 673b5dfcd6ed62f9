//! Application layer - Use cases and port interfaces

pub mod batch;
pub mod ports;

pub use batch::{BatchCallbacks, BatchRunner, BatchSummary, FileError};
