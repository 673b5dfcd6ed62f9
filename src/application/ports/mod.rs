//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod sink;
pub mod transcriber;

// Re-export common types
pub use config::ConfigStore;
pub use sink::{TranscriptSink, WriteError};
pub use transcriber::{Transcriber, TranscriptionError};
