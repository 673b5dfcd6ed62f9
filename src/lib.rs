//! BatchScribe - batch audio transcription CLI
//!
//! This crate batches local audio files through the Google Gemini API and
//! writes the resulting transcriptions as text files, optionally guided by
//! a prompt template picked from a folder of markdown files.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core value objects, entities, and errors
//! - **Application**: The batch use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Gemini, filesystem, config)
//! - **CLI**: Command-line interface, prompt menu, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
