//! CLI layer - argument parsing, output formatting, and run orchestration

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;
pub mod selector;
pub mod signals;

pub use args::BatchOptions;
