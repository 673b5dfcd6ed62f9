//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

/// BatchScribe - batch audio transcription using Google Gemini
#[derive(Parser, Debug)]
#[command(name = "batch-scribe")]
#[command(version)]
#[command(about = "Batch audio transcription using Google Gemini")]
#[command(long_about = None)]
pub struct Cli {
    /// Directory containing audio files to transcribe
    #[arg(short = 'a', long, value_name = "DIR")]
    pub audio_dir: Option<String>,

    /// Directory transcriptions are written to
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Directory of markdown prompt templates
    #[arg(short = 'p', long, value_name = "DIR")]
    pub prompts_dir: Option<String>,

    /// Gemini model to use
    #[arg(short = 'm', long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Skip the prompt menu and use the default prompt
    #[arg(long)]
    pub no_menu: bool,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed batch run options
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub audio_dir: String,
    pub output_dir: String,
    pub prompts_dir: String,
    pub model: String,
    pub no_menu: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] =
    &["api_key", "audio_dir", "output_dir", "prompts_dir", "model"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
