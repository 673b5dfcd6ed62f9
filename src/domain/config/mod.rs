//! Configuration domain module

mod app_config;

pub use app_config::{
    AppConfig, DEFAULT_AUDIO_DIR, DEFAULT_MODEL, DEFAULT_OUTPUT_DIR, DEFAULT_PROMPTS_DIR,
};
