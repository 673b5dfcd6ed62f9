//! Main app runner for a batch transcription

use std::env;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use colored::Colorize;

use crate::application::ports::ConfigStore;
use crate::application::{BatchCallbacks, BatchRunner};
use crate::domain::config::AppConfig;
use crate::domain::error::CatalogError;
use crate::domain::transcription::{AudioMimeType, TranscriptionPrompt};
use crate::infrastructure::{
    AudioCatalog, FsTranscriptWriter, GeminiTranscriber, PromptLibrary, XdgConfigStore,
};

use super::args::BatchOptions;
use super::presenter::Presenter;
use super::selector::select_prompt;
use super::signals::ShutdownSignal;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run a full batch transcription
pub async fn run_batch(options: BatchOptions) -> ExitCode {
    let presenter = Presenter::new();

    // Load API key from environment or config file
    let api_key = match get_api_key().await {
        Ok(key) => key,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Discover audio files
    let files = match AudioCatalog::scan(&options.audio_dir).await {
        Ok(files) => files,
        Err(CatalogError::DirNotFound(dir)) => {
            presenter.warn(&format!("Audio folder '{}' not found!", dir));
            print_supported_formats(&presenter);
            return ExitCode::from(EXIT_SUCCESS);
        }
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if files.is_empty() {
        presenter.warn(&format!(
            "No supported audio files found in '{}'.",
            options.audio_dir
        ));
        print_supported_formats(&presenter);
        return ExitCode::from(EXIT_SUCCESS);
    }

    presenter.info(&format!("Found {} audio file(s) to transcribe:", files.len()));
    for file in &files {
        presenter.info(&format!("  - {}", file.file_name()));
    }

    // Resolve the prompt before any remote work
    let prompt = resolve_prompt(&options, &presenter).await;

    // SIGINT stops the batch between files
    let shutdown = ShutdownSignal::new();
    if let Err(e) = shutdown.setup().await {
        presenter.error(&format!("Failed to setup signal handler: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }

    // Create adapters and the use case
    let transcriber = GeminiTranscriber::with_model(api_key, options.model.as_str());
    let writer = FsTranscriptWriter::new(&options.output_dir);
    let runner = BatchRunner::new(transcriber, writer).with_stop_flag(shutdown.flag());

    // One shared presenter drives the per-file spinner across the callbacks
    let progress = Arc::new(Mutex::new(Presenter::new()));
    let on_start = Arc::clone(&progress);
    let on_done = Arc::clone(&progress);
    let on_failed = Arc::clone(&progress);

    let callbacks = BatchCallbacks {
        on_file_start: Some(Box::new(move |name: &str| {
            if let Ok(mut p) = on_start.lock() {
                p.start_spinner(&format!("Transcribing: {}", name));
            }
        })),
        on_file_done: Some(Box::new(move |_name: &str, path: &std::path::Path| {
            if let Ok(mut p) = on_done.lock() {
                p.spinner_success(&format!("Transcription saved: {}", path.display()));
            }
        })),
        on_file_failed: Some(Box::new(move |name: &str, err: &str| {
            if let Ok(mut p) = on_failed.lock() {
                p.spinner_fail(&format!("{}: {}", name, err));
            }
        })),
    };

    let summary = runner.run(&files, &prompt, callbacks).await;

    presenter.summary(&summary);
    if summary.succeeded > 0 {
        presenter.output(&format!(
            "\nTranscriptions saved in the '{}' folder.",
            options.output_dir
        ));
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Pick the prompt for this batch: the menu selection, or the default
/// when the menu is skipped or no templates exist.
async fn resolve_prompt(options: &BatchOptions, presenter: &Presenter) -> TranscriptionPrompt {
    if options.no_menu {
        return TranscriptionPrompt::default_prompt();
    }

    let candidates = match PromptLibrary::scan(&options.prompts_dir).await {
        Ok(candidates) => candidates,
        Err(CatalogError::DirNotFound(_)) => Vec::new(),
        Err(e) => {
            presenter.warn(&format!(
                "Failed to read prompts folder: {}. Using the default prompt.",
                e
            ));
            Vec::new()
        }
    };

    select_prompt(&candidates, presenter).await
}

fn print_supported_formats(presenter: &Presenter) {
    presenter.info(&format!(
        "Supported formats: {}",
        AudioMimeType::SUPPORTED_EXTENSIONS.join(", ")
    ));
}

/// Get API key from environment or config file
pub async fn get_api_key() -> Result<String, String> {
    // Check environment first
    if let Ok(key) = env::var("GEMINI_API_KEY") {
        if !key.is_empty() {
            return Ok(key);
        }
    }

    // Check config file
    let store = XdgConfigStore::new();
    if let Ok(config) = store.load().await {
        if let Some(key) = config.api_key {
            if !key.is_empty() {
                return Ok(key);
            }
        }
    }

    Err([
        "GEMINI_API_KEY not found.",
        "",
        "To use batch-scribe, you need a Gemini API key:",
        "  1. Get your API key from: https://aistudio.google.com/app/apikey",
        "  2. Export it: export GEMINI_API_KEY=<your-key> (or add it to a .env file)",
        "  3. Or store it: batch-scribe config set api_key <your-key>",
    ]
    .join("\n"))
}

/// Merge configuration sources: defaults, then config file, then CLI values
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|e| {
        eprintln!("{} Failed to load config file: {}", "⚠".yellow(), e);
        AppConfig::empty()
    });

    AppConfig::defaults().merge(file_config).merge(cli_config)
}
