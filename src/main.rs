//! BatchScribe CLI entry point

use std::process::ExitCode;

use clap::Parser;

use batch_scribe::cli::{
    app::{load_merged_config, run_batch, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{BatchOptions, Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use batch_scribe::domain::config::AppConfig;
use batch_scribe::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    // Pick up GEMINI_API_KEY from a local .env file if present
    let _ = dotenvy::dotenv();

    // Usage errors exit with 2; --help and --version still exit with 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_USAGE_ERROR)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        api_key: None, // API key comes from env/file only
        audio_dir: cli.audio_dir.clone(),
        output_dir: cli.output_dir.clone(),
        prompts_dir: cli.prompts_dir.clone(),
        model: cli.model.clone(),
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    let options = BatchOptions {
        audio_dir: config.audio_dir_or_default(),
        output_dir: config.output_dir_or_default(),
        prompts_dir: config.prompts_dir_or_default(),
        model: config.model_or_default(),
        no_menu: cli.no_menu,
    };

    run_batch(options).await
}
