//! Interactive prompt template selection

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::domain::prompts::PromptCandidate;
use crate::domain::transcription::TranscriptionPrompt;
use crate::infrastructure::PromptLibrary;

use super::presenter::Presenter;

/// Whether a menu should be shown at all.
///
/// No candidates, or candidates without a single positive order key,
/// means there is nothing selectable and the default prompt is used.
pub fn menu_is_needed(candidates: &[PromptCandidate]) -> bool {
    candidates.iter().any(|c| c.is_numbered())
}

/// Resolve the prompt to use for this batch.
///
/// Shows a numbered menu and reads one line of input: empty selects the
/// default, a matching number selects that template, anything else
/// re-prompts. Ctrl-C or EOF during selection falls back to the default.
pub async fn select_prompt(
    candidates: &[PromptCandidate],
    presenter: &Presenter,
) -> TranscriptionPrompt {
    if !menu_is_needed(candidates) {
        return TranscriptionPrompt::default_prompt();
    }

    print_menu(candidates, presenter);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        presenter.output("Enter a number, or press Enter for the default prompt:");

        let line = tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                presenter.warn("Selection cancelled, using the default prompt");
                return TranscriptionPrompt::default_prompt();
            }
            line = lines.next_line() => line,
        };

        let choice = match line {
            Ok(Some(input)) => input.trim().to_string(),
            // EOF or read failure ends selection
            Ok(None) | Err(_) => {
                return TranscriptionPrompt::default_prompt();
            }
        };

        if choice.is_empty() {
            return TranscriptionPrompt::default_prompt();
        }

        let Ok(number) = choice.parse::<u32>() else {
            presenter.error(&format!("Invalid choice: '{}'. Please enter a number.", choice));
            continue;
        };

        let Some(candidate) = candidates
            .iter()
            .find(|c| c.is_numbered() && c.order() == number)
        else {
            presenter.error(&format!("No prompt numbered {}. Try again.", number));
            continue;
        };

        match PromptLibrary::load(candidate).await {
            Ok(prompt) => {
                presenter.info(&format!("Using prompt: {}", candidate.description()));
                return prompt;
            }
            Err(e) => {
                presenter.warn(&format!(
                    "Failed to load '{}': {}. Using the default prompt.",
                    candidate.description(),
                    e
                ));
                return TranscriptionPrompt::default_prompt();
            }
        }
    }
}

/// Print the selection menu: numbered entries first, then unnumbered ones
fn print_menu(candidates: &[PromptCandidate], presenter: &Presenter) {
    presenter.output("Available transcription prompts:");
    for candidate in candidates.iter().filter(|c| c.is_numbered()) {
        presenter.output(&format!("  {}. {}", candidate.order(), candidate.description()));
    }
    for candidate in candidates.iter().filter(|c| !c.is_numbered()) {
        presenter.output(&format!("     {}", candidate.description()));
    }
}
