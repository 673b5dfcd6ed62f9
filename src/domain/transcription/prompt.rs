//! Transcription prompt value object

/// Default prompt used when no template is selected
const DEFAULT_PROMPT: &str = r#"Please provide an accurate transcription of this audio file.
Format the text with proper punctuation, capitalization, and paragraph breaks.
If there are multiple speakers, please indicate speaker changes with "Speaker 1:", "Speaker 2:", etc.
If you hear background music or sound effects, you may mention them in [brackets].
Focus on clarity and readability of the final transcript."#;

/// Value object representing the instruction text sent with each audio file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionPrompt {
    content: String,
}

impl TranscriptionPrompt {
    /// Create a prompt from arbitrary text
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// The built-in default prompt
    pub fn default_prompt() -> Self {
        Self::new(DEFAULT_PROMPT)
    }

    /// Extract prompt text from a markdown template.
    ///
    /// Everything up to and including the first line starting with `#` is
    /// stripped; the remaining non-empty lines are joined and trimmed.
    /// A template without a header line is used verbatim.
    pub fn from_markdown(content: &str) -> Self {
        let mut lines = content.lines();
        let has_header = lines.any(|l| l.starts_with('#'));

        if !has_header {
            return Self::new(content);
        }

        // `lines` now points past the header line
        let body: Vec<&str> = lines.filter(|l| !l.trim().is_empty()).collect();
        Self::new(body.join("\n").trim().to_string())
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Default for TranscriptionPrompt {
    fn default() -> Self {
        Self::default_prompt()
    }
}
