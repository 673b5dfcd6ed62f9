//! Batch transcription use case

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;

use crate::domain::catalog::AudioFile;
use crate::domain::transcription::{AudioData, TranscriptionPrompt};

use super::ports::{TranscriptSink, Transcriber, TranscriptionError, WriteError};

/// Failure while processing a single file. Never aborts the batch;
/// each one becomes a counted failure in the summary.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("Failed to read audio file: {0}")]
    Read(String),

    #[error("Transcription failed: {0}")]
    Transcription(#[from] TranscriptionError),

    #[error("Write failed: {0}")]
    Write(#[from] WriteError),
}

/// Counters produced by a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Number of files in the catalog
    pub total: usize,
    /// Files transcribed and written
    pub succeeded: usize,
    /// Files that failed at any stage
    pub failed: usize,
    /// Whether the run was stopped by a shutdown signal
    pub interrupted: bool,
}

impl BatchSummary {
    /// Files actually processed (may be fewer than total when interrupted)
    pub fn processed(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// Callbacks for per-file progress reporting
#[derive(Default)]
pub struct BatchCallbacks {
    /// Called before a file is transcribed, with its name
    pub on_file_start: Option<Box<dyn Fn(&str) + Send + Sync>>,
    /// Called after a file's transcription was written, with name and output path
    pub on_file_done: Option<Box<dyn Fn(&str, &Path) + Send + Sync>>,
    /// Called when a file fails, with name and error message
    pub on_file_failed: Option<Box<dyn Fn(&str, &str) + Send + Sync>>,
}

/// Sequential batch transcription use case.
///
/// Processes one file fully (read, transcribe, write) before the next.
/// Per-file failures are absorbed into the summary counters.
pub struct BatchRunner<T, S>
where
    T: Transcriber,
    S: TranscriptSink,
{
    transcriber: T,
    sink: S,
    stop_flag: Arc<AtomicBool>,
}

impl<T, S> BatchRunner<T, S>
where
    T: Transcriber,
    S: TranscriptSink,
{
    /// Create a new batch runner
    pub fn new(transcriber: T, sink: S) -> Self {
        Self {
            transcriber,
            sink,
            stop_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Use an externally owned stop flag (set by the signal handler)
    pub fn with_stop_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop_flag = flag;
        self
    }

    /// Get the stop flag for external signal handling
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop_flag)
    }

    /// Run the batch over the given files with the given prompt
    pub async fn run(
        &self,
        files: &[AudioFile],
        prompt: &TranscriptionPrompt,
        callbacks: BatchCallbacks,
    ) -> BatchSummary {
        let mut summary = BatchSummary {
            total: files.len(),
            ..Default::default()
        };

        for file in files {
            if self.stop_flag.load(Ordering::SeqCst) {
                summary.interrupted = true;
                break;
            }

            let name = file.file_name();
            if let Some(ref cb) = callbacks.on_file_start {
                cb(&name);
            }

            match self.process_file(file, prompt).await {
                Ok(output_path) => {
                    summary.succeeded += 1;
                    if let Some(ref cb) = callbacks.on_file_done {
                        cb(&name, &output_path);
                    }
                }
                Err(e) => {
                    summary.failed += 1;
                    if let Some(ref cb) = callbacks.on_file_failed {
                        cb(&name, &e.to_string());
                    }
                }
            }
        }

        summary
    }

    /// Process a single file: read bytes, transcribe, write the result
    async fn process_file(
        &self,
        file: &AudioFile,
        prompt: &TranscriptionPrompt,
    ) -> Result<PathBuf, FileError> {
        let bytes = tokio::fs::read(file.path())
            .await
            .map_err(|e| FileError::Read(e.to_string()))?;

        let audio = AudioData::new(bytes, file.mime_type());
        let text = self.transcriber.transcribe(&audio, prompt).await?;
        let output_path = self.sink.write(&text, file).await?;

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockTranscriber {
        fail_on: Option<&'static str>,
    }

    #[async_trait]
    impl Transcriber for MockTranscriber {
        async fn transcribe(
            &self,
            audio: &AudioData,
            _prompt: &TranscriptionPrompt,
        ) -> Result<String, TranscriptionError> {
            // `fail_on` matches against the audio payload for test control
            if let Some(marker) = self.fail_on {
                if audio.data() == marker.as_bytes() {
                    return Err(TranscriptionError::ApiError("quota exceeded".to_string()));
                }
            }
            Ok("Test transcription".to_string())
        }
    }

    #[derive(Default)]
    struct MockSink {
        written: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TranscriptSink for MockSink {
        async fn write(&self, _text: &str, source: &AudioFile) -> Result<PathBuf, WriteError> {
            self.written.lock().unwrap().push(source.file_name());
            Ok(PathBuf::from(format!("{}_transcription.txt", source.stem())))
        }
    }

    fn write_audio(dir: &std::path::Path, name: &str, content: &str) -> AudioFile {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        AudioFile::from_path(path).unwrap()
    }

    #[tokio::test]
    async fn run_counts_successes() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![
            write_audio(dir.path(), "a.mp3", "aaa"),
            write_audio(dir.path(), "b.wav", "bbb"),
        ];

        let runner = BatchRunner::new(MockTranscriber { fail_on: None }, MockSink::default());
        let summary = runner
            .run(&files, &TranscriptionPrompt::default(), BatchCallbacks::default())
            .await;

        assert_eq!(summary.total, 2);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 0);
        assert!(!summary.interrupted);
    }

    #[tokio::test]
    async fn run_counts_failure_without_stopping() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![
            write_audio(dir.path(), "bad.mp3", "fail-me"),
            write_audio(dir.path(), "good.mp3", "ok"),
        ];

        let sink = MockSink::default();
        let runner = BatchRunner::new(
            MockTranscriber {
                fail_on: Some("fail-me"),
            },
            sink,
        );
        let summary = runner
            .run(&files, &TranscriptionPrompt::default(), BatchCallbacks::default())
            .await;

        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.processed(), 2);
    }

    #[tokio::test]
    async fn run_counts_unreadable_file_as_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = AudioFile::from_path(dir.path().join("missing.mp3")).unwrap();

        let runner = BatchRunner::new(MockTranscriber { fail_on: None }, MockSink::default());
        let summary = runner
            .run(
                &[missing],
                &TranscriptionPrompt::default(),
                BatchCallbacks::default(),
            )
            .await;

        assert_eq!(summary.failed, 1);
        assert_eq!(summary.succeeded, 0);
    }

    #[tokio::test]
    async fn stop_flag_interrupts_before_processing() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![write_audio(dir.path(), "a.mp3", "aaa")];

        let runner = BatchRunner::new(MockTranscriber { fail_on: None }, MockSink::default());
        runner.stop_flag().store(true, Ordering::SeqCst);

        let summary = runner
            .run(&files, &TranscriptionPrompt::default(), BatchCallbacks::default())
            .await;

        assert!(summary.interrupted);
        assert_eq!(summary.processed(), 0);
        assert_eq!(summary.total, 1);
    }

    #[tokio::test]
    async fn callbacks_report_failures_with_filename() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![write_audio(dir.path(), "bad.mp3", "fail-me")];

        let failures: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let failures_cb = Arc::clone(&failures);
        let callbacks = BatchCallbacks {
            on_file_failed: Some(Box::new(move |name, _err| {
                failures_cb.lock().unwrap().push(name.to_string());
            })),
            ..Default::default()
        };

        let runner = BatchRunner::new(
            MockTranscriber {
                fail_on: Some("fail-me"),
            },
            MockSink::default(),
        );
        runner
            .run(&files, &TranscriptionPrompt::default(), callbacks)
            .await;

        assert_eq!(failures.lock().unwrap().as_slice(), ["bad.mp3"]);
    }
}
