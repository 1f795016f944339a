//! Output destination selection and formatting.
//!
//! Translations read from stdin are written bare so invocations compose in
//! a pipeline. Text given inline or from a file is echoed back next to its
//! translation in a labeled block. A file destination always receives the
//! bare translation.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};
use crate::fs::atomic_write;
use crate::input::InputSource;
use crate::translation::TranslationResult;

const BLOCK_HEADER: &str = "--- Translation ---";
const BLOCK_FOOTER: &str = "-------------------";

/// Where the translation goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    FilePath(PathBuf),
    /// `formatted` is set when the input did not come from stdin.
    Stdout { formatted: bool },
}

impl OutputSink {
    pub fn resolve(output: Option<PathBuf>, input: &InputSource) -> Self {
        output.map_or_else(
            || Self::Stdout {
                formatted: !input.is_stdin(),
            },
            Self::FilePath,
        )
    }
}

/// Display names for the two languages of the labeled block.
#[derive(Debug, Clone, Copy)]
pub struct Labels<'a> {
    pub source: &'a str,
    pub target: &'a str,
}

/// Renders the labeled original/translation block.
pub fn render_block(result: &TranslationResult, labels: Labels<'_>) -> String {
    format!(
        "{BLOCK_HEADER}\n{}:  {}\n{}: {}\n{BLOCK_FOOTER}\n",
        labels.source, result.original_text, labels.target, result.translated_text
    )
}

/// Writes `result` to `sink`. `stdout` is only written for [`OutputSink::Stdout`].
pub fn emit(
    result: &TranslationResult,
    sink: &OutputSink,
    labels: Labels<'_>,
    stdout: &mut impl Write,
) -> Result<()> {
    match sink {
        OutputSink::FilePath(path) => write_file(path, &result.translated_text),
        OutputSink::Stdout { formatted } => {
            let rendered = if *formatted {
                render_block(result, labels)
            } else {
                format!("{}\n", result.translated_text)
            };

            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| Error::write("<stdout>", e))
        }
    }
}

fn write_file(path: &Path, translated_text: &str) -> Result<()> {
    atomic_write(path, &format!("{translated_text}\n")).map_err(|e| Error::write(path, e))?;
    info!(path = %path.display(), "Wrote translation to output file");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const LABELS: Labels<'static> = Labels {
        source: "German",
        target: "English",
    };

    fn result() -> TranslationResult {
        TranslationResult {
            original_text: "Guten Morgen!".to_string(),
            translated_text: "Good morning!".to_string(),
        }
    }

    #[test]
    fn test_resolve_sink() {
        let stdin = InputSource::Stdin;
        let inline = InputSource::InlineText("Hallo".to_string());
        let file = InputSource::FilePath(PathBuf::from("in.txt"));

        assert_eq!(
            OutputSink::resolve(None, &stdin),
            OutputSink::Stdout { formatted: false }
        );
        assert_eq!(
            OutputSink::resolve(None, &inline),
            OutputSink::Stdout { formatted: true }
        );
        assert_eq!(
            OutputSink::resolve(None, &file),
            OutputSink::Stdout { formatted: true }
        );
        assert_eq!(
            OutputSink::resolve(Some(PathBuf::from("out.txt")), &stdin),
            OutputSink::FilePath(PathBuf::from("out.txt"))
        );
    }

    #[test]
    fn test_formatted_block_layout() {
        let mut stdout = Vec::new();
        emit(
            &result(),
            &OutputSink::Stdout { formatted: true },
            LABELS,
            &mut stdout,
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(stdout).unwrap(),
            "--- Translation ---\n\
             German:  Guten Morgen!\n\
             English: Good morning!\n\
             -------------------\n"
        );
    }

    #[test]
    fn test_bare_output_for_stdin() {
        let mut stdout = Vec::new();
        emit(
            &result(),
            &OutputSink::Stdout { formatted: false },
            LABELS,
            &mut stdout,
        )
        .unwrap();

        assert_eq!(String::from_utf8(stdout).unwrap(), "Good morning!\n");
    }

    #[test]
    fn test_file_output_is_bare_and_stdout_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");
        let mut stdout = Vec::new();

        emit(
            &result(),
            &OutputSink::FilePath(path.clone()),
            LABELS,
            &mut stdout,
        )
        .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Good morning!\n");
        assert!(stdout.is_empty());
    }

    #[test]
    fn test_file_output_missing_parent_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no").join("such").join("out.txt");

        let err = emit(
            &result(),
            &OutputSink::FilePath(path),
            LABELS,
            &mut Vec::new(),
        )
        .unwrap_err();

        assert_eq!(err.kind(), "IOError");
        assert!(err.to_string().contains("out.txt"));
    }
}
