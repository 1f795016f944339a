use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};

/// Where the text to translate comes from. Exactly one per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    InlineText(String),
    FilePath(PathBuf),
    Stdin,
}

impl InputSource {
    /// Picks the source from the `--text` and `--input` options.
    ///
    /// Giving both is a configuration error; giving neither means stdin.
    pub fn from_options(text: Option<String>, file: Option<PathBuf>) -> Result<Self> {
        match (text, file) {
            (Some(_), Some(_)) => Err(Error::config(
                "Options --text and --input are mutually exclusive input options\n\n\
                 Provide the text inline, from a file, or on stdin, but only one of them.",
            )),
            (Some(text), None) => Ok(Self::InlineText(text)),
            (None, Some(path)) => Ok(Self::FilePath(path)),
            (None, None) => Ok(Self::Stdin),
        }
    }

    pub const fn is_stdin(&self) -> bool {
        matches!(self, Self::Stdin)
    }
}

pub struct InputReader;

impl InputReader {
    /// Resolves the source to its text, trimmed of one trailing newline.
    ///
    /// `stdin` is only consumed for [`InputSource::Stdin`].
    pub fn read(source: &InputSource, stdin: impl Read) -> Result<String> {
        let raw = match source {
            InputSource::InlineText(text) => {
                info!("Read input from --text argument");
                text.clone()
            }
            InputSource::FilePath(path) => {
                let text = Self::read_file(path)?;
                info!(path = %path.display(), "Read input from file");
                text
            }
            InputSource::Stdin => {
                let text = Self::read_stdin(stdin)?;
                info!("Read input from stdin");
                text
            }
        };

        let text = strip_trailing_newline(raw);
        if text.trim().is_empty() {
            return Err(Error::config("No input provided"));
        }

        Ok(text)
    }

    /// Whether reading stdin would wait on a person typing.
    pub fn stdin_is_interactive() -> bool {
        io::stdin().is_terminal()
    }

    fn read_file(path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|e| Error::read(path, e))?;
        String::from_utf8(bytes).map_err(|e| {
            Error::read(path, io::Error::new(io::ErrorKind::InvalidData, e.utf8_error()))
        })
    }

    fn read_stdin(mut stdin: impl Read) -> Result<String> {
        let mut buffer = Vec::new();
        stdin
            .read_to_end(&mut buffer)
            .map_err(|e| Error::read("<stdin>", e))?;

        String::from_utf8(buffer).map_err(|e| {
            Error::read(
                "<stdin>",
                io::Error::new(io::ErrorKind::InvalidData, e.utf8_error()),
            )
        })
    }
}

/// Removes a single trailing `\n` (or `\r\n`), leaving everything else intact.
fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn no_stdin() -> Cursor<Vec<u8>> {
        Cursor::new(Vec::new())
    }

    #[test]
    fn test_both_options_rejected() {
        let err = InputSource::from_options(
            Some("Hallo".to_string()),
            Some(PathBuf::from("/nonexistent/input.txt")),
        )
        .unwrap_err();

        assert_eq!(err.kind(), "ConfigurationError");
        assert!(err.to_string().contains("mutually exclusive"));
    }

    #[test]
    fn test_source_selection() {
        assert_eq!(
            InputSource::from_options(Some("Hallo".to_string()), None).unwrap(),
            InputSource::InlineText("Hallo".to_string())
        );
        assert_eq!(
            InputSource::from_options(None, Some(PathBuf::from("in.txt"))).unwrap(),
            InputSource::FilePath(PathBuf::from("in.txt"))
        );
        assert!(InputSource::from_options(None, None).unwrap().is_stdin());
    }

    #[test]
    fn test_read_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Guten Tag").unwrap();

        let source = InputSource::FilePath(temp_file.path().to_path_buf());
        let content = InputReader::read(&source, no_stdin()).unwrap();
        assert_eq!(content, "Guten Tag");
    }

    #[test]
    fn test_read_nonexistent_file() {
        let source = InputSource::FilePath(PathBuf::from("/nonexistent/path/to/file.txt"));
        let err = InputReader::read(&source, no_stdin()).unwrap_err();

        assert_eq!(err.kind(), "IOError");
        assert!(err.to_string().contains("/nonexistent/path/to/file.txt"));
    }

    #[test]
    fn test_read_file_invalid_utf8() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(&[0xff, 0xfe, 0x00]).unwrap();

        let source = InputSource::FilePath(temp_file.path().to_path_buf());
        let err = InputReader::read(&source, no_stdin()).unwrap_err();
        assert_eq!(err.kind(), "IOError");
    }

    #[test]
    fn test_read_file_multiline_keeps_inner_newlines() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "Zeile 1\nZeile 2\n\nZeile 3\n").unwrap();

        let source = InputSource::FilePath(temp_file.path().to_path_buf());
        let content = InputReader::read(&source, no_stdin()).unwrap();
        assert_eq!(content, "Zeile 1\nZeile 2\n\nZeile 3");
    }

    #[test]
    fn test_read_stdin_full_contents() {
        let stdin = Cursor::new(b"Erste Zeile\nZweite Zeile\n".to_vec());
        let content = InputReader::read(&InputSource::Stdin, stdin).unwrap();
        assert_eq!(content, "Erste Zeile\nZweite Zeile");
    }

    #[test]
    fn test_only_one_trailing_newline_removed() {
        let stdin = Cursor::new(b"Hallo\n\n".to_vec());
        let content = InputReader::read(&InputSource::Stdin, stdin).unwrap();
        assert_eq!(content, "Hallo\n");
    }

    #[test]
    fn test_crlf_trailing_newline_removed() {
        let stdin = Cursor::new(b"Hallo\r\n".to_vec());
        let content = InputReader::read(&InputSource::Stdin, stdin).unwrap();
        assert_eq!(content, "Hallo");
    }

    #[test]
    fn test_inline_text_does_not_touch_stdin() {
        let stdin = Cursor::new(b"ignored".to_vec());
        let source = InputSource::InlineText("Guten Morgen!".to_string());
        assert_eq!(InputReader::read(&source, stdin).unwrap(), "Guten Morgen!");
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = InputReader::read(&InputSource::Stdin, Cursor::new(b"\n".to_vec())).unwrap_err();
        assert_eq!(err.kind(), "ConfigurationError");

        let source = InputSource::InlineText(String::new());
        assert!(InputReader::read(&source, no_stdin()).is_err());
    }

    #[test]
    fn test_strip_trailing_newline_no_newline() {
        assert_eq!(strip_trailing_newline("abc".to_string()), "abc");
        assert_eq!(strip_trailing_newline(String::new()), "");
    }
}
