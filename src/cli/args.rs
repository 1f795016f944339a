use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::logging::{LogFormat, LogLevel};

#[derive(Parser, Debug)]
#[command(name = "mtl")]
#[command(about = "Machine translation CLI backed by pretrained Hugging Face models")]
#[command(version)]
pub struct Args {
    /// Text to translate (reads stdin if neither --text nor --input is given)
    #[arg(long, allow_hyphen_values = true)]
    pub text: Option<String>,

    /// File containing the text to translate
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// File to write the translation to (prints to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Source language code (ISO 639-1, default: de)
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Target language code (ISO 639-1, default: en)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Model identifier, overriding the one derived from the language pair
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Maximum input length in tokens (positive integer, default: 512)
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub max_length: Option<String>,

    /// Log verbosity
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Log record layout
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Suppress the input prompt and progress spinner
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported language codes
    Languages,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_full_invocation() {
        let args = Args::try_parse_from([
            "mtl",
            "--text",
            "Hallo Welt",
            "-f",
            "de",
            "-t",
            "fr",
            "--max-length",
            "128",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "-q",
        ])
        .unwrap();

        assert_eq!(args.text.as_deref(), Some("Hallo Welt"));
        assert_eq!(args.from.as_deref(), Some("de"));
        assert_eq!(args.to.as_deref(), Some("fr"));
        assert_eq!(args.max_length.as_deref(), Some("128"));
        assert_eq!(args.log_level, Some(LogLevel::Debug));
        assert_eq!(args.log_format, Some(LogFormat::Json));
        assert!(args.quiet);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_negative_max_length_reaches_validation() {
        let args = Args::try_parse_from(["mtl", "--max-length", "-3"]).unwrap();
        assert_eq!(args.max_length.as_deref(), Some("-3"));
    }

    #[test]
    fn test_text_and_input_both_accepted_by_parser() {
        // Exclusivity is checked when the input source is resolved.
        let args = Args::try_parse_from(["mtl", "--text", "Hallo", "-i", "in.txt"]).unwrap();
        assert!(args.text.is_some());
        assert!(args.input.is_some());
    }

    #[test]
    fn test_languages_subcommand() {
        let args = Args::try_parse_from(["mtl", "languages"]).unwrap();
        assert!(matches!(args.command, Some(Command::Languages)));
    }
}
