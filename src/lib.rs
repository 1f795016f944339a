//! # mtl - Machine Translation CLI
//!
//! `mtl` translates text with pretrained sequence-to-sequence models from the
//! Hugging Face Hub. By default the OPUS-MT model for the language pair is
//! used (`Helsinki-NLP/opus-mt-{from}-{to}`).
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate inline text (German to English by default)
//! mtl --text "Guten Morgen!"
//!
//! # Translate a file into another file
//! mtl -i brief.txt -o letter.txt
//!
//! # Translate from stdin; output is the bare translation, ready for piping
//! echo "Bonjour" | mtl --from fr --to de
//!
//! # Use a specific model
//! mtl --model facebook/nllb-200-distilled-600M --text "Hallo"
//! ```
//!
//! ## Configuration
//!
//! Defaults can be stored in `~/.config/mtl/config.toml`:
//!
//! ```toml
//! [mtl]
//! from = "de"
//! to = "en"
//! max_length = 512
//!
//! [hub]
//! api_key_env = "HF_TOKEN"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file loading and setting resolution.
pub mod config;

/// Error taxonomy shared by every stage of a run.
pub mod error;

/// File system utilities.
pub mod fs;

/// Input source selection and reading.
pub mod input;

/// Log subscriber setup.
pub mod logging;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Output destination selection and formatting.
pub mod sink;

/// Translator capability and the Hugging Face Hub implementation.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;

pub use error::{Error, Result};
