//! Error taxonomy for a translation run.
//!
//! Every failure of an invocation falls into exactly one of four kinds. All
//! of them are terminal: the run stops, the cause goes to stderr and the
//! process exits nonzero.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Where users can look up valid model identifiers.
pub const MODEL_REGISTRY_URL: &str = "https://huggingface.co/models";

#[derive(Error, Debug)]
pub enum Error {
    /// Invalid or conflicting command-line or config-file input.
    #[error("{0}")]
    Configuration(String),

    /// Reading the input file or writing the output file failed.
    #[error("Failed to {action} '{}': {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The model identifier does not resolve to a model.
    #[error(
        "Model '{model_id}' could not be found: {reason}\n\n\
         Check that the identifier exists at {registry}",
        registry = MODEL_REGISTRY_URL
    )]
    ModelNotFound { model_id: String, reason: String },

    /// The translator failed while translating.
    #[error("Translation failed: {0}")]
    Translation(String),
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn read(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            action: "read",
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn write(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            action: "write",
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn model_not_found(model_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ModelNotFound {
            model_id: model_id.into(),
            reason: reason.into(),
        }
    }

    /// Name of the error kind, as used in log records.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "ConfigurationError",
            Self::Io { .. } => "IOError",
            Self::ModelNotFound { .. } => "ModelNotFoundError",
            Self::Translation(_) => "TranslationError",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
