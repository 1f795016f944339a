use std::num::NonZeroU32;

use crate::error::{Error, Result};

/// Organization publishing the default OPUS-MT model family.
const DEFAULT_MODEL_ORG: &str = "Helsinki-NLP";

/// Derives the canonical model identifier for a language pair.
pub fn model_id_for_pair(source_lang: &str, target_lang: &str) -> String {
    format!("{DEFAULT_MODEL_ORG}/opus-mt-{source_lang}-{target_lang}")
}

/// A single translation job, fixed once input and configuration are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    source_text: String,
    source_lang: String,
    target_lang: String,
    model_override: Option<String>,
    max_length: NonZeroU32,
}

impl TranslationRequest {
    /// Builds a request, rejecting empty text.
    pub fn new(
        source_text: String,
        source_lang: String,
        target_lang: String,
        model_override: Option<String>,
        max_length: NonZeroU32,
    ) -> Result<Self> {
        if source_text.trim().is_empty() {
            return Err(Error::config("Input is empty"));
        }

        Ok(Self {
            source_text,
            source_lang,
            target_lang,
            model_override,
            max_length,
        })
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn model_override(&self) -> Option<&str> {
        self.model_override.as_deref()
    }

    pub const fn max_length(&self) -> NonZeroU32 {
        self.max_length
    }

    /// The model to load: the explicit override if any, else the pair's default.
    pub fn model_id(&self) -> String {
        self.model_override.clone().unwrap_or_else(|| {
            model_id_for_pair(&self.source_lang, &self.target_lang)
        })
    }
}

/// Original text alongside its translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub original_text: String,
    pub translated_text: String,
}
