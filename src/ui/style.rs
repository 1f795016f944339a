//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Every helper
//! returns plain text when colors are disabled.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    fn paint<T: Display>(text: T, colored: impl FnOnce(&T) -> String) -> String {
        if output::is_no_color() {
            text.to_string()
        } else {
            colored(&text)
        }
    }

    /// Style for section headers (e.g., "Supported language codes")
    pub fn header<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.bold().to_string())
    }

    /// Style for secondary/supplementary info (e.g., language names)
    pub fn secondary<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.dimmed().to_string())
    }

    /// Style for error labels
    pub fn error<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.red().bold().to_string())
    }

    /// Style for language codes
    pub fn code<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.yellow().to_string())
    }

    /// Style for prompts and hints
    pub fn hint<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.dimmed().italic().to_string())
    }
}
