//! Language codes and their display names.

use crate::error::{Error, Result};
use crate::ui::Style;

/// Supported language codes (ISO 639-1) and their English names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("az", "Azerbaijani"),
    ("be", "Belarusian"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("eu", "Basque"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("ga", "Irish"),
    ("gl", "Galician"),
    ("gu", "Gujarati"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("hy", "Armenian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ka", "Georgian"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("la", "Latin"),
    ("lo", "Lao"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mk", "Macedonian"),
    ("ml", "Malayalam"),
    ("mn", "Mongolian"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("mt", "Maltese"),
    ("my", "Myanmar (Burmese)"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pa", "Punjabi"),
    ("pl", "Polish"),
    ("ps", "Pashto"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tl", "Tagalog"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese"),
];

/// Returns the English name for a supported language code.
pub fn language_name(code: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported language codes (ISO 639-1)"));
    for (code, name) in SUPPORTED_LANGUAGES {
        println!("  {:5} {}", Style::code(code), Style::secondary(name));
    }
}

/// Validates the shape of a language code.
///
/// Codes outside [`SUPPORTED_LANGUAGES`] are accepted (OPUS-MT also
/// publishes group codes such as `mul` or `ROMANCE`); whether a model exists
/// for the pair is decided when it is loaded. Only codes that cannot appear
/// in a model identifier are rejected. `role` names the option being checked
/// ("source" or "target") so the message points at the right flag.
pub fn validate_language(lang: &str, role: &str) -> Result<()> {
    let well_formed = !lang.is_empty()
        && lang
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');
    if well_formed {
        Ok(())
    } else {
        Err(Error::config(format!(
            "Invalid {role} language code: '{lang}'\n\n\
             Language codes contain only letters, digits and '-' (e.g. de, en, mul).\n\
             Run 'mtl languages' to see codes with known names."
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_language_valid() {
        assert!(validate_language("de", "source").is_ok());
        assert!(validate_language("en", "target").is_ok());
        assert!(validate_language("zh", "target").is_ok());
        assert!(validate_language("mul", "source").is_ok());
        assert!(validate_language("ROMANCE", "target").is_ok());
        assert!(validate_language("zh-TW", "target").is_ok());
    }

    #[test]
    fn test_validate_language_invalid() {
        assert!(validate_language("", "source").is_err());
        assert!(validate_language("de/en", "source").is_err());
        assert!(validate_language("en us", "target").is_err());
        assert!(validate_language("invalid_lang", "source").is_err());
    }

    #[test]
    fn test_validate_language_names_role() {
        let err = validate_language("x/y", "target").unwrap_err();
        assert!(err.to_string().contains("Invalid target language code: 'x/y'"));
        assert_eq!(err.kind(), "ConfigurationError");
    }

    #[test]
    fn test_language_name() {
        assert_eq!(language_name("de"), Some("German"));
        assert_eq!(language_name("en"), Some("English"));
        assert_eq!(language_name("xx"), None);
    }
}
