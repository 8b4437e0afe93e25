//! Locale management and utilities

use palbot_common::{PalbotError, Result};
use unic_langid::LanguageIdentifier;

/// Supported reply locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (default)
    #[default]
    English,
    /// Dutch
    Dutch,
}

impl Locale {
    /// Get the language code for this locale
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en-US",
            Self::Dutch => "nl-NL",
        }
    }

    /// Parse a locale from a language code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" | "en-US" => Some(Self::English),
            "nl" | "nl-NL" => Some(Self::Dutch),
            _ => None,
        }
    }

    /// Parse a locale, failing with a localization error when unsupported
    pub fn parse(code: &str) -> Result<Self> {
        Self::from_code(code).ok_or_else(|| {
            PalbotError::localization(
                format!("unsupported language '{code}'"),
                Some(code.to_string()),
            )
        })
    }

    /// Convert to Fluent LanguageIdentifier
    pub fn to_language_identifier(self) -> Result<LanguageIdentifier> {
        self.code().parse().map_err(|_| {
            PalbotError::localization("invalid language identifier", Some(self.code().to_string()))
        })
    }

    /// Get all supported locales
    pub fn all() -> [Self; 2] {
        [Self::English, Self::Dutch]
    }

    /// Embedded Fluent source for this locale
    pub(crate) const fn source(self) -> &'static str {
        match self {
            Self::English => include_str!("../locales/en-US/palbot.ftl"),
            Self::Dutch => include_str!("../locales/nl-NL/palbot.ftl"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_codes() {
        for locale in Locale::all() {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
    }

    #[test]
    fn test_short_codes() {
        assert_eq!(Locale::from_code("nl"), Some(Locale::Dutch));
        assert_eq!(Locale::from_code("en"), Some(Locale::English));
        assert_eq!(Locale::from_code("de-DE"), None);
    }

    #[test]
    fn test_parse_unsupported() {
        assert!(Locale::parse("xx").is_err());
    }

    #[test]
    fn test_language_identifier() {
        let id = Locale::Dutch.to_language_identifier().unwrap();
        assert_eq!(id.language.as_str(), "nl");
    }
}
