//! Content locale
//!
//! Most content resources on the platform are partitioned by language;
//! `Locale` identifies one partition and doubles as the path/query segment
//! used when talking to the API.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A language partition of the platform's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Ukrainian content (default partition of the console)
    #[default]
    Ua,
    /// English content
    En,
}

impl Locale {
    /// All locales the console can switch between.
    pub const ALL: [Locale; 2] = [Locale::Ua, Locale::En];

    /// Lowercase wire form used in API paths and query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ua => "ua",
            Locale::En => "en",
        }
    }

    /// Uppercase label for UI headings ("UA" / "EN").
    pub fn label(&self) -> &'static str {
        match self {
            Locale::Ua => "UA",
            Locale::En => "EN",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown locale string.
#[derive(Debug, Error)]
#[error("unknown locale: {0}")]
pub struct ParseLocaleError(String);

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ua" => Ok(Locale::Ua),
            "en" => Ok(Locale::En),
            other => Err(ParseLocaleError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("UA".parse::<Locale>().unwrap(), Locale::Ua);
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn wire_form_is_lowercase() {
        assert_eq!(serde_json::to_string(&Locale::En).unwrap(), "\"en\"");
        let back: Locale = serde_json::from_str("\"ua\"").unwrap();
        assert_eq!(back, Locale::Ua);
    }
}
