//! Supported locales and tag parsing.
//!
//! The page ships with exactly two locales, `en-US` and `pt-BR`, and boots in
//! Portuguese. Everything that touches the embedded catalogs goes through the
//! [`Locale`] enum; only the CLI's directory-scan path deals in free-form
//! locale tags.

use std::fmt;
use std::str::FromStr;

/// A language variant the page can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Locale {
    /// American English (`en-US`).
    EnUs,
    /// Brazilian Portuguese (`pt-BR`).
    PtBr,
}

impl Locale {
    /// The locale the page starts in.
    pub const DEFAULT: Locale = Locale::PtBr;

    /// All supported locales, in tag order.
    pub fn all() -> [Locale; 2] {
        [Locale::EnUs, Locale::PtBr]
    }

    /// The BCP 47 tag for this locale.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::PtBr => "pt-BR",
        }
    }

    /// Parse a locale tag (case-insensitive).
    ///
    /// Returns [`UnsupportedLocale`] for anything that is not a supported
    /// tag, leaving it to the caller to decide whether that is fatal.
    pub fn from_tag(tag: &str) -> Result<Locale, UnsupportedLocale> {
        Locale::all()
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| UnsupportedLocale(tag.to_string()))
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_tag(s)
    }
}

/// A locale tag that is not one of the supported locales.
///
/// Returned by [`Locale::from_tag`] and by
/// [`Translator::set_locale_tag`](crate::translator::Translator::set_locale_tag),
/// which rejects the switch and keeps the active locale unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedLocale(pub String);

impl fmt::Display for UnsupportedLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported locale '{}' (supported: en-US, pt-BR)",
            self.0
        )
    }
}

impl std::error::Error for UnsupportedLocale {}
