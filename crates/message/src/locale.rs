//! Locale identifiers and the tier-fallback chain
//!
//! A [`Locale`] is a normalized language/region pair used only as a lookup
//! key. Resolution walks an explicit ordered chain of [`Tier`]s, most
//! specific first: `en_US -> en -> base`. The chain is a visible contract,
//! not hidden resource-bundle machinery.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ============================================================================
// LOCALE
// ============================================================================

/// A language/region pair identifying a message locale.
///
/// The language is stored lowercase and the region uppercase, so `en-us`,
/// `EN_US`, and `en_US` all name the same locale.
///
/// # Examples
///
/// ```rust,ignore
/// use lavka_message::Locale;
///
/// let locale: Locale = "en-US".parse()?;
/// assert_eq!(locale.to_string(), "en_US");
/// assert_eq!(locale.language(), "en");
/// assert_eq!(locale.region(), Some("US"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    /// Creates a language-only locale.
    #[must_use]
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            region: None,
        }
    }

    /// Creates a locale with a region.
    #[must_use]
    pub fn with_region(language: &str, region: &str) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            region: Some(region.to_ascii_uppercase()),
        }
    }

    /// The lowercase language subtag, e.g. `"en"`.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The uppercase region subtag, if present, e.g. `"US"`.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// English, no region.
    #[must_use]
    pub fn english() -> Self {
        Self::new("en")
    }

    /// US English.
    #[must_use]
    pub fn us_english() -> Self {
        Self::with_region("en", "US")
    }

    /// Korean, no region.
    #[must_use]
    pub fn korean() -> Self {
        Self::new("ko")
    }

    /// Chinese as spoken in China.
    #[must_use]
    pub fn china() -> Self {
        Self::with_region("zh", "CN")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}_{}", self.language, region),
            None => write!(f, "{}", self.language),
        }
    }
}

/// Error parsing a locale string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid locale `{input}`: expected `lang` or `lang_REGION`")]
pub struct ParseLocaleError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    /// Accepts `en`, `en_US`, and `en-US` forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let reject = || ParseLocaleError {
            input: s.to_string(),
        };

        let mut parts = s.splitn(2, ['_', '-']);
        let language = parts.next().filter(|p| !p.is_empty()).ok_or_else(reject)?;
        if !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(reject());
        }

        match parts.next() {
            None => Ok(Self::new(language)),
            Some(region) if !region.is_empty() && region.chars().all(|c| c.is_ascii_alphabetic()) => {
                Ok(Self::with_region(language, region))
            }
            Some(_) => Err(reject()),
        }
    }
}

// ============================================================================
// TIER
// ============================================================================

/// One resolution level of the fallback chain.
///
/// A requested locale expands to an ordered chain via [`Tier::chain`]:
/// region entry first, then the language entry, then the base table. An
/// absent locale means "base only".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tier {
    /// The base table, consulted last; codes defined here always resolve.
    Base,
    /// A language-only entry, e.g. `en`.
    Language(String),
    /// A language+region entry, e.g. `en_US`; most specific.
    Region(String, String),
}

impl Tier {
    /// A language tier, normalized lowercase.
    #[must_use]
    pub fn language(language: &str) -> Self {
        Self::Language(language.to_ascii_lowercase())
    }

    /// A region tier, normalized like [`Locale`].
    #[must_use]
    pub fn region(language: &str, region: &str) -> Self {
        Self::Region(language.to_ascii_lowercase(), region.to_ascii_uppercase())
    }

    /// Expands a requested locale into the ordered fallback chain.
    ///
    /// `en_US` yields `[en_US, en, base]`; `en` yields `[en, base]`; no
    /// locale yields `[base]`.
    #[must_use]
    pub fn chain(locale: Option<&Locale>) -> Vec<Self> {
        match locale {
            None => vec![Self::Base],
            Some(locale) => {
                let language = locale.language().to_string();
                match locale.region() {
                    Some(region) => vec![
                        Self::Region(language.clone(), region.to_string()),
                        Self::Language(language),
                        Self::Base,
                    ],
                    None => vec![Self::Language(language), Self::Base],
                }
            }
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::Language(language) => write!(f, "{language}"),
            Self::Region(language, region) => write!(f, "{language}_{region}"),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
