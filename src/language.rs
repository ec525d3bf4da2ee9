//! Language codes and the routes built from them.

use std::fmt;

/// Code selecting both the locale resource and the server-side locale.
///
/// Not validated: whatever the page or the select control provides is passed
/// through to the server, which decides what it recognises.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageCode(String);

impl LanguageCode {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Picks the active language: the page global when it holds a non-empty
/// string, the default otherwise.
#[must_use]
pub fn resolve_language(global: Option<String>, default: &str) -> LanguageCode {
    global.filter(|code| !code.is_empty()).map_or_else(|| LanguageCode::new(default), LanguageCode)
}

/// `{locales_path}/{lang}.json`
#[must_use]
pub fn locale_path(locales_path: &str, language: &LanguageCode) -> String {
    format!("{}/{language}.json", locales_path.trim_end_matches('/'))
}

/// `{set_language_path}/{lang}`, with the code embedded as-is.
#[must_use]
pub fn set_language_path(set_language_path: &str, language: &LanguageCode) -> String {
    format!("{}/{language}", set_language_path.trim_end_matches('/'))
}
