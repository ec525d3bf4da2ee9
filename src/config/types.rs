use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "title.elementId")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Used when the page global is absent or empty.
    pub default_language: String,
    /// Name of the `window` property holding the active language code.
    pub language_global: String,

    /// Prefix of the locale resources; `{localesPath}/{lang}.json` is fetched.
    pub locales_path: String,
    /// Prefix of the server route that persists a language choice.
    pub set_language_path: String,

    /// Attribute whose value names the translation key of an element.
    pub key_attribute: String,
    /// Joins nested keys when a locale file is not flat.
    pub key_separator: String,

    /// Id of the `<select>` that switches language.
    pub selector_id: String,
    pub title: TitleConfig,

    /// `EnvFilter` directive for the log subscriber.
    pub log_level: String,
}

/// Element that also receives a fixed key, independently of its key attribute.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TitleConfig {
    pub element_id: String,
    pub key: String,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self { element_id: "title".to_string(), key: "welcome".to_string() }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_language: "ru".to_string(),
            language_global: "APP_LANG".to_string(),
            locales_path: "/static/locales".to_string(),
            set_language_path: "/set_language".to_string(),
            key_attribute: "data-i18n".to_string(),
            key_separator: ".".to_string(),
            selector_id: "lang-select".to_string(),
            title: TitleConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// # Errors
    /// - Required field is empty
    /// - Route prefix is not absolute
    /// - Attribute name contains whitespace
    /// - Invalid log filter
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let required = [
            ("defaultLanguage", &self.default_language),
            ("languageGlobal", &self.language_global),
            ("keyAttribute", &self.key_attribute),
            ("keySeparator", &self.key_separator),
            ("selectorId", &self.selector_id),
            ("title.elementId", &self.title.element_id),
            ("title.key", &self.title.key),
        ];
        for (field, value) in required {
            if value.is_empty() {
                errors.push(ValidationError::new(field, "The value cannot be empty"));
            }
        }

        for (field, path) in
            [("localesPath", &self.locales_path), ("setLanguagePath", &self.set_language_path)]
        {
            if !path.starts_with('/') {
                errors.push(ValidationError::new(
                    field,
                    format!("The path must start with '/'. Got: \"{path}\""),
                ));
            }
        }

        if self.key_attribute.chars().any(char::is_whitespace) {
            errors.push(ValidationError::new(
                "keyAttribute",
                format!("Attribute names cannot contain whitespace: \"{}\"", self.key_attribute),
            ));
        }

        if let Err(e) = EnvFilter::try_new(&self.log_level) {
            errors.push(ValidationError::new(
                "logLevel",
                format!("Invalid log filter '{}': {e}", self.log_level),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
