//! Translation table decoded from a locale resource.

use std::collections::HashMap;
use std::collections::hash_map;

use serde_json::{
    Number,
    Value,
};
use thiserror::Error;

/// Errors decoding a locale resource body.
#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("Locale resource is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Locale resource must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Mapping from translation key to display string.
///
/// Built once per page load and dropped after it has been applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationMap {
    entries: HashMap<String, String>,
}

impl TranslationMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a locale resource body.
    ///
    /// Nested objects are flattened with `separator`. Values that would read as
    /// "no translation" on the page (empty strings, `false`, `null`, zero) are
    /// left out so that lookups fall back to the element's original text.
    /// Other numbers keep the text a page script would show (`1.0` is `"1"`).
    ///
    /// # Examples
    /// ```
    /// use page_i18n::input::translation::TranslationMap;
    ///
    /// let map = TranslationMap::from_json_str(
    ///     r#"{"welcome": "Привет", "nav": {"home": "Главная"}, "empty": ""}"#,
    ///     ".",
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(map.get("welcome"), Some("Привет"));
    /// assert_eq!(map.get("nav.home"), Some("Главная"));
    /// assert_eq!(map.get("empty"), None);
    /// ```
    pub fn from_json_str(text: &str, separator: &str) -> Result<Self, TranslationError> {
        let json: Value = serde_json::from_str(text)?;
        if !json.is_object() {
            return Err(TranslationError::NotAnObject(json_kind(&json)));
        }

        let mut entries = HashMap::new();
        flatten_json_value(&json, separator, None, &mut entries);
        Ok(Self { entries })
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

impl IntoIterator for TranslationMap {
    type Item = (String, String);
    type IntoIter = hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

const fn json_kind(json: &Value) -> &'static str {
    match json {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn flatten_json_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut HashMap<String, String>,
) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::Array(arr) => {
            for (index, value) in arr.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::String(s) if s.is_empty() => {}
        Value::String(s) => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), s.clone());
            }
        }
        Value::Null | Value::Bool(false) => {}
        Value::Bool(true) => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), "true".to_string());
            }
        }
        Value::Number(n) => {
            if let Some(key) = prefix
                && let Some(text) = json_number_text(n)
            {
                result.insert(key.to_string(), text);
            }
        }
    }
}

/// Text a page shows for a JSON number, or `None` for zero.
fn json_number_text(number: &Number) -> Option<String> {
    if let Some(i) = number.as_i64() {
        return (i != 0).then(|| i.to_string());
    }
    if let Some(u) = number.as_u64() {
        return Some(u.to_string());
    }
    js_number_text(number.as_f64()?)
}

/// Renders `value` the way a page script stringifies a number, or `None` when
/// the number is falsy (`0`, `-0`, `NaN`).
///
/// Integral values print without a fractional part (`1.0` is `"1"`).
#[must_use]
pub fn js_number_text(value: f64) -> Option<String> {
    if value == 0.0 || value.is_nan() {
        return None;
    }
    if value.is_infinite() {
        return Some(if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string());
    }
    if value.fract() == 0.0 && value.abs() < 1e21 {
        return Some(format!("{value:.0}"));
    }
    Some(value.to_string())
}
