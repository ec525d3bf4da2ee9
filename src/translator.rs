//! Applies a translation table to the page.

use crate::config::Settings;
use crate::input::TranslationMap;
use crate::page::{
    Page,
    PageElement,
};

/// What a pass over the page changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationReport {
    /// Elements whose key was found.
    pub applied: usize,
    /// Keys with no translation; those elements kept their text.
    pub missing: Vec<String>,
    /// Whether the title element received the title key.
    pub title_applied: bool,
}

/// Rewrite every keyed element found in `translations`, then the title.
///
/// The title step is independent of the keyed pass and runs after it, so it
/// wins when the title element also carries a key attribute.
pub fn translate_page<P: Page>(
    page: &P,
    translations: &TranslationMap,
    settings: &Settings,
) -> TranslationReport {
    let mut report = TranslationReport::default();

    for element in page.elements_with_attribute(&settings.key_attribute) {
        let Some(key) = element.attribute(&settings.key_attribute) else {
            continue;
        };
        match translations.get(&key) {
            Some(text) => {
                element.set_text_content(text);
                report.applied += 1;
            }
            None => report.missing.push(key),
        }
    }

    if let Some(title) = page.element_by_id(&settings.title.element_id)
        && let Some(text) = translations.get(&settings.title.key)
    {
        title.set_text_content(text);
        report.title_applied = true;
    }

    tracing::debug!(
        applied = report.applied,
        missing = report.missing.len(),
        title = report.title_applied,
        "Page translated"
    );
    report
}
