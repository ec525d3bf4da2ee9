//! Page startup: resolve the language, translate, wire the selector.

use thiserror::Error;

use crate::config::Settings;
use crate::language::{
    LanguageCode,
    resolve_language,
    set_language_path,
};
use crate::loader::{
    TranslationSource,
    load_translations,
};
use crate::page::{
    LanguageSelect,
    Navigator,
    Page,
    PageError,
};
use crate::translator::{
    TranslationReport,
    translate_page,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StartupError {
    #[error("Language selector '#{id}' not found on the page")]
    SelectorMissing { id: String },

    #[error(transparent)]
    Page(#[from] PageError),
}

/// Page state once startup has finished and the selector listener is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Started {
    pub language: LanguageCode,
    pub report: TranslationReport,
}

/// Sends the browser to the server route that stores a language choice.
#[derive(Debug, Clone)]
pub struct LanguageSwitcher<N> {
    navigator: N,
    set_language_path: String,
}

impl<N: Navigator> LanguageSwitcher<N> {
    pub fn new(navigator: N, settings: &Settings) -> Self {
        Self { navigator, set_language_path: settings.set_language_path.clone() }
    }

    #[must_use]
    pub fn url_for(&self, language: &LanguageCode) -> String {
        set_language_path(&self.set_language_path, language)
    }

    /// Full navigation; the current page is discarded.
    pub fn switch_to(&self, language: &LanguageCode) -> Result<(), PageError> {
        let url = self.url_for(language);
        tracing::debug!(%language, %url, "Switching language");
        self.navigator.navigate(&url)
    }
}

/// Runs once when the document has been parsed.
///
/// Translation is applied before the selector is looked up, so a page without
/// a selector still ends up translated even though startup fails.
pub async fn start<P, S>(page: &P, source: &S, settings: &Settings) -> Result<Started, StartupError>
where
    P: Page,
    S: TranslationSource + ?Sized,
{
    let language =
        resolve_language(page.global_string(&settings.language_global), &settings.default_language);
    tracing::debug!(%language, "Starting page localisation");

    let translations = load_translations(source, &language).await;
    let report = translate_page(page, &translations, settings);
    drop(translations);

    let select = page
        .select_by_id(&settings.selector_id)
        .ok_or_else(|| StartupError::SelectorMissing { id: settings.selector_id.clone() })?;
    select.set_value(language.as_str());

    let switcher = LanguageSwitcher::new(page.navigator(), settings);
    page.on_select_change(
        &select,
        Box::new(move |value: &str| {
            if let Err(e) = switcher.switch_to(&LanguageCode::from(value)) {
                tracing::warn!("{e}");
            }
        }),
    )?;

    tracing::info!(%language, applied = report.applied, "Page localised");
    Ok(Started { language, report })
}
