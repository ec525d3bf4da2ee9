//! Translation loading.
//!
//! [`load_translations`] is the only entry point the page uses: it never
//! fails, an unavailable or broken resource simply yields an empty map.

mod http;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use thiserror::Error;

pub use http::HttpSource;

use crate::config::Settings;
use crate::input::{
    TranslationError,
    TranslationMap,
};
use crate::language::LanguageCode;

/// Why a locale resource could not be turned into a [`TranslationMap`].
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("'{url}' answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("Cannot build a URL from '{path}': {message}")]
    InvalidUrl { path: String, message: String },

    #[error(transparent)]
    Parse(#[from] TranslationError),

    #[error("No translation source: {0}")]
    Unavailable(String),
}

/// Where translation tables come from.
///
/// Futures are not `Send`: in the browser everything runs on one thread.
pub trait TranslationSource {
    fn fetch<'a>(
        &'a self,
        language: &'a LanguageCode,
    ) -> LocalBoxFuture<'a, Result<TranslationMap, LoadError>>;
}

/// Source for a page that has nowhere to fetch from; every fetch fails with
/// the stored reason.
#[derive(Debug, Clone)]
pub struct UnavailableSource {
    reason: String,
}

impl UnavailableSource {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl TranslationSource for UnavailableSource {
    fn fetch<'a>(
        &'a self,
        _language: &'a LanguageCode,
    ) -> LocalBoxFuture<'a, Result<TranslationMap, LoadError>> {
        let error = LoadError::Unavailable(self.reason.clone());
        async move { Err(error) }.boxed_local()
    }
}

/// HTTP source for a page served from `origin`.
///
/// A page without a usable origin still starts: its fetches fail and the
/// page keeps its own text.
#[must_use]
pub fn source_for_origin(origin: &str, settings: &Settings) -> Box<dyn TranslationSource> {
    match HttpSource::for_origin(origin, settings) {
        Ok(source) => Box::new(source),
        Err(e) => {
            tracing::debug!(%origin, error = %e, "No translation source for page origin");
            Box::new(UnavailableSource::new(e.to_string()))
        }
    }
}

/// Fetch the table for `language`, or an empty one on any failure.
pub async fn load_translations<S>(source: &S, language: &LanguageCode) -> TranslationMap
where
    S: TranslationSource + ?Sized,
{
    match source.fetch(language).await {
        Ok(translations) => {
            tracing::debug!(%language, keys = translations.len(), "Translations loaded");
            translations
        }
        Err(e) => {
            tracing::debug!(%language, error = %e, "Translations unavailable, keeping page text");
            TranslationMap::new()
        }
    }
}
