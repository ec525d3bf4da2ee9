use futures::FutureExt;
use futures::future::LocalBoxFuture;
use reqwest::{
    Client,
    Url,
};

use super::{
    LoadError,
    TranslationSource,
};
use crate::config::Settings;
use crate::input::TranslationMap;
use crate::language::{
    LanguageCode,
    locale_path,
};

/// Fetches `{locales_path}/{lang}.json` relative to `base_url` with one GET.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: Url,
    locales_path: String,
    key_separator: String,
}

impl HttpSource {
    #[must_use]
    pub fn new(base_url: Url, settings: &Settings) -> Self {
        Self::with_client(Client::new(), base_url, settings)
    }

    /// Source rooted at a page origin such as `https://example.com`.
    ///
    /// Opaque origins (`"null"` for `file://` or sandboxed pages) have no URL
    /// to fetch from and are rejected.
    pub fn for_origin(origin: &str, settings: &Settings) -> Result<Self, LoadError> {
        let base_url = Url::parse(origin).map_err(|e| LoadError::InvalidUrl {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::new(base_url, settings))
    }

    #[must_use]
    pub fn with_client(client: Client, base_url: Url, settings: &Settings) -> Self {
        Self {
            client,
            base_url,
            locales_path: settings.locales_path.clone(),
            key_separator: settings.key_separator.clone(),
        }
    }

    pub fn locale_url(&self, language: &LanguageCode) -> Result<Url, LoadError> {
        let path = locale_path(&self.locales_path, language);
        self.base_url
            .join(&path)
            .map_err(|e| LoadError::InvalidUrl { path, message: e.to_string() })
    }

    async fn fetch_table(&self, language: &LanguageCode) -> Result<TranslationMap, LoadError> {
        let url = self.locale_url(language)?;
        tracing::debug!(%url, "Fetching translations");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status { url: url.to_string(), status: status.as_u16() });
        }

        let body = response.text().await?;
        Ok(TranslationMap::from_json_str(&body, &self.key_separator)?)
    }
}

impl TranslationSource for HttpSource {
    fn fetch<'a>(
        &'a self,
        language: &'a LanguageCode,
    ) -> LocalBoxFuture<'a, Result<TranslationMap, LoadError>> {
        self.fetch_table(language).boxed_local()
    }
}
