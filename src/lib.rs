//! page-i18n
//!
//! ページ上の `data-i18n` 要素をロケールファイルの翻訳で書き換えるクライアント側ローカライズ

pub mod config;
pub mod input;
pub mod language;
pub mod loader;
pub mod logging;
pub mod page;
pub mod startup;
pub mod translator;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::Settings;
pub use input::TranslationMap;
pub use language::LanguageCode;
pub use loader::{
    HttpSource,
    TranslationSource,
    UnavailableSource,
    load_translations,
    source_for_origin,
};
pub use startup::{
    StartupError,
    start,
};
pub use translator::translate_page;
