//! Startup scenarios end to end: HTTP locale resource to in-memory page.

#![allow(clippy::unwrap_used)]

mod common;

use page_i18n::page::memory::{
    MemoryElement,
    MemoryPage,
    MemorySelect,
};
use page_i18n::page::{
    LanguageSelect,
    PageElement,
};
use page_i18n::{
    Settings,
    StartupError,
    source_for_origin,
    start,
};
use pretty_assertions::assert_eq;

fn login_page(select: &MemorySelect) -> MemoryPage {
    MemoryPage::new()
        .with_element(MemoryElement::new("Welcome").with_id("title"))
        .with_element(MemoryElement::new("Email").with_attribute("data-i18n", "email"))
        .with_element(MemoryElement::new("Sign in").with_attribute("data-i18n", "sign_in"))
        .with_select("lang-select", select.clone())
}

fn texts(page: &MemoryPage) -> Vec<String> {
    page.elements().iter().map(PageElement::text_content).collect()
}

#[tokio::test]
async fn test_default_language_translates_title() {
    let (base_url, server) = common::serve_once("200 OK", r#"{"welcome":"Привет"}"#).await;
    let settings = Settings::default();
    let source = common::http_source(base_url, &settings);
    let select = MemorySelect::new();
    let page = login_page(&select);

    let started = start(&page, &source, &settings).await.unwrap();

    assert_eq!(server.await.unwrap(), "GET /static/locales/ru.json HTTP/1.1");
    assert_eq!(started.language.as_str(), "ru");
    assert_eq!(texts(&page), vec!["Привет", "Email", "Sign in"]);
    assert_eq!(select.value(), "ru");
}

#[tokio::test]
async fn test_page_global_selects_locale() {
    let (base_url, server) =
        common::serve_once("200 OK", r#"{"email":"Електронна пошта","sign_in":"Увійти"}"#).await;
    let settings = Settings::default();
    let source = common::http_source(base_url, &settings);
    let select = MemorySelect::with_options(["uk", "en"]);
    let page = login_page(&select).with_global("APP_LANG", "uk");

    start(&page, &source, &settings).await.unwrap();

    assert_eq!(server.await.unwrap(), "GET /static/locales/uk.json HTTP/1.1");
    assert_eq!(texts(&page), vec!["Welcome", "Електронна пошта", "Увійти"]);
    assert_eq!(select.value(), "uk");
}

#[tokio::test]
async fn test_missing_locale_leaves_page_untouched() {
    let (base_url, server) = common::serve_once("404 Not Found", r#"{"detail":"Not Found"}"#).await;
    let settings = Settings::default();
    let source = common::http_source(base_url, &settings);
    let select = MemorySelect::new();
    let page = login_page(&select);

    let started = start(&page, &source, &settings).await.unwrap();

    server.await.unwrap();
    assert_eq!(texts(&page), vec!["Welcome", "Email", "Sign in"]);
    assert_eq!(select.value(), "ru");
    assert_eq!(started.report.applied, 0);
    assert_eq!(started.report.missing, vec!["email", "sign_in"]);
}

#[tokio::test]
async fn test_selecting_language_navigates() {
    let (base_url, server) = common::serve_once("200 OK", "{}").await;
    let settings = Settings::default();
    let source = common::http_source(base_url, &settings);
    let select = MemorySelect::new();
    let page = login_page(&select);
    start(&page, &source, &settings).await.unwrap();
    server.await.unwrap();

    select.choose("en");

    assert_eq!(page.navigations(), vec!["/set_language/en"]);
}

#[tokio::test]
async fn test_page_without_selector_fails_after_translating() {
    let (base_url, server) = common::serve_once("200 OK", r#"{"welcome":"Привет"}"#).await;
    let settings = Settings::default();
    let source = common::http_source(base_url, &settings);
    let page = MemoryPage::new().with_element(MemoryElement::new("Welcome").with_id("title"));

    let result = start(&page, &source, &settings).await;

    server.await.unwrap();
    assert_eq!(result.unwrap_err(), StartupError::SelectorMissing { id: "lang-select".to_string() });
    assert_eq!(texts(&page), vec!["Привет"]);
}

#[tokio::test]
async fn test_opaque_origin_keeps_page_text_and_wires_selector() {
    let settings = Settings::default();
    let source = source_for_origin("null", &settings);
    let select = MemorySelect::new();
    let page = login_page(&select).with_global("APP_LANG", "en");

    let started = start(&page, &*source, &settings).await.unwrap();

    assert_eq!(started.report.applied, 0);
    assert_eq!(texts(&page), vec!["Welcome", "Email", "Sign in"]);
    assert_eq!(select.value(), "en");
    assert_eq!(select.listener_count(), 1);

    select.choose("ru");
    assert_eq!(page.navigations(), vec!["/set_language/ru"]);
}
