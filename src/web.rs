//! Browser binding over `web-sys`.
// wasm-bindgen expands to unsafe FFI glue.
#![allow(unsafe_code)]

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document,
    Element,
    HtmlSelectElement,
    Location,
    Window,
};

use crate::config::{
    self,
    Settings,
};
use crate::input::translation::js_number_text;
use crate::loader::{
    self,
    TranslationSource,
};
use crate::page::{
    ChangeListener,
    LanguageSelect,
    Navigator,
    Page,
    PageElement,
    PageError,
};
use crate::{
    logging,
    startup,
};

/// Page global that may hold a settings object.
pub const SETTINGS_GLOBAL: &str = "APP_I18N_SETTINGS";

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[derive(Debug, Clone)]
pub struct WebElement(Element);

impl PageElement for WebElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn text_content(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text_content(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

#[derive(Debug, Clone)]
pub struct WebSelect(HtmlSelectElement);

impl LanguageSelect for WebSelect {
    fn value(&self) -> String {
        self.0.value()
    }

    fn set_value(&self, value: &str) {
        self.0.set_value(value);
    }
}

#[derive(Debug, Clone)]
pub struct WebNavigator(Location);

impl Navigator for WebNavigator {
    fn navigate(&self, url: &str) -> Result<(), PageError> {
        self.0
            .set_href(url)
            .map_err(|e| PageError::Navigation { url: url.to_string(), message: js_message(&e) })
    }
}

#[derive(Debug, Clone)]
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    #[must_use]
    pub const fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }
}

impl Page for WebPage {
    type Element = WebElement;
    type Select = WebSelect;
    type Navigator = WebNavigator;

    fn elements_with_attribute(&self, name: &str) -> Vec<WebElement> {
        let Ok(nodes) = self.document.query_selector_all(&format!("[{name}]")) else {
            tracing::warn!("Invalid attribute selector: [{name}]");
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(WebElement)
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document.get_element_by_id(id).map(WebElement)
    }

    fn select_by_id(&self, id: &str) -> Option<WebSelect> {
        self.document.get_element_by_id(id)?.dyn_into::<HtmlSelectElement>().ok().map(WebSelect)
    }

    /// Strings as-is; numbers and `true` as the text a script would build
    /// from them. Falsy values read as unset.
    fn global_string(&self, name: &str) -> Option<String> {
        let value = js_sys::Reflect::get(&self.window, &JsValue::from_str(name)).ok()?;
        if let Some(text) = value.as_string() {
            return Some(text);
        }
        if let Some(number) = value.as_f64() {
            return js_number_text(number);
        }
        (value.as_bool() == Some(true)).then(|| "true".to_string())
    }

    fn navigator(&self) -> WebNavigator {
        WebNavigator(self.window.location())
    }

    fn on_select_change(
        &self,
        select: &WebSelect,
        listener: ChangeListener,
    ) -> Result<(), PageError> {
        let target = select.0.clone();
        let callback = Closure::<dyn Fn()>::new(move || listener(&target.value()));
        select
            .0
            .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
            .map_err(|e| PageError::Listener(js_message(&e)))?;
        // Lives as long as the page.
        callback.forget();
        Ok(())
    }
}

fn settings_from_global(window: &Window) -> Result<Settings, JsValue> {
    let value = js_sys::Reflect::get(window, &JsValue::from_str(SETTINGS_GLOBAL))?;
    if value.is_undefined() || value.is_null() {
        return Ok(Settings::default());
    }
    let json = js_sys::JSON::stringify(&value)?;
    config::load_from_str(&String::from(json)).map_err(|e| JsValue::from_str(&e.to_string()))
}

async fn run(window: Window, document: Document, settings: Settings) {
    let source: Box<dyn TranslationSource> = match window.location().origin() {
        Ok(origin) => loader::source_for_origin(&origin, &settings),
        Err(e) => Box::new(loader::UnavailableSource::new(js_message(&e))),
    };

    let page = WebPage::new(window, document);
    if let Err(e) = startup::start(&page, &*source, &settings).await {
        tracing::error!("{e}");
        wasm_bindgen::throw_str(&e.to_string());
    }
}

/// Module entry point: starts localisation once the document is parsed.
#[wasm_bindgen(start)]
pub fn boot() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("window has no document"))?;
    let settings = settings_from_global(&window)?;
    if let Err(e) = logging::init(&settings) {
        web_sys::console::warn_1(&e.to_string().into());
    }

    // The module usually finishes loading after DOMContentLoaded has fired.
    if document.ready_state() != "loading" {
        wasm_bindgen_futures::spawn_local(run(window, document, settings));
        return Ok(());
    }

    let target = document.clone();
    let on_ready = Closure::<dyn FnMut()>::once(move || {
        wasm_bindgen_futures::spawn_local(run(window, document, settings));
    });
    target.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();
    Ok(())
}
