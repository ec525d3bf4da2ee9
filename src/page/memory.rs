//! In-memory page used by tests and headless callers.

use std::cell::RefCell;
use std::collections::{
    BTreeMap,
    HashMap,
};
use std::fmt;
use std::rc::Rc;

use super::{
    ChangeListener,
    LanguageSelect,
    Navigator,
    Page,
    PageElement,
    PageError,
};

#[derive(Debug, Default)]
struct ElementData {
    id: Option<String>,
    attributes: BTreeMap<String, String>,
    text: String,
}

/// Shared handle to an element; clones see the same text.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement(Rc<RefCell<ElementData>>);

impl MemoryElement {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(Rc::new(RefCell::new(ElementData { text: text.into(), ..ElementData::default() })))
    }

    #[must_use]
    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.0.borrow_mut().id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_attribute(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.borrow_mut().attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> Option<String> {
        self.0.borrow().id.clone()
    }
}

impl PageElement for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn text_content(&self) -> String {
        self.0.borrow().text.clone()
    }

    fn set_text_content(&self, text: &str) {
        text.clone_into(&mut self.0.borrow_mut().text);
    }
}

#[derive(Default)]
struct SelectState {
    value: String,
    /// Empty means any value is accepted.
    options: Vec<String>,
    listeners: Vec<Rc<dyn Fn(&str)>>,
}

/// A `<select>` with an optional fixed option list.
#[derive(Clone, Default)]
pub struct MemorySelect(Rc<RefCell<SelectState>>);

impl fmt::Debug for MemorySelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0.borrow();
        f.debug_struct("MemorySelect")
            .field("value", &state.value)
            .field("options", &state.options)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

impl MemorySelect {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let select = Self::default();
        select.0.borrow_mut().options = options.into_iter().map(Into::into).collect();
        select
    }

    /// Simulates a user picking `value`, firing every change listener.
    pub fn choose(&self, value: &str) {
        self.set_value(value);
        let (value, listeners) = {
            let state = self.0.borrow();
            (state.value.clone(), state.listeners.clone())
        };
        for listener in listeners {
            listener(&value);
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.0.borrow().listeners.len()
    }
}

impl LanguageSelect for MemorySelect {
    fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    fn set_value(&self, value: &str) {
        let mut state = self.0.borrow_mut();
        // An HTML select shows no selection for a value it has no option for.
        state.value = if state.options.is_empty() || state.options.iter().any(|o| o == value) {
            value.to_string()
        } else {
            String::new()
        };
    }
}

/// Records navigations instead of leaving the page.
#[derive(Debug, Clone, Default)]
pub struct MemoryNavigator {
    history: Rc<RefCell<Vec<String>>>,
}

impl MemoryNavigator {
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }
}

impl Navigator for MemoryNavigator {
    fn navigate(&self, url: &str) -> Result<(), PageError> {
        self.history.borrow_mut().push(url.to_string());
        Ok(())
    }
}

/// Document built element by element, in document order.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    elements: Vec<MemoryElement>,
    selects: Vec<(String, MemorySelect)>,
    globals: HashMap<String, String>,
    navigator: MemoryNavigator,
}

impl MemoryPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `element` after every element added so far.
    #[must_use]
    pub fn with_element(mut self, element: MemoryElement) -> Self {
        self.elements.push(element);
        self
    }

    #[must_use]
    pub fn with_select(mut self, id: impl Into<String>, select: MemorySelect) -> Self {
        self.selects.push((id.into(), select));
        self
    }

    #[must_use]
    pub fn with_global(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.globals.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn elements(&self) -> &[MemoryElement] {
        &self.elements
    }

    /// Every URL navigated to, oldest first.
    #[must_use]
    pub fn navigations(&self) -> Vec<String> {
        self.navigator.history()
    }
}

impl Page for MemoryPage {
    type Element = MemoryElement;
    type Select = MemorySelect;
    type Navigator = MemoryNavigator;

    fn elements_with_attribute(&self, name: &str) -> Vec<MemoryElement> {
        self.elements.iter().filter(|el| el.attribute(name).is_some()).cloned().collect()
    }

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.elements.iter().find(|el| el.id().as_deref() == Some(id)).cloned()
    }

    fn select_by_id(&self, id: &str) -> Option<MemorySelect> {
        self.selects.iter().find(|(select_id, _)| select_id == id).map(|(_, s)| s.clone())
    }

    fn global_string(&self, name: &str) -> Option<String> {
        self.globals.get(name).cloned()
    }

    fn navigator(&self) -> MemoryNavigator {
        self.navigator.clone()
    }

    fn on_select_change(
        &self,
        select: &MemorySelect,
        listener: ChangeListener,
    ) -> Result<(), PageError> {
        select.0.borrow_mut().listeners.push(Rc::from(listener));
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::cell::Cell;

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn elements_with_attribute_keeps_document_order() {
        let page = MemoryPage::new()
            .with_element(MemoryElement::new("a").with_attribute("data-i18n", "first"))
            .with_element(MemoryElement::new("b"))
            .with_element(MemoryElement::new("c").with_attribute("data-i18n", "second"));

        let keys: Vec<_> = page
            .elements_with_attribute("data-i18n")
            .iter()
            .filter_map(|el| el.attribute("data-i18n"))
            .collect();

        assert_eq!(keys, vec!["first", "second"]);
    }

    #[rstest]
    fn element_by_id_returns_first_match() {
        let page = MemoryPage::new()
            .with_element(MemoryElement::new("one").with_id("title"))
            .with_element(MemoryElement::new("two").with_id("title"));

        assert_eq!(page.element_by_id("title").unwrap().text_content(), "one");
        assert!(page.element_by_id("missing").is_none());
    }

    #[rstest]
    fn cloned_elements_share_text() {
        let element = MemoryElement::new("before");
        let page = MemoryPage::new().with_element(element.clone());

        page.elements()[0].set_text_content("after");

        assert_eq!(element.text_content(), "after");
    }

    #[rstest]
    fn select_rejects_unknown_option() {
        let select = MemorySelect::with_options(["uk", "en"]);

        select.set_value("en");
        assert_eq!(select.value(), "en");

        select.set_value("ru");
        assert_eq!(select.value(), "");
    }

    #[rstest]
    fn choose_fires_listeners_with_new_value() {
        let select = MemorySelect::new();
        let page = MemoryPage::new().with_select("lang-select", select.clone());
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::new(RefCell::new(String::new()));

        let (c, s) = (Rc::clone(&calls), Rc::clone(&seen));
        page.on_select_change(
            &select,
            Box::new(move |value: &str| {
                c.set(c.get() + 1);
                value.clone_into(&mut s.borrow_mut());
            }),
        )
        .unwrap();
        select.choose("en");

        assert_eq!(calls.get(), 1);
        assert_eq!(*seen.borrow(), "en");
    }

    #[rstest]
    fn navigator_records_history() {
        let page = MemoryPage::new();

        page.navigator().navigate("/set_language/en").unwrap();

        assert_eq!(page.navigations(), vec!["/set_language/en"]);
    }
}
