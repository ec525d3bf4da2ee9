//! Host page seams.
//!
//! The translator and the startup orchestrator only see these traits. The
//! browser build implements them over `web-sys`; [`memory`] implements them
//! over an in-memory document.

pub mod memory;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("Navigation to '{url}' failed: {message}")]
    Navigation { url: String, message: String },

    #[error("Failed to register change listener: {0}")]
    Listener(String),
}

/// An element whose visible text can be replaced.
pub trait PageElement {
    fn attribute(&self, name: &str) -> Option<String>;

    fn text_content(&self) -> String;

    fn set_text_content(&self, text: &str);
}

/// The language selection control.
pub trait LanguageSelect {
    fn value(&self) -> String;

    fn set_value(&self, value: &str);
}

/// Performs full-page navigations.
pub trait Navigator {
    /// Leaves the current page for `url`.
    fn navigate(&self, url: &str) -> Result<(), PageError>;
}

/// Callback run with the newly selected value.
pub type ChangeListener = Box<dyn Fn(&str)>;

/// A loaded document plus the window-level facilities the page script uses.
pub trait Page {
    type Element: PageElement;
    type Select: LanguageSelect;
    type Navigator: Navigator + 'static;

    /// Every element carrying `name`, in document order.
    fn elements_with_attribute(&self, name: &str) -> Vec<Self::Element>;

    /// First element with the given id.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    fn select_by_id(&self, id: &str) -> Option<Self::Select>;

    /// A global string such as `window.APP_LANG`. Non-string values read as
    /// absent.
    fn global_string(&self, name: &str) -> Option<String>;

    fn navigator(&self) -> Self::Navigator;

    /// Runs `listener` every time the user changes `select`.
    fn on_select_change(
        &self,
        select: &Self::Select,
        listener: ChangeListener,
    ) -> Result<(), PageError>;
}
