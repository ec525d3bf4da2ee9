//! Data decoded from resources the page fetches.

pub mod translation;

pub use translation::{
    TranslationError,
    TranslationMap,
};
