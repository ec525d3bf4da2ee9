//! Page localisation settings.
/// Settings loader
mod loader;
/// Settings types and validation
mod types;

pub use loader::load_from_str;
pub use types::{
    ConfigError,
    Settings,
    TitleConfig,
    ValidationError,
};
