//! Log subscriber setup.

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use crate::config::Settings;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid log filter: {0}")]
    Filter(#[from] ParseError),

    #[error("Failed to install log subscriber: {0}")]
    Install(String),
}

/// Installs the global `fmt` subscriber filtered by `settings.log_level`.
///
/// Fails if a global subscriber is already set.
pub fn init(settings: &Settings) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(&settings.log_level)?;
    install(filter).map_err(|e| LoggingError::Install(e.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
fn install(filter: EnvFilter) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init()
}

#[cfg(target_arch = "wasm32")]
fn install(filter: EnvFilter) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // No clock on wasm32-unknown-unknown.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .with_writer(|| console::ConsoleWriter)
        .try_init()
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    /// Forwards each formatted event to the devtools console.
    pub(super) struct ConsoleWriter;

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let line = String::from_utf8_lossy(buf);
            web_sys::console::log_1(&line.trim_end().into());
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
