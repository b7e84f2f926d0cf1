use thiserror::Error;

/// Failures installing the global keyboard listener.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListenerError {
    /// No `window` object, e.g. when running outside a browser.
    #[error("No window available to listen on")]
    NoWindow,

    /// The browser rejected the listener.
    ///
    /// # Fields
    /// - Debug rendering of the JavaScript exception
    #[error("Failed to add keydown listener: {0}")]
    Rejected(String),
}
