//! Global Escape-key handling.
//!
//! The modal listens for key presses on the whole page for as long as it is
//! mounted. [`KeyboardGuard`] holds that subscription and removes it when
//! dropped, so the listener never outlives the component that installed it.

use super::error::ListenerError;

pub const ESCAPE_KEY_CODE: u32 = 27;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub key_code: u32,
}

impl KeyPress {
    pub fn new(key: impl Into<String>, key_code: u32) -> Self {
        Self {
            key: key.into(),
            key_code,
        }
    }

    pub fn is_escape(&self) -> bool {
        self.key == "Escape" || self.key_code == ESCAPE_KEY_CODE
    }
}

/// Somewhere key presses can be subscribed to.
pub trait KeySource {
    /// Whatever must be kept to remove the subscription again.
    type Registration;

    fn listen(
        &self,
        handler: Box<dyn FnMut(&KeyPress)>,
    ) -> Result<Self::Registration, ListenerError>;

    fn unlisten(&self, registration: Self::Registration);
}

/// Key subscription released on drop.
pub struct KeyboardGuard<S: KeySource> {
    source: S,
    registration: Option<S::Registration>,
}

impl<S: KeySource> KeyboardGuard<S> {
    pub fn install(
        source: S,
        handler: impl FnMut(&KeyPress) + 'static,
    ) -> Result<Self, ListenerError> {
        let registration = source.listen(Box::new(handler))?;
        Ok(Self {
            source,
            registration: Some(registration),
        })
    }
}

impl<S: KeySource> Drop for KeyboardGuard<S> {
    fn drop(&mut self) {
        if let Some(registration) = self.registration.take() {
            self.source.unlisten(registration);
        }
    }
}
