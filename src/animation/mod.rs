//! Animation descriptors.
//!
//! A descriptor decides how the modal looks in each phase: which node to
//! watch for the end of an animation and which styles to put on the modal
//! container, the backdrop and the content panel. The `closing` flag is true
//! while the modal is animating out.

pub mod fade;

use std::fmt;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::style::{Style, StyleOverride};

pub use fade::Fade;

/// Nodes rendered by the modal that a descriptor can observe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RefName {
    /// Outer fixed-position container.
    Modal,
    /// Panel wrapping the modal's children.
    Content,
}

impl fmt::Display for RefName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefName::Modal => f.write_str("modal"),
            RefName::Content => f.write_str("content"),
        }
    }
}

/// Duration and easing of one animation phase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub duration: String,
    pub timing_function: String,
}

impl Timing {
    pub fn new(duration: impl Into<String>, timing_function: impl Into<String>) -> Self {
        Self {
            duration: duration.into(),
            timing_function: timing_function.into(),
        }
    }

    /// Set `animation-duration` and `animation-timing-function` on `style`.
    pub fn apply(&self, style: Style) -> Style {
        style
            .with("animation-duration", self.duration.clone())
            .with("animation-timing-function", self.timing_function.clone())
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::new("0.3s", "ease-out")
    }
}

/// Phase-aware styling for an animated modal.
///
/// Implementations must be pure: the same `closing` value always yields the
/// same output, so one descriptor can be shared by every modal instance.
pub trait Animation: Clone + PartialEq + Default + 'static {
    /// Node whose animation end completes the current phase.
    fn ref_name(&self, closing: bool) -> RefName;

    fn modal_style(&self, closing: bool) -> Style;

    fn backdrop_style(&self, closing: bool) -> Style;

    fn content_style(&self, closing: bool) -> Style;

    /// Extra node rendered inside the modal container ahead of the content,
    /// styled with the caller's `rect_style`.
    fn decoration(&self, _closing: bool, _rect_style: &StyleOverride) -> Option<Element> {
        None
    }
}
