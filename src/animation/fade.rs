use serde::{Deserialize, Serialize};

use super::{Animation, RefName, Timing};
use crate::style::{Keyframes, Style};

const BACKDROP_OPACITY: f32 = 0.9;

/// Opacity fade of the backdrop and the content panel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fade {
    /// Timing of the enter animation
    pub show: Timing,
    /// Timing of the exit animation
    pub hide: Timing,
}

impl Fade {
    pub fn new(show: Timing, hide: Timing) -> Self {
        Self { show, hide }
    }

    /// Parse a descriptor from JSON, e.g. `{"hide": {"duration": "0.5s"}}`.
    ///
    /// Missing fields keep their defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    fn timing(&self, closing: bool) -> &Timing {
        if closing {
            &self.hide
        } else {
            &self.show
        }
    }

    fn backdrop_keyframes(closing: bool) -> Keyframes {
        if closing {
            Keyframes::opacity("hideBackdropAnimation", BACKDROP_OPACITY, 0.0)
        } else {
            Keyframes::opacity("showBackdropAnimation", 0.0, BACKDROP_OPACITY)
        }
    }

    fn content_keyframes(closing: bool) -> Keyframes {
        if closing {
            Keyframes::opacity("hideContentAnimation", 1.0, 0.0)
        } else {
            Keyframes::opacity("showContentAnimation", 0.0, 1.0)
        }
    }
}

impl Animation for Fade {
    fn ref_name(&self, _closing: bool) -> RefName {
        RefName::Content
    }

    fn modal_style(&self, _closing: bool) -> Style {
        Style::new()
            .with("z-index", "1050")
            .with("position", "fixed")
            .with("width", "500px")
            .with("transform", "translate3d(-50%, -50%, 0)")
            .with("top", "50%")
            .with("left", "50%")
    }

    fn backdrop_style(&self, closing: bool) -> Style {
        let style = Style::new()
            .with("position", "fixed")
            .with("top", "0")
            .with("right", "0")
            .with("bottom", "0")
            .with("left", "0")
            .with("z-index", "1040")
            .with("background-color", "#373A47")
            .with("animation-fill-mode", "forwards")
            .animation(Self::backdrop_keyframes(closing));
        self.timing(closing).apply(style)
    }

    fn content_style(&self, closing: bool) -> Style {
        let style = Style::new()
            .with("margin", "0")
            .with("background-color", "white")
            .with("animation-fill-mode", "forwards")
            .animation(Self::content_keyframes(closing));
        self.timing(closing).apply(style)
    }
}
