//! Class-based styling for the modal.
//!
//! Styles are plain declaration lists. Each one maps to a stable class name
//! derived from its contents, and a [`StyleSheet`] turns the styles used by a
//! render into CSS text that can be injected next to the rendered nodes.

pub mod error;
pub mod keyframes;
pub mod sheet;

use std::{
    borrow::Cow,
    fmt,
    hash::{DefaultHasher, Hash, Hasher},
};

use dioxus_logger::tracing;

pub use error::StyleError;
pub use keyframes::Keyframes;
pub use sheet::StyleSheet;

/// A single `property: value` pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Declaration {
    pub property: Cow<'static, str>,
    pub value: String,
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{};", self.property, self.value)
    }
}

/// Class identifier generated for a [`Style`], e.g. `css-1f0a9c3b2d4e5f60`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName(String);

impl ClassName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered list of declarations plus the keyframes they reference.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    declarations: Vec<Declaration>,
    keyframes: Vec<Keyframes>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any earlier value for it in place.
    pub fn with(mut self, property: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn set(&mut self, property: impl Into<Cow<'static, str>>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self
            .declarations
            .iter_mut()
            .find(|declaration| declaration.property == property)
        {
            Some(existing) => existing.value = value,
            None => self.declarations.push(Declaration { property, value }),
        }
    }

    /// Use `keyframes` as this style's `animation-name`.
    pub fn animation(mut self, keyframes: Keyframes) -> Self {
        self.set("animation-name", keyframes.name().to_string());
        if !self.keyframes.contains(&keyframes) {
            self.keyframes.push(keyframes);
        }
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|declaration| declaration.property == property)
            .map(|declaration| declaration.value.as_str())
    }

    pub fn animation_name(&self) -> Option<&str> {
        self.get("animation-name")
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn keyframes(&self) -> &[Keyframes] {
        &self.keyframes
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Layer `over` on top of `self`.
    ///
    /// Every declaration of both styles applies; when both set the same
    /// property the value from `over` wins.
    pub fn compose(&self, over: &Style) -> Style {
        let mut composed = self.clone();
        for declaration in &over.declarations {
            composed.set(declaration.property.clone(), declaration.value.clone());
        }
        for keyframes in &over.keyframes {
            if !composed.keyframes.contains(keyframes) {
                composed.keyframes.push(keyframes.clone());
            }
        }
        composed
    }

    /// Parse inline CSS of the form `color: red; width: 10px`.
    pub fn parse(raw: &str) -> Result<Style, StyleError> {
        let mut style = Style::new();
        for segment in raw.split(';') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            let Some((property, value)) = segment.split_once(':') else {
                return Err(StyleError::MalformedDeclaration(segment.to_string()));
            };
            let (property, value) = (property.trim(), value.trim());
            if property.is_empty() || value.is_empty() {
                return Err(StyleError::MalformedDeclaration(segment.to_string()));
            }
            style.set(property.to_ascii_lowercase(), value);
        }
        Ok(style)
    }

    pub fn class_name(&self) -> ClassName {
        let mut hasher = DefaultHasher::new();
        self.declarations.hash(&mut hasher);
        ClassName(format!("css-{:016x}", hasher.finish()))
    }

    /// Class rule for this style, e.g. `.css-…{margin:0;}`.
    pub fn to_rule(&self) -> String {
        let body: String = self.declarations.iter().map(ToString::to_string).collect();
        format!(".{}{{{}}}", self.class_name(), body)
    }
}

/// Caller-supplied style layered on top of a descriptor style.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleOverride {
    /// Inline CSS, parsed when the modal renders.
    Raw(String),
    Style(Style),
}

impl Default for StyleOverride {
    fn default() -> Self {
        StyleOverride::Style(Style::default())
    }
}

impl StyleOverride {
    pub fn is_empty(&self) -> bool {
        match self {
            StyleOverride::Raw(raw) => raw.trim().is_empty(),
            StyleOverride::Style(style) => style.is_empty(),
        }
    }

    /// Compose the override on top of `base`.
    ///
    /// A malformed raw override is dropped with a warning and `base` is used
    /// as is.
    pub fn apply(&self, base: Style) -> Style {
        if self.is_empty() {
            return base;
        }
        match self {
            StyleOverride::Style(style) => base.compose(style),
            StyleOverride::Raw(raw) => match Style::parse(raw) {
                Ok(style) => base.compose(&style),
                Err(err) => {
                    tracing::warn!("Ignoring style override: {}", err);
                    base
                }
            },
        }
    }
}

impl From<&str> for StyleOverride {
    fn from(raw: &str) -> Self {
        StyleOverride::Raw(raw.to_string())
    }
}

impl From<String> for StyleOverride {
    fn from(raw: String) -> Self {
        StyleOverride::Raw(raw)
    }
}

impl From<Style> for StyleOverride {
    fn from(style: Style) -> Self {
        StyleOverride::Style(style)
    }
}
