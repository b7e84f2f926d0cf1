use std::collections::BTreeMap;

use super::{ClassName, Style};

/// Rules collected for one render.
///
/// Inserting the same style or keyframes twice emits a single rule.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleSheet {
    rules: BTreeMap<ClassName, String>,
    keyframes: BTreeMap<String, String>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `style` and return the class to put on the node.
    pub fn insert(&mut self, style: &Style) -> ClassName {
        for keyframes in style.keyframes() {
            self.keyframes
                .entry(keyframes.name().to_string())
                .or_insert_with(|| keyframes.to_rule());
        }
        let class = style.class_name();
        self.rules
            .entry(class.clone())
            .or_insert_with(|| style.to_rule());
        class
    }

    pub fn len(&self) -> usize {
        self.rules.len() + self.keyframes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keyframes first, then class rules.
    pub fn to_css(&self) -> String {
        self.keyframes
            .values()
            .chain(self.rules.values())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
