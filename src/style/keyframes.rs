use std::borrow::Cow;

use super::Style;

/// Named `@keyframes` rule.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Keyframes {
    name: Cow<'static, str>,
    frames: Vec<(u8, Style)>,
}

impl Keyframes {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            frames: Vec::new(),
        }
    }

    /// Add a frame at `percent` (clamped to 100).
    pub fn frame(mut self, percent: u8, style: Style) -> Self {
        let percent = percent.min(100);
        match self.frames.iter_mut().find(|(at, _)| *at == percent) {
            Some((_, existing)) => *existing = style,
            None => {
                self.frames.push((percent, style));
                self.frames.sort_by_key(|(at, _)| *at);
            }
        }
        self
    }

    /// Two-frame opacity animation.
    pub fn opacity(name: impl Into<Cow<'static, str>>, from: f32, to: f32) -> Self {
        Self::new(name)
            .frame(0, Style::new().with("opacity", from.to_string()))
            .frame(100, Style::new().with("opacity", to.to_string()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frames(&self) -> &[(u8, Style)] {
        &self.frames
    }

    pub fn to_rule(&self) -> String {
        let body: String = self
            .frames
            .iter()
            .map(|(percent, style)| {
                let declarations: String =
                    style.declarations().iter().map(ToString::to_string).collect();
                format!("{percent}%{{{declarations}}}")
            })
            .collect();
        format!("@keyframes {}{{{}}}", self.name, body)
    }
}
