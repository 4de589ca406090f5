use crate::resources::{ColorId, ResourceProvider};
use palette::Srgba;

pub const DEFAULT_FONT_FAMILY: &str = "Sans";
pub const DEFAULT_FONT_SIZE: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub color: Srgba<f64>,
}

impl Style {
    pub fn new(color: Srgba<f64>) -> Self {
        Self { color }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f64,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: DEFAULT_FONT_FAMILY.to_string(),
            size: DEFAULT_FONT_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub color: Srgba<f64>,
    pub font: Font,
}

impl TextStyle {
    pub fn new(color: Srgba<f64>, font: Font) -> Self {
        Self { color, font }
    }
}

/// The three styles a dial paints with, fixed for the dial's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct DialStyles {
    pub background: Style,
    pub marker: Style,
    pub text: TextStyle,
}

impl DialStyles {
    pub fn resolve(resources: &impl ResourceProvider, font: Font) -> Self {
        Self {
            background: Style::new(resources.color(ColorId::Background)),
            marker: Style::new(resources.color(ColorId::Marker)),
            text: TextStyle::new(resources.color(ColorId::Text), font),
        }
    }
}
