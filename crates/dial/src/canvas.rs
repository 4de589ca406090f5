use crate::style::{Style, TextStyle};

pub trait TextMeasure {
    type Error;

    /// Advance width of `text` in `style`. Must be pure and deterministic.
    fn measure_text(&self, text: &str, style: &TextStyle) -> Result<f64, Self::Error>;
}

/// Drawing surface with scoped transforms.
///
/// Every `save` must be matched by a `restore` before the surface is handed
/// back to its owner. Text is positioned by its baseline origin.
pub trait Canvas: TextMeasure {
    fn draw_circle(&mut self, cx: f64, cy: f64, radius: f64, style: &Style)
    -> Result<(), Self::Error>;

    fn draw_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        style: &Style,
    ) -> Result<(), Self::Error>;

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle)
    -> Result<(), Self::Error>;

    fn save(&mut self) -> Result<(), Self::Error>;

    fn restore(&mut self) -> Result<(), Self::Error>;

    /// Rotates clockwise by `degrees` about `(px, py)`.
    fn rotate(&mut self, degrees: f64, px: f64, py: f64) -> Result<(), Self::Error>;

    fn translate(&mut self, dx: f64, dy: f64) -> Result<(), Self::Error>;
}
