use crate::canvas::{Canvas, TextMeasure};
use crate::style::{Style, TextStyle};
use cairo::{Context, Format, ImageSurface};
use palette::Srgba;
use std::f64::consts::PI;

const STROKE_WIDTH: f64 = 1.0;

/// [`Canvas`] backed by a cairo context.
pub struct CairoCanvas {
    cr: Context,
}

impl CairoCanvas {
    pub fn new(cr: &Context) -> Self {
        Self { cr: cr.clone() }
    }

    /// A canvas over a 1x1 scratch surface, good for text measurement only.
    pub fn offscreen() -> Result<Self, cairo::Error> {
        let surface = ImageSurface::create(Format::ARgb32, 1, 1)?;
        Ok(Self {
            cr: Context::new(&surface)?,
        })
    }

    pub fn context(&self) -> &Context {
        &self.cr
    }

    fn set_color(&self, color: Srgba<f64>) {
        let (r, g, b, a) = color.into_components();
        self.cr.set_source_rgba(r, g, b, a);
    }

    fn select_font(&self, style: &TextStyle) {
        self.cr.select_font_face(
            &style.font.family,
            cairo::FontSlant::Normal,
            cairo::FontWeight::Normal,
        );
        self.cr.set_font_size(style.font.size);
    }
}

impl TextMeasure for CairoCanvas {
    type Error = cairo::Error;

    fn measure_text(&self, text: &str, style: &TextStyle) -> Result<f64, cairo::Error> {
        self.cr.save()?;
        self.select_font(style);
        let extents = self.cr.text_extents(text);
        self.cr.restore()?;
        Ok(extents?.x_advance())
    }
}

impl Canvas for CairoCanvas {
    fn draw_circle(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        style: &Style,
    ) -> Result<(), cairo::Error> {
        self.set_color(style.color);
        self.cr.set_line_width(STROKE_WIDTH);
        self.cr.new_path();
        self.cr.arc(cx, cy, radius, 0.0, 2.0 * PI);
        self.cr.fill_preserve()?;
        self.cr.stroke()
    }

    fn draw_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        style: &Style,
    ) -> Result<(), cairo::Error> {
        self.set_color(style.color);
        self.cr.set_line_width(STROKE_WIDTH);
        self.cr.new_path();
        self.cr.move_to(x1, y1);
        self.cr.line_to(x2, y2);
        self.cr.stroke()
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        style: &TextStyle,
    ) -> Result<(), cairo::Error> {
        self.set_color(style.color);
        self.select_font(style);
        self.cr.new_path();
        self.cr.move_to(x, y);
        self.cr.show_text(text)
    }

    fn save(&mut self) -> Result<(), cairo::Error> {
        self.cr.save()
    }

    fn restore(&mut self) -> Result<(), cairo::Error> {
        self.cr.restore()
    }

    fn rotate(&mut self, degrees: f64, px: f64, py: f64) -> Result<(), cairo::Error> {
        self.cr.translate(px, py);
        self.cr.rotate(degrees.to_radians());
        self.cr.translate(-px, -py);
        Ok(())
    }

    fn translate(&mut self, dx: f64, dy: f64) -> Result<(), cairo::Error> {
        self.cr.translate(dx, dy);
        Ok(())
    }
}
