use crate::canvas::{Canvas, TextMeasure};
use crate::style::{Style, TextStyle};
use std::convert::Infallible;

/// Width of every glyph on the recording canvas.
pub const GLYPH_WIDTH: f64 = 7.5;

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Circle { cx: f64, cy: f64, radius: f64 },
    Line { from: (f64, f64), to: (f64, f64) },
    Text { text: String, x: f64, y: f64 },
    Save,
    Restore,
    Rotate { degrees: f64 },
    Translate { dx: f64, dy: f64 },
}

/// Canvas that logs every call and tracks the transform stack.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<Op>,
    pub rotation: f64,
    pub depth: usize,
    pub max_depth: usize,
    stack: Vec<f64>,
}

impl RecordingCanvas {
    pub fn lines(&self) -> Vec<((f64, f64), (f64, f64))> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Line { from, to } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<(String, f64, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, x, y } => Some((text.clone(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl TextMeasure for RecordingCanvas {
    type Error = Infallible;

    fn measure_text(&self, text: &str, _style: &TextStyle) -> Result<f64, Infallible> {
        Ok(text.chars().count() as f64 * GLYPH_WIDTH)
    }
}

impl Canvas for RecordingCanvas {
    fn draw_circle(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        _style: &Style,
    ) -> Result<(), Infallible> {
        self.ops.push(Op::Circle { cx, cy, radius });
        Ok(())
    }

    fn draw_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        _style: &Style,
    ) -> Result<(), Infallible> {
        self.ops.push(Op::Line {
            from: (x1, y1),
            to: (x2, y2),
        });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        _style: &TextStyle,
    ) -> Result<(), Infallible> {
        self.ops.push(Op::Text {
            text: text.to_string(),
            x,
            y,
        });
        Ok(())
    }

    fn save(&mut self) -> Result<(), Infallible> {
        self.stack.push(self.rotation);
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        self.ops.push(Op::Save);
        Ok(())
    }

    fn restore(&mut self) -> Result<(), Infallible> {
        self.rotation = self.stack.pop().expect("restore without save");
        self.depth -= 1;
        self.ops.push(Op::Restore);
        Ok(())
    }

    fn rotate(&mut self, degrees: f64, _px: f64, _py: f64) -> Result<(), Infallible> {
        self.rotation += degrees;
        self.ops.push(Op::Rotate { degrees });
        Ok(())
    }

    fn translate(&mut self, dx: f64, dy: f64) -> Result<(), Infallible> {
        self.ops.push(Op::Translate { dx, dy });
        Ok(())
    }
}
