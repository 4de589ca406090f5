use crate::accessibility::{AccessibilityEvent, AccessibilityNotifier};
use crate::canvas::Canvas;
use crate::dial::CompassDial;
use crate::measure::AxisConstraint;

/// What a host toolkit needs from a custom-drawn widget: a size answer for
/// layout, a paint callback and an accessibility description.
pub trait Widget {
    fn on_measure(&self, width: AxisConstraint, height: AxisConstraint) -> (i32, i32);

    /// Paints into a `width` x `height` area whose origin is the canvas origin.
    fn on_draw<C: Canvas>(&self, canvas: &mut C, width: i32, height: i32) -> Result<(), C::Error>;

    fn populate_accessibility_event(&self, visible: bool, event: &mut AccessibilityEvent) -> bool;
}

impl<A: AccessibilityNotifier> Widget for CompassDial<A> {
    fn on_measure(&self, width: AxisConstraint, height: AxisConstraint) -> (i32, i32) {
        self.measure(width, height)
    }

    fn on_draw<C: Canvas>(&self, canvas: &mut C, width: i32, height: i32) -> Result<(), C::Error> {
        let (side, _) = self.measure(AxisConstraint::exact(width), AxisConstraint::exact(height));
        canvas.save()?;
        canvas.translate(((width - side) / 2) as f64, ((height - side) / 2) as f64)?;
        self.draw(canvas, side)?;
        canvas.restore()
    }

    fn populate_accessibility_event(&self, visible: bool, event: &mut AccessibilityEvent) -> bool {
        CompassDial::populate_accessibility_event(self, visible, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{Op, RecordingCanvas};
    use crate::resources::{ColorId, ResourceProvider, StringId};
    use crate::style::Font;
    use palette::Srgba;

    struct Plain;

    impl ResourceProvider for Plain {
        fn color(&self, _id: ColorId) -> Srgba<f64> {
            Srgba::new(0.0, 0.0, 0.0, 1.0)
        }

        fn string(&self, id: StringId) -> String {
            id.to_string()
        }
    }

    fn widget() -> impl Widget {
        CompassDial::new(&Plain, &RecordingCanvas::default(), Font::default(), ()).unwrap()
    }

    #[test]
    fn test_widget_reports_square() {
        let w = widget();
        assert_eq!(
            w.on_measure(AxisConstraint::unspecified(), AxisConstraint::unspecified()),
            (200, 200)
        );
        assert_eq!(
            w.on_measure(AxisConstraint::at_most(640), AxisConstraint::exact(360)),
            (360, 360)
        );
    }

    #[test]
    fn test_widget_centers_square_in_area() {
        let mut canvas = RecordingCanvas::default();
        widget().on_draw(&mut canvas, 400, 300).unwrap();

        assert_eq!(canvas.ops[1], Op::Translate { dx: 50.0, dy: 0.0 });
        assert_eq!(
            canvas.ops[2],
            Op::Circle {
                cx: 150.0,
                cy: 150.0,
                radius: 150.0
            }
        );
        assert_eq!(canvas.depth, 0);
    }
}
