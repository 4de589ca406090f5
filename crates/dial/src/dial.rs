use crate::accessibility::{AccessibilityEvent, AccessibilityNotifier, EventType, describe_bearing};
use crate::canvas::{Canvas, TextMeasure};
use crate::measure::{AxisConstraint, negotiate_size};
use crate::resources::{Cardinal, CardinalLabels, ResourceProvider};
use crate::style::{DialStyles, Font};

pub const TICK_COUNT: usize = 24;
pub const TICK_STEP_DEGREES: f64 = 15.0;
pub const TICK_LENGTH: i32 = 10;
/// Half the width of the arrowhead drawn under the north label.
pub const ARROW_HALF_WIDTH: i32 = 5;

const GLYPH_SAMPLE: &str = "yY";
const CARDINAL_SAMPLE: &str = "W";

/// A compass dial rotating opposite to its bearing, so that "up" always reads
/// the direction currently faced.
///
/// Layout is done in whole units: the glyph height, the half-width of the
/// cardinal sample and the centered angle labels are truncated.
pub struct CompassDial<A: AccessibilityNotifier = ()> {
    bearing: f64,
    styles: DialStyles,
    labels: CardinalLabels,
    glyph_height: i32,
    accessibility: A,
}

impl<A: AccessibilityNotifier> CompassDial<A> {
    pub fn new<M: TextMeasure>(
        resources: &impl ResourceProvider,
        measurer: &M,
        font: Font,
        accessibility: A,
    ) -> Result<Self, M::Error> {
        let styles = DialStyles::resolve(resources, font);
        let labels = CardinalLabels::resolve(resources);
        let glyph_height = measurer.measure_text(GLYPH_SAMPLE, &styles.text)? as i32;
        log::debug!(
            "Dial resolved: glyph height {} with font {} {}",
            glyph_height,
            styles.text.font.family,
            styles.text.font.size
        );

        Ok(Self {
            bearing: 0.0,
            styles,
            labels,
            glyph_height,
            accessibility,
        })
    }

    pub fn bearing(&self) -> f64 {
        self.bearing
    }

    /// Stores `bearing` as given and always announces a text change.
    pub fn set_bearing(&mut self, bearing: f64) {
        log::trace!("Bearing set to {}", bearing);
        self.bearing = bearing;
        self.accessibility.send_event(EventType::TextChanged);
    }

    pub fn glyph_height(&self) -> i32 {
        self.glyph_height
    }

    pub fn styles(&self) -> &DialStyles {
        &self.styles
    }

    pub fn labels(&self) -> &CardinalLabels {
        &self.labels
    }

    pub fn accessibility(&self) -> &A {
        &self.accessibility
    }

    pub fn measure(&self, width: AxisConstraint, height: AxisConstraint) -> (i32, i32) {
        negotiate_size(width, height)
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C, side: i32) -> Result<(), C::Error> {
        let px = side / 2;
        let py = side / 2;
        let radius = px.min(py);
        let gh = self.glyph_height;
        let (pxf, pyf) = (px as f64, py as f64);

        canvas.draw_circle(pxf, pyf, radius as f64, &self.styles.background)?;

        canvas.save()?;
        canvas.rotate(-self.bearing, pxf, pyf)?;

        let text_width = canvas.measure_text(CARDINAL_SAMPLE, &self.styles.text)? as i32;
        let cardinal_x = px - text_width / 2;
        let label_y = py - radius + gh;

        for step in 0..TICK_COUNT {
            canvas.draw_line(
                pxf,
                (py - radius) as f64,
                pxf,
                (py - radius + TICK_LENGTH) as f64,
                &self.styles.marker,
            )?;

            canvas.save()?;
            canvas.translate(0.0, gh as f64)?;

            if let Some(cardinal) = Cardinal::from_step(step) {
                if cardinal == Cardinal::North {
                    self.draw_north_arrow(canvas, px)?;
                }
                canvas.draw_text(
                    self.labels.get(cardinal),
                    cardinal_x as f64,
                    label_y as f64,
                    &self.styles.text,
                )?;
            } else if step % 3 == 0 {
                let angle = (step * TICK_STEP_DEGREES as usize).to_string();
                let width = canvas.measure_text(&angle, &self.styles.text)?;
                let angle_x = (pxf - width / 2.0) as i32;
                canvas.draw_text(&angle, angle_x as f64, label_y as f64, &self.styles.text)?;
            }

            canvas.restore()?;
            canvas.rotate(TICK_STEP_DEGREES, pxf, pyf)?;
        }

        canvas.restore()
    }

    fn draw_north_arrow<C: Canvas>(&self, canvas: &mut C, px: i32) -> Result<(), C::Error> {
        let tip_y = (2 * self.glyph_height) as f64;
        let base_y = (3 * self.glyph_height) as f64;
        let px = px as f64;
        let half = ARROW_HALF_WIDTH as f64;
        canvas.draw_line(px, tip_y, px - half, base_y, &self.styles.marker)?;
        canvas.draw_line(px, tip_y, px + half, base_y, &self.styles.marker)
    }

    /// Appends the bearing text to `event` when visible. Returns `false`
    /// without touching the event otherwise, leaving the description to
    /// enclosing widgets.
    pub fn populate_accessibility_event(
        &self,
        visible: bool,
        event: &mut AccessibilityEvent,
    ) -> bool {
        if !visible {
            return false;
        }
        event.text.push(describe_bearing(self.bearing));
        true
    }
}
