pub mod accessibility;
pub mod cairo_canvas;
pub mod canvas;
pub mod dial;
pub mod measure;
pub mod resources;
pub mod style;
pub mod widget;

#[cfg(test)]
pub(crate) mod recording;

pub use accessibility::{AccessibilityEvent, AccessibilityNotifier, EventType, MAX_TEXT_LENGTH};
pub use cairo_canvas::CairoCanvas;
pub use canvas::{Canvas, TextMeasure};
pub use dial::CompassDial;
pub use measure::{AxisConstraint, DEFAULT_SIZE, MeasureMode, negotiate_size};
pub use resources::{Cardinal, CardinalLabels, ColorId, ResourceProvider, StringId};
pub use style::{DialStyles, Font, Style, TextStyle};
pub use widget::Widget;
