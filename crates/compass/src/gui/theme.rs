use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

/// Dial colors taken from the active GTK theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    pub background: Srgba<f64>,
    pub marker: Srgba<f64>,
    pub text: Srgba<f64>,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            background: Srgba::new(0.15, 0.15, 0.15, 1.0),
            marker: Srgba::new(0.4, 0.4, 0.8, 1.0),
            text: Srgba::new(0.95, 0.95, 0.95, 1.0),
        }
    }
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        let fallback = Self::default();
        Self {
            background: Self::lookup_color(context, "theme_bg_color", fallback.background),
            marker: Self::lookup_color(context, "theme_selected_bg_color", fallback.marker),
            text: Self::lookup_color(context, "theme_fg_color", fallback.text),
        }
    }

    fn lookup_color(context: &gtk::StyleContext, name: &str, fallback: Srgba<f64>) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                Srgba::new(
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                )
            })
            .unwrap_or(fallback)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.compass-drawing-area {
    background: none;
    background-color: transparent;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
