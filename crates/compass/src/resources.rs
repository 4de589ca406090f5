use crate::config::Config;
use crate::gui::theme::ThemeColors;
use compass_dial::{
    AccessibilityNotifier, CairoCanvas, ColorId, CompassDial, Font, ResourceProvider, StringId,
};
use palette::Srgba;

/// Colors and labels for the dial: config first, theme second.
pub struct HostResources<'a> {
    config: &'a Config,
    theme: ThemeColors,
}

impl<'a> HostResources<'a> {
    pub fn new(config: &'a Config, theme: ThemeColors) -> Self {
        Self { config, theme }
    }
}

impl ResourceProvider for HostResources<'_> {
    fn color(&self, id: ColorId) -> Srgba<f64> {
        let (configured, themed) = match id {
            ColorId::Background => (self.config.colors.background, self.theme.background),
            ColorId::Marker => (self.config.colors.marker, self.theme.marker),
            ColorId::Text => (self.config.colors.text, self.theme.text),
        };
        configured.map(|c| c.to_srgba()).unwrap_or(themed)
    }

    fn string(&self, id: StringId) -> String {
        let labels = &self.config.labels;
        match id {
            StringId::CardinalNorth => labels.north.clone(),
            StringId::CardinalEast => labels.east.clone(),
            StringId::CardinalSouth => labels.south.clone(),
            StringId::CardinalWest => labels.west.clone(),
        }
    }
}

/// Builds a dial from `config` and `theme` and applies `bearing`.
pub fn build_dial<A: AccessibilityNotifier>(
    config: &Config,
    theme: ThemeColors,
    bearing: f64,
    accessibility: A,
) -> Result<CompassDial<A>, cairo::Error> {
    let measurer = CairoCanvas::offscreen()?;
    let resources = HostResources::new(config, theme);
    let mut dial = CompassDial::new(&resources, &measurer, Font::from(&config.font), accessibility)?;
    dial.set_bearing(bearing);
    Ok(dial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use compass_dial::CardinalLabels;

    #[test]
    fn test_build_dial() {
        let mut config = Config::default();
        config.labels.west = "O".to_string();
        let dial = build_dial(&config, ThemeColors::default(), -33.5, ()).unwrap();

        assert_eq!(dial.bearing(), -33.5);
        assert_eq!(dial.labels().west, "O");
        assert!(dial.glyph_height() > 0);
        assert_eq!(dial.styles().text.font, Font::default());
    }

    #[test]
    fn test_config_overrides_theme() {
        let mut config = Config::default();
        config.colors.marker = Some("#ff0000".parse().unwrap());
        let theme = ThemeColors::default();
        let resources = HostResources::new(&config, theme);

        assert_eq!(
            resources.color(ColorId::Marker),
            Srgba::new(1.0, 0.0, 0.0, 1.0)
        );
        assert_eq!(resources.color(ColorId::Background), theme.background);
        assert_eq!(resources.color(ColorId::Text), theme.text);
    }

    #[test]
    fn test_labels_come_from_config() {
        let mut config = Config::default();
        config.labels.north = "С".to_string();
        config.labels.east = "В".to_string();
        let labels = CardinalLabels::resolve(&HostResources::new(&config, ThemeColors::default()));

        assert_eq!(labels.north, "С");
        assert_eq!(labels.east, "В");
        assert_eq!(labels.south, "S");
        assert_eq!(labels.west, "W");
    }
}
