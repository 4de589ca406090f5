use cairo::{Context, Format, ImageSurface};
use compass_dial::{AccessibilityNotifier, CairoCanvas, CompassDial};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),
    #[error("PNG encoding error: {0}")]
    Png(#[from] cairo::IoError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders one `side` x `side` frame of `dial` into a PNG at `path`.
pub fn export_png<A: AccessibilityNotifier>(
    dial: &CompassDial<A>,
    side: i32,
    path: &Path,
) -> Result<(), RenderError> {
    let surface = ImageSurface::create(Format::ARgb32, side, side)?;
    {
        let cr = Context::new(&surface)?;
        dial.draw(&mut CairoCanvas::new(&cr), side)?;
    }

    let mut file = fs_err::File::create(path)?;
    surface.write_to_png(&mut file)?;
    log::debug!("Exported {}x{} dial to {}", side, side, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::gui::theme::ThemeColors;
    use crate::resources::build_dial;

    #[test]
    fn test_export_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dial.png");
        let dial = build_dial(&Config::default(), ThemeColors::default(), 30.0, ()).unwrap();

        export_png(&dial, 240, &path).unwrap();

        let mut file = fs_err::File::open(&path).unwrap();
        let image = ImageSurface::create_from_png(&mut file).unwrap();
        assert_eq!((image.width(), image.height()), (240, 240));
    }

    #[test]
    fn test_export_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("dial.png");
        let dial = build_dial(&Config::default(), ThemeColors::default(), 0.0, ()).unwrap();

        assert!(matches!(
            export_png(&dial, 64, &path),
            Err(RenderError::Io(_))
        ));
    }
}
