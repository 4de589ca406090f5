use clap::Parser;
use compass::config;
use compass::gui::app::AppModel;
use compass::gui::theme::ThemeColors;
use compass::render;
use compass::resources::build_dial;
use compass::sys::runtime;
use compass_dial::DEFAULT_SIZE;
use relm4::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "compass", version, about, long_about = None)]
struct Cli {
    /// Render one frame to this PNG file instead of opening a window
    #[arg(long)]
    png: Option<PathBuf>,

    /// Side length of the exported PNG
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: i32,

    /// Write the default config file if none exists, then exit
    #[arg(long)]
    write_config: bool,

    /// Initial bearing in degrees (overrides the config file)
    #[arg(short, long, allow_negative_numbers = true)]
    bearing: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.write_config {
        let path = config::write_default_config()?;
        println!("{}", path.display());
        return Ok(());
    }

    let mut config = config::load_or_default();
    if let Some(bearing) = cli.bearing {
        config.bearing = bearing;
    }

    if let Some(path) = cli.png {
        let dial = build_dial(&config, ThemeColors::default(), config.bearing, ())?;
        render::export_png(&dial, cli.size, &path)?;
        log::info!("Wrote {}", path.display());
        return Ok(());
    }

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx.clone());

    let app = RelmApp::new("org.compass.dial");

    app.run::<AppModel>((config, tx, rx));
    Ok(())
}
