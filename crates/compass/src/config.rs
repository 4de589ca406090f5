use compass_dial::Font;
use derive_more::{Deref, From, Into};
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use palette::rgb::FromHexError;
use palette::{Srgb, Srgba, WithAlpha};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An opaque `#rrggbb` color.
#[derive(Debug, Clone, Copy, PartialEq, SerializeDisplay, DeserializeFromStr, Deref, From, Into)]
pub struct HexColor(Srgb<u8>);

impl HexColor {
    pub fn to_srgba(&self) -> Srgba<f64> {
        self.0.into_format::<f64>().with_alpha(1.0)
    }
}

impl FromStr for HexColor {
    type Err = FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Srgb::<u8>::from_str(s.trim()).map(Self)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0.red, self.0.green, self.0.blue)
    }
}

/// Color overrides; unset colors come from the GTK theme.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct ColorConfig {
    pub background: Option<HexColor>,
    pub marker: Option<HexColor>,
    pub text: Option<HexColor>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LabelConfig {
    pub north: String,
    pub east: String,
    pub south: String,
    pub west: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            north: "N".to_string(),
            east: "E".to_string(),
            south: "S".to_string(),
            west: "W".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FontConfig {
    pub family: String,
    pub size: f64,
}

impl Default for FontConfig {
    fn default() -> Self {
        let font = Font::default();
        Self {
            family: font.family,
            size: font.size,
        }
    }
}

impl From<&FontConfig> for Font {
    fn from(cfg: &FontConfig) -> Self {
        Font {
            family: cfg.family.clone(),
            size: cfg.size,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct Config {
    /// Bearing shown until the first update arrives.
    #[serde(default)]
    pub bearing: f64,
    #[serde(default)]
    pub colors: ColorConfig,
    #[serde(default)]
    pub labels: LabelConfig,
    #[serde(default)]
    pub font: FontConfig,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "compass", "compass").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn build_config(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<Config, ConfigError> {
    let s = builder
        .add_source(
            config::Environment::with_prefix("COMPASS")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;
    build_config(
        config::Config::builder().add_source(config::File::from(config_path).required(false)),
    )
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    write_default_config_at(&path)?;
    Ok(path)
}

/// Writes the bundled config to `path` unless a file is already there.
/// Returns whether a file was written.
pub fn write_default_config_at(path: &std::path::Path) -> std::io::Result<bool> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if path.exists() {
        return Ok(false);
    }
    fs_err::write(path, DEFAULT_CONFIG)?;
    Ok(true)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", ConfigError::from(e));
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml: &str) -> Config {
        build_config(
            config::Config::builder()
                .add_source(config::File::from_str(toml, config::FileFormat::Toml)),
        )
        .unwrap()
    }

    #[test]
    fn test_hex_color_deserialization() {
        let cases = vec![
            ("\"#ff0000\"", Srgb::new(255u8, 0, 0)),
            ("\"00ff7f\"", Srgb::new(0u8, 255, 127)),
            ("\" #0a0b0c \"", Srgb::new(10u8, 11, 12)),
        ];

        for (json, expected) in cases {
            let deserialized: HexColor = serde_json::from_str(json).unwrap();
            assert_eq!(*deserialized, expected);
        }

        assert!(serde_json::from_str::<HexColor>("\"#nothex\"").is_err());
    }

    #[test]
    fn test_hex_color_round_trip_text() {
        let color = HexColor::from(Srgb::new(18u8, 52, 171));
        assert_eq!(color.to_string(), "#1234ab");
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#1234ab\"");
        assert_eq!(color.to_srgba().alpha, 1.0);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let cfg = from_toml(
            r##"
            bearing = 42.5

            [colors]
            marker = "#cc3333"

            [labels]
            north = "С"
            "##,
        );

        assert_eq!(cfg.bearing, 42.5);
        assert_eq!(cfg.colors.marker.map(|c| c.to_string()), Some("#cc3333".into()));
        assert_eq!(cfg.colors.background, None);
        assert_eq!(cfg.labels.north, "С");
        assert_eq!(cfg.labels.west, "W");
        assert_eq!(cfg.font, FontConfig::default());
    }

    #[test]
    fn test_write_default_config_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compass").join("config.toml");

        assert!(write_default_config_at(&path).unwrap());
        assert_eq!(fs_err::read_to_string(&path).unwrap(), DEFAULT_CONFIG);

        fs_err::write(&path, "bearing = 90.0\n").unwrap();
        assert!(!write_default_config_at(&path).unwrap());
        assert_eq!(fs_err::read_to_string(&path).unwrap(), "bearing = 90.0\n");
    }

    #[test]
    fn test_bundled_default_config_parses() {
        let cfg = from_toml(DEFAULT_CONFIG);
        assert_eq!(cfg.labels, LabelConfig::default());
        assert_eq!(Font::from(&cfg.font), Font::default());
    }
}
