//! Menu configuration
//!
//! Window, asset and music settings are read from a JSON file. Every field
//! has a default, so a partial file only overrides what it names and a
//! missing file falls back to the built-in configuration.

use crate::error::MenuError;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Logical name of the menu background texture
pub const MENU_IMAGE: &str = "menu_background";

/// Logical name of the font used for every menu string
pub const GAME_FONT: &str = "game_font";

/// Project-local config file, relative to the working directory
const LOCAL_CONFIG_PATH: &str = "assets/config/menu.json";

/// Directory name under the user's config folder
const USER_CONFIG_DIR: &str = "title-menu";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Game 1".to_string(),
            width: 1024,
            height: 768,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MusicConfig {
    pub path: PathBuf,
    /// Mixer volume, 0-128
    pub volume: i32,
}

impl Default for MusicConfig {
    fn default() -> Self {
        MusicConfig {
            path: PathBuf::from("assets/music/menu.ogg"),
            volume: 64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub window: WindowConfig,

    /// Delay between frames of the menu loops
    pub frame_delay_ms: u64,

    /// Logical asset name -> file path
    pub assets: HashMap<String, PathBuf>,

    pub music: MusicConfig,
}

impl Default for MenuConfig {
    fn default() -> Self {
        let mut assets = HashMap::new();
        assets.insert(
            MENU_IMAGE.to_string(),
            PathBuf::from("assets/backgrounds/menu_background.png"),
        );
        assets.insert(GAME_FONT.to_string(), PathBuf::from("assets/fonts/game_font.ttf"));

        MenuConfig {
            window: WindowConfig::default(),
            frame_delay_ms: 16,
            assets,
            music: MusicConfig::default(),
        }
    }
}

impl MenuConfig {
    /// Loads the first config file found in [`MenuConfig::search_paths`],
    /// or the defaults if none exists.
    pub fn load() -> Result<Self, MenuError> {
        for path in Self::search_paths() {
            if path.exists() {
                info!("Loading menu config from {}", path.display());
                return Self::load_from_file(&path);
            }
        }

        info!("No menu config found, using defaults");
        Ok(Self::default())
    }

    /// User config directory first, then the project-local file
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join(USER_CONFIG_DIR).join("menu.json"));
        }
        paths.push(PathBuf::from(LOCAL_CONFIG_PATH));
        paths
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, MenuError> {
        let mut config: MenuConfig = serde_json::from_str(json)?;

        // A partial asset table keeps the built-in entries it doesn't override
        for (name, path) in MenuConfig::default().assets {
            config.assets.entry(name).or_insert(path);
        }
        config.music.volume = config.music.volume.clamp(0, 128);

        Ok(config)
    }
}
