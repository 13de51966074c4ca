use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while setting up or driving the menu
#[derive(Debug)]
pub enum MenuError {
    /// A logical asset name has no path in the asset table
    UnknownAsset(String),

    /// An asset file exists in the table but could not be loaded
    AssetLoad {
        name: String,
        path: PathBuf,
        reason: String,
    },

    /// A font size was requested that was never loaded
    FontNotLoaded(u16),

    /// Drawing was requested before a background was loaded
    BackgroundNotLoaded,

    /// Error reported by SDL2 (rendering, texture creation, ...)
    Sdl(String),

    /// Config file could not be read
    Io(std::io::Error),

    /// Config file is not valid JSON for the expected schema
    Config(serde_json::Error),
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MenuError::UnknownAsset(name) => {
                write!(f, "Unknown asset: {}", name)
            }
            MenuError::AssetLoad { name, path, reason } => {
                write!(f, "Failed to load asset '{}' from {}: {}", name, path.display(), reason)
            }
            MenuError::FontNotLoaded(size) => {
                write!(f, "No font loaded at size {}", size)
            }
            MenuError::BackgroundNotLoaded => {
                write!(f, "No background texture loaded")
            }
            MenuError::Sdl(msg) => write!(f, "SDL error: {}", msg),
            MenuError::Io(e) => write!(f, "IO error: {}", e),
            MenuError::Config(e) => write!(f, "Config error: {}", e),
        }
    }
}

impl std::error::Error for MenuError {}

impl From<std::io::Error> for MenuError {
    fn from(err: std::io::Error) -> Self {
        MenuError::Io(err)
    }
}

impl From<serde_json::Error> for MenuError {
    fn from(err: serde_json::Error) -> Self {
        MenuError::Config(err)
    }
}

// SDL2 reports most failures as plain strings
impl From<String> for MenuError {
    fn from(err: String) -> Self {
        MenuError::Sdl(err)
    }
}

impl From<MenuError> for String {
    fn from(error: MenuError) -> Self {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_load_message_names_path() {
        let err = MenuError::AssetLoad {
            name: "game_font".to_string(),
            path: PathBuf::from("assets/fonts/menu.ttf"),
            reason: "file not found".to_string(),
        };

        let message = err.to_string();
        assert!(message.contains("game_font"));
        assert!(message.contains("assets/fonts/menu.ttf"));
        assert!(message.contains("file not found"));
    }

    #[test]
    fn test_sdl_string_converts() {
        let err: MenuError = "Texture creation failed".to_string().into();
        assert!(matches!(err, MenuError::Sdl(_)));

        let back: String = err.into();
        assert_eq!(back, "SDL error: Texture creation failed");
    }
}
