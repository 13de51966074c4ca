//! Asset loading by logical name
//!
//! The menu refers to its assets by name (`menu_background`, `game_font`).
//! [`AssetTable`] maps names to files and [`ResourceManager`] turns them into
//! SDL2 textures and fonts.

use crate::error::MenuError;
use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::WindowContext;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Logical asset name -> file path
#[derive(Debug, Clone, Default)]
pub struct AssetTable {
    paths: HashMap<String, PathBuf>,
}

impl AssetTable {
    pub fn new(paths: HashMap<String, PathBuf>) -> Self {
        AssetTable { paths }
    }

    /// Path registered for a name
    pub fn resolve(&self, name: &str) -> Result<&Path, MenuError> {
        self.paths
            .get(name)
            .map(PathBuf::as_path)
            .ok_or_else(|| MenuError::UnknownAsset(name.to_string()))
    }
}

/// Loads textures and fonts for the lifetime `'a` of the texture creator
/// and TTF context
pub struct ResourceManager<'a> {
    texture_creator: &'a TextureCreator<WindowContext>,
    ttf: &'a Sdl2TtfContext,
    assets: AssetTable,
}

impl<'a> ResourceManager<'a> {
    pub fn new(
        texture_creator: &'a TextureCreator<WindowContext>,
        ttf: &'a Sdl2TtfContext,
        assets: AssetTable,
    ) -> Self {
        ResourceManager {
            texture_creator,
            ttf,
            assets,
        }
    }

    pub fn texture_creator(&self) -> &'a TextureCreator<WindowContext> {
        self.texture_creator
    }

    pub fn load_texture(&self, name: &str) -> Result<Texture<'a>, MenuError> {
        let path = self.assets.resolve(name)?;
        self.texture_creator
            .load_texture(path)
            .map_err(|reason| asset_error(name, path, reason))
    }

    pub fn load_font(&self, name: &str, point_size: u16) -> Result<Font<'a, 'static>, MenuError> {
        let path = self.assets.resolve(name)?;
        self.ttf
            .load_font(path, point_size)
            .map_err(|reason| asset_error(name, path, reason))
    }
}

fn asset_error(name: &str, path: &Path, reason: String) -> MenuError {
    MenuError::AssetLoad {
        name: name.to_string(),
        path: path.to_path_buf(),
        reason,
    }
}
