//! TrueType Text Rendering
//!
//! Fonts are loaded once per point size. Outlined variants of a size are
//! loaded on first use. Every rendered line is kept as a texture so a static
//! menu doesn't re-rasterize its labels each frame.

use crate::error::MenuError;
use crate::resources::ResourceManager;
use sdl2::pixels::Color;
use sdl2::render::{Texture, TextureCreator};
use sdl2::ttf::Font;
use sdl2::video::WindowContext;
use std::collections::HashMap;

/// Fonts keyed by (point size, outline width)
pub struct FontBook<'a> {
    name: Option<String>,
    fonts: HashMap<(u16, u16), Font<'a, 'static>>,
}

impl<'a> FontBook<'a> {
    pub fn new() -> Self {
        FontBook {
            name: None,
            fonts: HashMap::new(),
        }
    }

    /// Load the named font at every given size
    pub fn load(
        &mut self,
        resources: &ResourceManager<'a>,
        name: &str,
        sizes: &[u16],
    ) -> Result<(), MenuError> {
        for &size in sizes {
            let font = resources.load_font(name, size)?;
            self.fonts.insert((size, 0), font);
        }
        self.name = Some(name.to_string());
        Ok(())
    }

    /// Font at a loaded size, with the given outline width
    pub fn font(
        &mut self,
        resources: &ResourceManager<'a>,
        size: u16,
        outline: u16,
    ) -> Result<&Font<'a, 'static>, MenuError> {
        if !self.fonts.contains_key(&(size, 0)) {
            return Err(MenuError::FontNotLoaded(size));
        }

        if !self.fonts.contains_key(&(size, outline)) {
            let name = self.name.as_deref().ok_or(MenuError::FontNotLoaded(size))?;
            let mut font = resources.load_font(name, size)?;
            font.set_outline_width(outline);
            self.fonts.insert((size, outline), font);
        }

        self.fonts.get(&(size, outline)).ok_or(MenuError::FontNotLoaded(size))
    }
}

impl Default for FontBook<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TextKey {
    text: String,
    size: u16,
    outline: u16,
    color: (u8, u8, u8, u8),
}

/// Rendered single-line text textures
pub struct TextCache<'a> {
    creator: &'a TextureCreator<WindowContext>,
    entries: HashMap<TextKey, Texture<'a>>,
}

impl<'a> TextCache<'a> {
    pub fn new(creator: &'a TextureCreator<WindowContext>) -> Self {
        TextCache {
            creator,
            entries: HashMap::new(),
        }
    }

    /// Texture for one line of text, rendering it on first request
    ///
    /// `size` and `outline` must match the font passed in.
    pub fn line(
        &mut self,
        font: &Font<'a, 'static>,
        text: &str,
        size: u16,
        outline: u16,
        color: Color,
    ) -> Result<&Texture<'a>, MenuError> {
        let key = TextKey {
            text: text.to_string(),
            size,
            outline,
            color: color.rgba(),
        };

        if !self.entries.contains_key(&key) {
            let surface = font
                .render(text)
                .blended(color)
                .map_err(|e| MenuError::Sdl(e.to_string()))?;
            let texture = self
                .creator
                .create_texture_from_surface(&surface)
                .map_err(|e| MenuError::Sdl(e.to_string()))?;
            self.entries.insert(key.clone(), texture);
        }

        self.entries
            .get(&key)
            .ok_or_else(|| MenuError::Sdl(format!("missing text texture for '{}'", text)))
    }
}

/// Width in pixels of a rendered line
pub fn line_width(font: &Font<'_, 'static>, text: &str) -> Result<u32, MenuError> {
    font.size_of(text)
        .map(|(width, _)| width)
        .map_err(|e| MenuError::Sdl(e.to_string()))
}
