/// Drawing surface abstraction for the menu screens
///
/// The menu never talks to SDL2 directly. It asks a [`MenuSurface`] to load
/// its assets, draw a background and text items, present the frame and hand
/// over the next input. `SdlSurface` implements this over a real window; tests
/// use a scripted surface instead.
///
/// # Usage Example
///
/// ```ignore
/// surface.clear();
/// surface.draw_background(&layout)?;
/// surface.draw_text(&TextItem::new("START", 24, (462, 191), Color::WHITE))?;
/// surface.present();
/// ```
use crate::error::MenuError;
use crate::input_system::MenuInput;
use sdl2::pixels::Color;
use sdl2::rect::Rect;

/// Outline drawn around a text item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub thickness: u16,
    pub color: Color,
}

/// One string to draw at a fixed position
///
/// `text` may contain `\n`; each line is drawn below the previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub size: u16,
    pub position: (i32, i32),
    pub color: Color,
    pub outline: Option<Outline>,
}

impl TextItem {
    pub fn new(text: impl Into<String>, size: u16, position: (i32, i32), color: Color) -> Self {
        TextItem {
            text: text.into(),
            size,
            position,
            color,
            outline: None,
        }
    }

    pub fn with_outline(mut self, outline: Outline) -> Self {
        self.outline = Some(outline);
        self
    }
}

/// Where the background image lands in the window
///
/// The image is scaled uniformly so it covers the full window width and is
/// centered vertically (it may overflow above and below).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundLayout {
    /// Scale applied on both axes
    pub scale: f32,
    /// Vertical offset of the image's top edge
    pub offset_y: f32,
    pub image_width: u32,
    pub image_height: u32,
}

impl BackgroundLayout {
    /// `scale = W / Iw`, `offset_y = (H - Ih * scale) / 2`
    pub fn cover(window: (u32, u32), image: (u32, u32)) -> Self {
        let (window_width, window_height) = window;
        let (image_width, image_height) = image;

        let scale = if image_width == 0 {
            1.0
        } else {
            window_width as f32 / image_width as f32
        };
        let scaled_height = image_height as f32 * scale;
        let offset_y = (window_height as f32 - scaled_height) / 2.0;

        BackgroundLayout {
            scale,
            offset_y,
            image_width,
            image_height,
        }
    }

    /// Destination rectangle in window pixels
    pub fn dest_rect(&self) -> Rect {
        Rect::new(
            0,
            self.offset_y.round() as i32,
            (self.image_width as f32 * self.scale).round() as u32,
            (self.image_height as f32 * self.scale).round() as u32,
        )
    }
}

/// Everything the menu needs from a window
///
/// Once [`MenuSurface::is_open`] returns false, drawing and polling are
/// expected to do nothing.
pub trait MenuSurface {
    fn is_open(&self) -> bool;

    fn close(&mut self);

    /// Window size in pixels
    fn size(&self) -> (u32, u32);

    /// Load the background texture by logical name, returning its size
    fn load_background(&mut self, name: &str) -> Result<(u32, u32), MenuError>;

    /// Load the font by logical name at each of the given sizes
    fn load_font(&mut self, name: &str, sizes: &[u16]) -> Result<(), MenuError>;

    /// Rendered width of a single line of text
    fn text_width(&mut self, text: &str, size: u16) -> Result<u32, MenuError>;

    fn clear(&mut self);

    fn draw_background(&mut self, layout: &BackgroundLayout) -> Result<(), MenuError>;

    fn draw_text(&mut self, item: &TextItem) -> Result<(), MenuError>;

    /// Show the frame
    fn present(&mut self);

    /// Next pending input, or `None` when the queue is drained
    fn poll_input(&mut self) -> Option<MenuInput>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_scales_to_window_width() {
        let layout = BackgroundLayout::cover((1024, 768), (512, 512));

        assert_eq!(layout.scale, 2.0);
        // (768 - 1024) / 2
        assert_eq!(layout.offset_y, -128.0);
        assert_eq!(layout.dest_rect(), Rect::new(0, -128, 1024, 1024));
    }

    #[test]
    fn test_cover_short_image_centered() {
        let layout = BackgroundLayout::cover((800, 600), (1600, 600));

        assert_eq!(layout.scale, 0.5);
        // (600 - 300) / 2
        assert_eq!(layout.offset_y, 150.0);
        assert_eq!(layout.dest_rect(), Rect::new(0, 150, 800, 300));
    }

    #[test]
    fn test_cover_zero_width_image() {
        let layout = BackgroundLayout::cover((800, 600), (0, 0));
        assert_eq!(layout.scale, 1.0);
        assert_eq!(layout.offset_y, 300.0);
    }

    #[test]
    fn test_text_item_outline() {
        let outline = Outline {
            thickness: 2,
            color: Color::RGB(0, 0, 0),
        };
        let item =
            TextItem::new("START", 24, (0, 0), Color::RGB(255, 255, 255)).with_outline(outline);
        assert_eq!(item.outline, Some(outline));
    }
}
