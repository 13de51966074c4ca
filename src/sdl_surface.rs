//! SDL2 implementation of the menu surface

use crate::error::MenuError;
use crate::input_system::{translate_event, MenuInput};
use crate::render::{BackgroundLayout, MenuSurface, TextItem};
use crate::resources::ResourceManager;
use crate::text::{line_width, FontBook, TextCache};
use log::info;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;
use sdl2::EventPump;
use std::time::Duration;

pub struct SdlSurface<'a> {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    resources: ResourceManager<'a>,
    background: Option<Texture<'a>>,
    fonts: FontBook<'a>,
    text_cache: TextCache<'a>,
    frame_delay: Duration,
    open: bool,
}

impl<'a> SdlSurface<'a> {
    pub fn new(
        canvas: Canvas<Window>,
        event_pump: EventPump,
        resources: ResourceManager<'a>,
        frame_delay: Duration,
    ) -> Self {
        let text_cache = TextCache::new(resources.texture_creator());

        SdlSurface {
            canvas,
            event_pump,
            resources,
            background: None,
            fonts: FontBook::new(),
            text_cache,
            frame_delay,
            open: true,
        }
    }

    fn draw_line(
        &mut self,
        text: &str,
        size: u16,
        outline: u16,
        color: Color,
        position: (i32, i32),
    ) -> Result<(), MenuError> {
        let font = self.fonts.font(&self.resources, size, outline)?;
        let texture = self.text_cache.line(font, text, size, outline, color)?;
        let query = texture.query();

        self.canvas
            .copy(texture, None, Rect::new(position.0, position.1, query.width, query.height))?;
        Ok(())
    }
}

impl MenuSurface for SdlSurface<'_> {
    fn is_open(&self) -> bool {
        self.open
    }

    fn close(&mut self) {
        if self.open {
            info!("Closing window");
            self.open = false;
            self.canvas.window_mut().hide();
        }
    }

    fn size(&self) -> (u32, u32) {
        self.canvas.window().size()
    }

    fn load_background(&mut self, name: &str) -> Result<(u32, u32), MenuError> {
        let texture = self.resources.load_texture(name)?;
        let query = texture.query();
        self.background = Some(texture);
        Ok((query.width, query.height))
    }

    fn load_font(&mut self, name: &str, sizes: &[u16]) -> Result<(), MenuError> {
        self.fonts.load(&self.resources, name, sizes)
    }

    fn text_width(&mut self, text: &str, size: u16) -> Result<u32, MenuError> {
        let font = self.fonts.font(&self.resources, size, 0)?;
        line_width(font, text)
    }

    fn clear(&mut self) {
        if !self.open {
            return;
        }
        self.canvas.set_draw_color(Color::RGB(0, 0, 0));
        self.canvas.clear();
    }

    fn draw_background(&mut self, layout: &BackgroundLayout) -> Result<(), MenuError> {
        if !self.open {
            return Ok(());
        }
        let texture = self.background.as_ref().ok_or(MenuError::BackgroundNotLoaded)?;
        self.canvas.copy(texture, None, layout.dest_rect())?;
        Ok(())
    }

    fn draw_text(&mut self, item: &TextItem) -> Result<(), MenuError> {
        if !self.open {
            return Ok(());
        }

        let line_skip = self.fonts.font(&self.resources, item.size, 0)?.recommended_line_spacing();
        let (x, y) = item.position;

        for (i, line) in item.text.lines().enumerate() {
            // SDL_ttf refuses to render zero-width text
            if line.is_empty() {
                continue;
            }
            let line_y = y + i as i32 * line_skip;

            if let Some(outline) = item.outline {
                let offset = outline.thickness as i32;
                self.draw_line(
                    line,
                    item.size,
                    outline.thickness,
                    outline.color,
                    (x - offset, line_y - offset),
                )?;
            }
            self.draw_line(line, item.size, 0, item.color, (x, line_y))?;
        }

        Ok(())
    }

    fn present(&mut self) {
        if !self.open {
            return;
        }
        self.canvas.present();
        std::thread::sleep(self.frame_delay);
    }

    fn poll_input(&mut self) -> Option<MenuInput> {
        if !self.open {
            return None;
        }
        while let Some(event) = self.event_pump.poll_event() {
            if let Some(input) = translate_event(&event) {
                return Some(input);
            }
        }
        None
    }
}
