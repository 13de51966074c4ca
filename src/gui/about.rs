//! About Screen
//!
//! Static credits shown over the menu background until the player presses
//! 'Q' or closes the window.

use crate::render::TextItem;
use sdl2::pixels::Color;

pub const ABOUT_TEXT: &str = "Game Version 1.0\n\
Developed by\n\n\n\
Andriel Vinicius\n\n   \
Performance Optimizer, Modularizer, Game Designer\n   \
& Developer\n\
\n\n\
Flawbert Lorran\n\n   \
Game Designer, Sound Engineer & Developer\n\
\n\n\
Murilo Costa\n\n   \
Performance Optimizer, Modularizer & Developer\n\
\n\n\
Special thanks to Hadassa Garcia for created the ending background.\
\n\n";

pub const ABOUT_TEXT_SIZE: u16 = 15;
pub const ABOUT_TEXT_POSITION: (i32, i32) = (100, 200);

pub const ABOUT_HINT: &str = "Press `Q` to return";
pub const ABOUT_HINT_SIZE: u16 = 18;
pub const ABOUT_HINT_POSITION: (i32, i32) = (420, 600);

/// Text items of the about screen, drawn in order
pub fn about_items(color: Color) -> [TextItem; 2] {
    [
        TextItem::new(ABOUT_TEXT, ABOUT_TEXT_SIZE, ABOUT_TEXT_POSITION, color),
        TextItem::new(ABOUT_HINT, ABOUT_HINT_SIZE, ABOUT_HINT_POSITION, color),
    ]
}
