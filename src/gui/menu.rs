//! Menu Option Lists
//!
//! A menu screen is an ordered list of text options, one of which is
//! highlighted. Each option is a single record (label, size, position,
//! highlight flag) so the list can never drift out of sync with itself.

use sdl2::pixels::Color;

/// Character size of every menu option
pub const OPTION_FONT_SIZE: u16 = 24;

/// Vertical position of the first option
pub const FIRST_OPTION_Y: i32 = 191;

/// Vertical distance between consecutive options
pub const OPTION_SPACING: i32 = 50;

/// Options are placed as if they were this wide when centering
pub const OPTION_BLOCK_WIDTH: u32 = 100;

pub const MAIN_LABELS: [&str; 3] = ["START", "ABOUT", "EXIT"];
pub const DIFFICULTY_LABELS: [&str; 3] = ["EASY", "MEDIUM", "HARD"];

/// Configuration for menu text appearance
#[derive(Debug, Clone)]
pub struct MenuStyle {
    /// Text fill color
    pub text_color: Color,

    /// Outline color of the highlighted option
    pub outline_color: Color,

    /// Outline thickness of the highlighted option in pixels
    pub outline_thickness: u16,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            text_color: Color::RGB(255, 255, 255),
            outline_color: Color::RGB(0, 0, 0),
            outline_thickness: 2,
        }
    }
}

/// A single selectable line of text
#[derive(Debug, Clone, PartialEq)]
pub struct MenuOption {
    pub label: String,
    pub font_size: u16,
    pub position: (i32, i32),
    highlighted: bool,
}

impl MenuOption {
    /// Creates a new, non-highlighted option
    pub fn new(label: impl Into<String>, font_size: u16, position: (i32, i32)) -> Self {
        MenuOption {
            label: label.into(),
            font_size,
            position,
            highlighted: false,
        }
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}

/// An ordered, non-empty list of options
///
/// Option 0 starts highlighted. Highlighting is only changed through
/// [`OptionList::highlight`] and [`OptionList::unhighlight`]; navigation
/// decides which index moves where.
#[derive(Debug, Clone)]
pub struct OptionList {
    options: Vec<MenuOption>,
}

impl OptionList {
    /// Creates a list from the given options, highlighting the first one
    pub fn new(mut options: Vec<MenuOption>) -> Self {
        debug_assert!(!options.is_empty(), "a menu needs at least one option");

        for option in options.iter_mut() {
            option.highlighted = false;
        }
        if let Some(first) = options.first_mut() {
            first.highlighted = true;
        }

        OptionList { options }
    }

    /// Lays the labels out in a column horizontally centered in a window
    /// of the given width
    pub fn centered_column(labels: &[&str], window_width: u32) -> Self {
        let x = (window_width as i32 - OPTION_BLOCK_WIDTH as i32) / 2;

        let options = labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let y = FIRST_OPTION_Y + i as i32 * OPTION_SPACING;
                MenuOption::new(*label, OPTION_FONT_SIZE, (x, y))
            })
            .collect();

        OptionList::new(options)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[cfg(test)]
    pub fn get(&self, index: usize) -> Option<&MenuOption> {
        self.options.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MenuOption> {
        self.options.iter()
    }

    /// Index of the highlighted option, if any
    #[cfg(test)]
    pub fn highlighted_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o.highlighted)
    }

    pub fn highlight(&mut self, index: usize) {
        if let Some(option) = self.options.get_mut(index) {
            option.highlighted = true;
        }
    }

    pub fn unhighlight(&mut self, index: usize) {
        if let Some(option) = self.options.get_mut(index) {
            option.highlighted = false;
        }
    }
}
