//! Title Menu Screens
//!
//! Everything the player sees before the game starts: the main menu, the
//! difficulty selection and the about screen.
//!
//! # Architecture
//!
//! - [`menu`] - option records and ordered option lists
//! - [`navigation`] - pure state machine (state, cursor, input) -> action
//! - [`about`] - static credits screen content
//! - [`controller`] - [`MenuController`], the run loop tying it together
//!
//! Drawing goes through the [`MenuSurface`](crate::render::MenuSurface)
//! trait, so the whole menu can be exercised without a window.
//!
//! # Example Usage
//!
//! ```ignore
//! let mut menu = MenuController::new(&mut surface, music)?;
//!
//! if !menu.run()? {
//!     let difficulty = menu.selected_difficulty();
//!     // hand over to gameplay
//! }
//! ```

pub mod about;
pub mod controller;
pub mod menu;
pub mod navigation;

pub use controller::MenuController;
