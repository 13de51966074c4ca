use sdl2::event::Event;
use sdl2::keyboard::Keycode;

/// Inputs the menu reacts to
///
/// Raw SDL2 events are translated into these before they reach the
/// navigation state machine, so the menu logic never touches SDL2 types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    /// Down arrow pressed
    Down,
    /// Up arrow pressed
    Up,
    /// Enter pressed
    Confirm,
    /// 'Q' pressed (return to the previous screen)
    Back,
    /// Any other key pressed
    OtherKey,
    /// Any key released
    Release,
    /// Window close requested
    Close,
}

/// Translate one SDL2 event into a menu input
///
/// Returns `None` for events the menu ignores (mouse motion, focus, ...).
pub fn translate_event(event: &Event) -> Option<MenuInput> {
    match event {
        Event::Quit { .. } => Some(MenuInput::Close),
        Event::KeyDown { keycode, .. } => Some(translate_keydown(*keycode)),
        Event::KeyUp { .. } => Some(MenuInput::Release),
        _ => None,
    }
}

fn translate_keydown(keycode: Option<Keycode>) -> MenuInput {
    match keycode {
        Some(Keycode::Down) => MenuInput::Down,
        Some(Keycode::Up) => MenuInput::Up,
        Some(Keycode::Return | Keycode::KpEnter) => MenuInput::Confirm,
        Some(Keycode::Q) => MenuInput::Back,
        _ => MenuInput::OtherKey,
    }
}
