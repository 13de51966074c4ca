//! Menu Navigation State Machine
//!
//! [`step`] is a pure function from the current navigation state and one
//! input to the next state plus an optional action. [`MenuModel`] owns the
//! two option lists and applies each step, moving the highlight along with
//! the cursor.

use super::menu::OptionList;
use crate::input_system::MenuInput;
use log::debug;

/// Which option list is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Main,
    Difficulty,
}

/// Outcome of one input-polling pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    None,
    Start,
    ChooseDifficulty,
    About,
    Exit,
}

impl MenuAction {
    /// Action bound to a main menu index
    fn for_main_option(index: usize) -> Self {
        match index {
            0 => MenuAction::Start,
            1 => MenuAction::About,
            2 => MenuAction::Exit,
            _ => MenuAction::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    fn for_option(index: usize) -> Option<Self> {
        match index {
            0 => Some(Difficulty::Easy),
            1 => Some(Difficulty::Medium),
            2 => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Debounce flags
///
/// A held key keeps sending key-down events. Once a navigation key fires,
/// `pressed` blocks further navigation until any key is released;
/// `selected` does the same for Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Latch {
    pub pressed: bool,
    pub selected: bool,
}

/// Everything the state machine reads and writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub state: MenuState,
    pub cursor: usize,
    pub latch: Latch,
}

impl Navigation {
    pub fn new() -> Self {
        Navigation {
            state: MenuState::Main,
            cursor: 0,
            latch: Latch::default(),
        }
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of feeding one input to [`step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub next: Navigation,
    pub action: MenuAction,
    /// Set when an option of the difficulty list was confirmed
    pub difficulty: Option<Difficulty>,
    pub close_requested: bool,
}

/// Advance the navigation state by one input
///
/// `option_count` is the length of the list active in `nav.state`.
pub fn step(nav: Navigation, input: MenuInput, option_count: usize) -> Step {
    let mut result = Step {
        next: nav,
        action: MenuAction::None,
        difficulty: None,
        close_requested: false,
    };
    let next = &mut result.next;

    match input {
        MenuInput::Close => result.close_requested = true,
        MenuInput::Release => next.latch = Latch::default(),
        _ if nav.latch.pressed => {}
        MenuInput::Down => {
            if nav.cursor + 1 < option_count {
                next.cursor += 1;
            }
            next.latch.pressed = true;
        }
        MenuInput::Up => {
            if nav.cursor > 0 {
                next.cursor -= 1;
            }
            next.latch.pressed = true;
        }
        MenuInput::Confirm if !nav.latch.selected => {
            next.latch = Latch {
                pressed: true,
                selected: true,
            };

            match nav.state {
                MenuState::Main => result.action = MenuAction::for_main_option(nav.cursor),
                MenuState::Difficulty => {
                    if let Some(difficulty) = Difficulty::for_option(nav.cursor) {
                        result.difficulty = Some(difficulty);
                        result.action = MenuAction::ChooseDifficulty;
                    }
                }
            }
        }
        MenuInput::Back if nav.state == MenuState::Difficulty => {
            next.state = MenuState::Main;
            next.cursor = 0;
        }
        _ => {}
    }

    result
}

/// Option lists plus navigation state
#[derive(Debug, Clone)]
pub struct MenuModel {
    main: OptionList,
    difficulty: OptionList,
    nav: Navigation,
    selected_difficulty: Difficulty,
}

impl MenuModel {
    pub fn new(main: OptionList, difficulty: OptionList) -> Self {
        MenuModel {
            main,
            difficulty,
            nav: Navigation::new(),
            selected_difficulty: Difficulty::default(),
        }
    }

    pub fn state(&self) -> MenuState {
        self.nav.state
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.nav.cursor
    }

    #[cfg(test)]
    pub fn latch(&self) -> Latch {
        self.nav.latch
    }

    pub fn selected_difficulty(&self) -> Difficulty {
        self.selected_difficulty
    }

    pub fn main_options(&self) -> &OptionList {
        &self.main
    }

    pub fn difficulty_options(&self) -> &OptionList {
        &self.difficulty
    }

    /// The list navigated in the current state
    pub fn active_options(&self) -> &OptionList {
        self.options(self.nav.state)
    }

    fn options(&self, state: MenuState) -> &OptionList {
        match state {
            MenuState::Main => &self.main,
            MenuState::Difficulty => &self.difficulty,
        }
    }

    fn options_mut(&mut self, state: MenuState) -> &mut OptionList {
        match state {
            MenuState::Main => &mut self.main,
            MenuState::Difficulty => &mut self.difficulty,
        }
    }

    /// Feed one input through the state machine
    pub fn apply(&mut self, input: MenuInput) -> Step {
        let result = step(self.nav, input, self.active_options().len());
        self.move_to(result.next.state, result.next.cursor);
        self.nav.latch = result.next.latch;

        if let Some(difficulty) = result.difficulty {
            debug!("Difficulty selected: {:?}", difficulty);
            self.selected_difficulty = difficulty;
        }

        result
    }

    /// Switch from the main list to the difficulty list
    pub fn begin_difficulty_selection(&mut self) {
        self.move_to(MenuState::Difficulty, 0);
    }

    /// Clear the debounce flags
    pub fn release_latch(&mut self) {
        self.nav.latch = Latch::default();
    }

    /// Move the cursor, transferring the highlight from the old option to
    /// the new one
    fn move_to(&mut self, state: MenuState, cursor: usize) {
        if state == self.nav.state && cursor == self.nav.cursor {
            return;
        }
        if state != self.nav.state {
            debug!("Menu state {:?} -> {:?}", self.nav.state, state);
        }

        let (old_state, old_cursor) = (self.nav.state, self.nav.cursor);
        self.options_mut(old_state).unhighlight(old_cursor);
        self.options_mut(state).highlight(cursor);

        self.nav.state = state;
        self.nav.cursor = cursor;
    }
}
