//! Menu Controller
//!
//! Drives the title menu: draws the current screen, feeds input through the
//! navigation state machine and reacts to the committed action. Control
//! returns to the caller when the player picks a difficulty or the window
//! closes.

use super::about::{about_items, ABOUT_HINT_SIZE, ABOUT_TEXT_SIZE};
use super::menu::{
    MenuOption, MenuStyle, OptionList, DIFFICULTY_LABELS, MAIN_LABELS, OPTION_FONT_SIZE,
};
use super::navigation::{Difficulty, MenuAction, MenuModel, MenuState};
use crate::audio::MenuAudio;
use crate::config::{GAME_FONT, MENU_IMAGE};
use crate::error::MenuError;
use crate::input_system::MenuInput;
use crate::render::{BackgroundLayout, MenuSurface, Outline, TextItem};
use log::{debug, info};

pub const RETURN_HINT: &str = "Press 'Q' to Return";
pub const RETURN_HINT_SIZE: u16 = 16;
pub const RETURN_HINT_Y: i32 = 491;

/// Every size the menu draws text at
const FONT_SIZES: [u16; 4] = [
    OPTION_FONT_SIZE,
    RETURN_HINT_SIZE,
    ABOUT_TEXT_SIZE,
    ABOUT_HINT_SIZE,
];

/// The title menu
///
/// Holds a borrowed surface for its whole life. Font and background are
/// loaded at construction; failing to load either is an error. The music
/// loops from construction until `run` returns.
///
/// # Example
///
/// ```ignore
/// let mut menu = MenuController::new(&mut surface, music)?;
/// let window_closed = menu.run()?;
/// if !window_closed {
///     start_game(menu.selected_difficulty());
/// }
/// ```
pub struct MenuController<'w, S: MenuSurface, A: MenuAudio> {
    surface: &'w mut S,
    background: BackgroundLayout,
    model: MenuModel,
    music: A,
    style: MenuStyle,
    return_hint: TextItem,
}

impl<'w, S: MenuSurface, A: MenuAudio> MenuController<'w, S, A> {
    pub fn new(surface: &'w mut S, music: A) -> Result<Self, MenuError> {
        Self::with_style(surface, music, MenuStyle::default())
    }

    pub fn with_style(
        surface: &'w mut S,
        mut music: A,
        style: MenuStyle,
    ) -> Result<Self, MenuError> {
        surface.load_font(GAME_FONT, &FONT_SIZES)?;
        let image_size = surface.load_background(MENU_IMAGE)?;

        let (window_width, window_height) = surface.size();
        let background = BackgroundLayout::cover((window_width, window_height), image_size);
        debug!(
            "Background {}x{} scaled by {} at y={}",
            image_size.0, image_size.1, background.scale, background.offset_y
        );

        let model = MenuModel::new(
            OptionList::centered_column(&MAIN_LABELS, window_width),
            OptionList::centered_column(&DIFFICULTY_LABELS, window_width),
        );

        let hint_width = surface.text_width(RETURN_HINT, RETURN_HINT_SIZE)?;
        let hint_x = (window_width as i32 - hint_width as i32) / 2;
        let return_hint = TextItem::new(
            RETURN_HINT,
            RETURN_HINT_SIZE,
            (hint_x, RETURN_HINT_Y),
            style.text_color,
        );

        music.play_looped();

        Ok(MenuController {
            surface,
            background,
            model,
            music,
            style,
            return_hint,
        })
    }

    /// Choice made on the difficulty screen
    pub fn selected_difficulty(&self) -> Difficulty {
        self.model.selected_difficulty()
    }

    #[cfg(test)]
    pub fn state(&self) -> MenuState {
        self.model.state()
    }

    #[cfg(test)]
    pub fn model(&self) -> &MenuModel {
        &self.model
    }

    #[cfg(test)]
    pub fn background(&self) -> &BackgroundLayout {
        &self.background
    }

    #[cfg(test)]
    pub fn music(&self) -> &A {
        &self.music
    }

    /// Run the menu until the game should start or the window closes
    ///
    /// Returns `true` if the window was closed (don't start the game) and
    /// `false` once a difficulty has been chosen.
    pub fn run(&mut self) -> Result<bool, MenuError> {
        while self.surface.is_open() {
            self.draw_all()?;

            match self.handle_actions() {
                MenuAction::Start => self.model.begin_difficulty_selection(),
                MenuAction::ChooseDifficulty => {
                    self.music.stop();
                    info!("Starting game on {:?}", self.model.selected_difficulty());
                    return Ok(false);
                }
                MenuAction::About => self.show_about()?,
                // Music stops below, once the loop sees the closed window
                MenuAction::Exit => self.surface.close(),
                MenuAction::None => {}
            }
        }

        self.music.stop();
        Ok(true)
    }

    /// Show the credits until 'Q' or window close
    pub fn show_about(&mut self) -> Result<(), MenuError> {
        let items = about_items(self.style.text_color);

        while self.surface.is_open() {
            while let Some(input) = self.surface.poll_input() {
                match input {
                    MenuInput::Close => {
                        self.surface.close();
                        return Ok(());
                    }
                    MenuInput::Back => {
                        // The Enter release that opened this screen was consumed here
                        self.model.release_latch();
                        return Ok(());
                    }
                    _ => {}
                }
            }

            self.surface.clear();
            self.surface.draw_background(&self.background)?;
            for item in &items {
                self.surface.draw_text(item)?;
            }
            self.surface.present();
        }

        Ok(())
    }

    /// Drain one batch of input, stopping at the first committed action
    fn handle_actions(&mut self) -> MenuAction {
        if !self.surface.is_open() {
            return MenuAction::Exit;
        }

        while let Some(input) = self.surface.poll_input() {
            let step = self.model.apply(input);

            if step.close_requested {
                self.surface.close();
            }
            if step.action != MenuAction::None {
                debug!("Menu action: {:?}", step.action);
                return step.action;
            }
        }

        MenuAction::None
    }

    fn draw_all(&mut self) -> Result<(), MenuError> {
        if !self.surface.is_open() {
            return Ok(());
        }

        self.surface.clear();
        self.surface.draw_background(&self.background)?;

        let state = self.model.state();
        let options = match state {
            MenuState::Main => self.model.main_options(),
            MenuState::Difficulty => self.model.difficulty_options(),
        };
        for option in options.iter() {
            let item = option_text(&self.style, option);
            self.surface.draw_text(&item)?;
        }

        if state == MenuState::Difficulty {
            self.surface.draw_text(&self.return_hint)?;
        }

        self.surface.present();
        Ok(())
    }
}

fn option_text(style: &MenuStyle, option: &MenuOption) -> TextItem {
    let item = TextItem::new(
        option.label.clone(),
        option.font_size,
        option.position,
        style.text_color,
    );

    if option.is_highlighted() {
        item.with_outline(Outline {
            thickness: style.outline_thickness,
            color: style.outline_color,
        })
    } else {
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::about::ABOUT_HINT;
    use std::collections::VecDeque;

    const WINDOW: (u32, u32) = (1024, 768);
    const IMAGE: (u32, u32) = (512, 512);

    /// One presented frame
    #[derive(Debug, Default, Clone)]
    struct Frame {
        background: bool,
        texts: Vec<TextItem>,
    }

    impl Frame {
        fn labels(&self) -> Vec<&str> {
            self.texts.iter().map(|t| t.text.as_str()).collect()
        }

        fn outlined(&self) -> Vec<&str> {
            self.texts
                .iter()
                .filter(|t| t.outline.is_some())
                .map(|t| t.text.as_str())
                .collect()
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum MusicCall {
        Play,
        Stop,
    }

    /// Records every playback call in order
    #[derive(Debug, Default)]
    struct RecordingMusic {
        calls: Vec<MusicCall>,
    }

    impl MenuAudio for RecordingMusic {
        fn play_looped(&mut self) {
            self.calls.push(MusicCall::Play);
        }

        fn stop(&mut self) {
            self.calls.push(MusicCall::Stop);
        }
    }

    /// In-memory surface fed from a script of input batches
    ///
    /// Each pass of the menu drains one batch. Inputs left over after an
    /// action stay queued for the next pass, like SDL's event queue; a batch
    /// emptied by an action is dropped when the next frame starts. The
    /// surface closes itself once the script runs out.
    struct ScriptedSurface {
        open: bool,
        batches: VecDeque<Vec<MenuInput>>,
        current: Option<VecDeque<MenuInput>>,
        frame: Frame,
        frames: Vec<Frame>,
        font_sizes: Vec<u16>,
        missing_font: bool,
        missing_background: bool,
    }

    impl ScriptedSurface {
        fn new(batches: Vec<Vec<MenuInput>>) -> Self {
            ScriptedSurface {
                open: true,
                batches: batches.into(),
                current: None,
                frame: Frame::default(),
                frames: Vec::new(),
                font_sizes: Vec::new(),
                missing_font: false,
                missing_background: false,
            }
        }
    }

    impl MenuSurface for ScriptedSurface {
        fn is_open(&self) -> bool {
            self.open
        }

        fn close(&mut self) {
            self.open = false;
        }

        fn size(&self) -> (u32, u32) {
            WINDOW
        }

        fn load_background(&mut self, name: &str) -> Result<(u32, u32), MenuError> {
            if self.missing_background {
                return Err(MenuError::UnknownAsset(name.to_string()));
            }
            Ok(IMAGE)
        }

        fn load_font(&mut self, name: &str, sizes: &[u16]) -> Result<(), MenuError> {
            if self.missing_font {
                return Err(MenuError::AssetLoad {
                    name: name.to_string(),
                    path: "missing.ttf".into(),
                    reason: "not found".to_string(),
                });
            }
            self.font_sizes = sizes.to_vec();
            Ok(())
        }

        fn text_width(&mut self, text: &str, _size: u16) -> Result<u32, MenuError> {
            Ok(text.chars().count() as u32 * 8)
        }

        fn clear(&mut self) {
            if self.current.as_ref().is_some_and(|batch| batch.is_empty()) {
                self.current = None;
            }
            self.frame = Frame::default();
        }

        fn draw_background(&mut self, _layout: &BackgroundLayout) -> Result<(), MenuError> {
            self.frame.background = true;
            Ok(())
        }

        fn draw_text(&mut self, item: &TextItem) -> Result<(), MenuError> {
            self.frame.texts.push(item.clone());
            Ok(())
        }

        fn present(&mut self) {
            assert!(self.open, "presented a frame after the window closed");
            self.frames.push(std::mem::take(&mut self.frame));
        }

        fn poll_input(&mut self) -> Option<MenuInput> {
            if !self.open {
                return None;
            }
            if self.current.is_none() {
                match self.batches.pop_front() {
                    Some(batch) => self.current = Some(batch.into()),
                    None => {
                        self.open = false;
                        return None;
                    }
                }
            }

            let input = self.current.as_mut().and_then(|batch| batch.pop_front());
            if input.is_none() {
                self.current = None;
            }
            input
        }
    }

    use MenuInput::*;
    use MusicCall::{Play, Stop};

    #[test]
    fn test_init_loads_assets_and_layout() {
        let mut surface = ScriptedSurface::new(vec![]);
        {
            let menu = MenuController::new(&mut surface, RecordingMusic::default()).unwrap();

            assert_eq!(menu.state(), MenuState::Main);
            assert_eq!(menu.background().scale, 2.0);
            assert_eq!(menu.background().offset_y, (768.0 - 1024.0) / 2.0);
            assert_eq!(menu.model().main_options().highlighted_index(), Some(0));
            assert_eq!(menu.model().difficulty_options().highlighted_index(), Some(0));
        }
        assert_eq!(surface.font_sizes, vec![24, 16, 15, 18]);
    }

    #[test]
    fn test_missing_font_is_fatal() {
        let mut surface = ScriptedSurface::new(vec![]);
        surface.missing_font = true;

        let result = MenuController::new(&mut surface, RecordingMusic::default());
        assert!(matches!(result, Err(MenuError::AssetLoad { .. })));
    }

    #[test]
    fn test_missing_background_is_fatal() {
        let mut surface = ScriptedSurface::new(vec![]);
        surface.missing_background = true;

        let result = MenuController::new(&mut surface, RecordingMusic::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_main_screen_frame() {
        let mut surface = ScriptedSurface::new(vec![vec![Close]]);
        {
            let mut menu = MenuController::new(&mut surface, RecordingMusic::default()).unwrap();
            assert!(menu.run().unwrap());
        }

        let frame = &surface.frames[0];
        assert!(frame.background);
        assert_eq!(frame.labels(), vec!["START", "ABOUT", "EXIT"]);
        assert_eq!(frame.outlined(), vec!["START"]);
    }

    #[test]
    fn test_start_then_choose_difficulty() {
        let mut surface = ScriptedSurface::new(vec![
            vec![Confirm],
            vec![Release],
            vec![Down],
            vec![Release],
            vec![Confirm],
        ]);

        let (window_closed, difficulty) = {
            let mut menu = MenuController::new(&mut surface, RecordingMusic::default()).unwrap();
            let closed = menu.run().unwrap();
            (closed, menu.selected_difficulty())
        };

        assert!(!window_closed);
        assert_eq!(difficulty, Difficulty::Medium);
        assert!(surface.open);
        assert_eq!(surface.frames.len(), 5);

        // Difficulty screen shows its options and the centered return hint
        let frame = surface.frames.last().unwrap();
        assert_eq!(frame.labels(), vec!["EASY", "MEDIUM", "HARD", RETURN_HINT]);
        assert_eq!(frame.outlined(), vec!["MEDIUM"]);

        let hint = frame.texts.last().unwrap();
        let hint_width = RETURN_HINT.chars().count() as i32 * 8;
        assert_eq!(hint.position, ((1024 - hint_width) / 2, RETURN_HINT_Y));
        assert_eq!(hint.size, RETURN_HINT_SIZE);
    }

    #[test]
    fn test_window_close_stops_rendering() {
        let mut surface = ScriptedSurface::new(vec![vec![Down], vec![Close, Down, Confirm]]);
        {
            let mut menu = MenuController::new(&mut surface, RecordingMusic::default()).unwrap();
            assert!(menu.run().unwrap());
        }

        assert!(!surface.open);
        assert_eq!(surface.frames.len(), 2);
    }

    #[test]
    fn test_exit_closes_window() {
        let mut surface = ScriptedSurface::new(vec![
            vec![Down, Release],
            vec![Down, Release],
            vec![Confirm],
        ]);
        {
            let mut menu = MenuController::new(&mut surface, RecordingMusic::default()).unwrap();
            assert!(menu.run().unwrap());
            assert_eq!(menu.model().cursor(), 2);
        }

        assert!(!surface.open);
        assert_eq!(surface.frames.len(), 3);
    }

    #[test]
    fn test_held_enter_starts_once() {
        let mut surface = ScriptedSurface::new(vec![
            vec![Confirm],
            vec![Confirm],
            vec![Confirm],
            vec![Close],
        ]);
        {
            let mut menu = MenuController::new(&mut surface, RecordingMusic::default()).unwrap();

            // A second action would have chosen a difficulty and returned false
            assert!(menu.run().unwrap());
            assert_eq!(menu.state(), MenuState::Difficulty);
        }
        assert_eq!(surface.frames.len(), 4);
    }

    #[test]
    fn test_back_from_difficulty() {
        let mut surface = ScriptedSurface::new(vec![
            vec![Confirm, Release],
            vec![Down, Release],
            vec![Back],
            vec![Close],
        ]);
        {
            let mut menu = MenuController::new(&mut surface, RecordingMusic::default()).unwrap();
            assert!(menu.run().unwrap());
            assert_eq!(menu.state(), MenuState::Main);
            assert_eq!(menu.model().cursor(), 0);
        }

        let frame = surface.frames.last().unwrap();
        assert_eq!(frame.labels(), vec!["START", "ABOUT", "EXIT"]);
        assert_eq!(frame.outlined(), vec!["START"]);
    }

    #[test]
    fn test_about_screen_round_trip() {
        let mut surface = ScriptedSurface::new(vec![
            vec![Down, Release],
            vec![Confirm],
            vec![Release],
            vec![Back],
            vec![Close],
        ]);
        {
            let mut menu = MenuController::new(&mut surface, RecordingMusic::default()).unwrap();
            assert!(menu.run().unwrap());
        }

        let about_frames: Vec<&Frame> = surface
            .frames
            .iter()
            .filter(|f| f.labels().contains(&ABOUT_HINT))
            .collect();
        assert!(!about_frames.is_empty());
        assert!(about_frames[0].background);
        assert!(about_frames[0].texts[0].text.starts_with("Game Version 1.0"));

        // Back on the main screen with ABOUT still highlighted
        let frame = surface.frames.last().unwrap();
        assert_eq!(frame.outlined(), vec!["ABOUT"]);
    }

    #[test]
    fn test_close_in_about_ends_run() {
        let mut surface =
            ScriptedSurface::new(vec![vec![Down, Release], vec![Confirm], vec![Close]]);
        {
            let mut menu = MenuController::new(&mut surface, RecordingMusic::default()).unwrap();
            assert!(menu.run().unwrap());
        }
        assert!(!surface.open);
    }

    #[test]
    fn test_closed_window_returns_immediately() {
        let mut surface = ScriptedSurface::new(vec![vec![Confirm]]);
        surface.open = false;
        {
            let mut menu = MenuController::new(&mut surface, RecordingMusic::default()).unwrap();
            assert!(menu.run().unwrap());
        }
        assert!(surface.frames.is_empty());
    }

    #[test]
    fn test_leftover_of_action_batch_costs_no_pass() {
        let mut surface =
            ScriptedSurface::new(vec![vec![Confirm], vec![Release, Down], vec![Close]]);
        {
            let mut menu = MenuController::new(&mut surface, RecordingMusic::default()).unwrap();
            assert!(menu.run().unwrap());
            assert_eq!(menu.model().cursor(), 1);
        }

        assert_eq!(surface.frames.len(), 3);
        assert_eq!(surface.frames[2].outlined(), vec!["MEDIUM"]);
    }

    #[test]
    fn test_music_loops_from_construction() {
        let mut surface = ScriptedSurface::new(vec![]);
        let menu = MenuController::new(&mut surface, RecordingMusic::default()).unwrap();
        assert_eq!(menu.music().calls, vec![Play]);
    }

    #[test]
    fn test_music_stops_on_difficulty_choice() {
        let mut surface = ScriptedSurface::new(vec![vec![Confirm], vec![Release], vec![Confirm]]);
        let mut menu = MenuController::new(&mut surface, RecordingMusic::default()).unwrap();

        assert!(!menu.run().unwrap());
        assert_eq!(menu.music().calls, vec![Play, Stop]);
    }

    #[test]
    fn test_music_stops_on_exit() {
        let mut surface = ScriptedSurface::new(vec![
            vec![Down, Release],
            vec![Down, Release],
            vec![Confirm],
            vec![Close],
        ]);
        {
            let mut menu = MenuController::new(&mut surface, RecordingMusic::default()).unwrap();
            assert!(menu.run().unwrap());
            assert_eq!(menu.music().calls, vec![Play, Stop]);
        }

        // Exit closed the window before the Close batch was reached
        assert_eq!(surface.batches.len(), 1);
    }

    #[test]
    fn test_music_stops_on_window_close() {
        let mut surface = ScriptedSurface::new(vec![vec![Down], vec![Close]]);
        let mut menu = MenuController::new(&mut surface, RecordingMusic::default()).unwrap();

        assert!(menu.run().unwrap());
        assert_eq!(menu.music().calls, vec![Play, Stop]);
    }

    #[test]
    fn test_music_stops_on_close_in_about() {
        let mut surface =
            ScriptedSurface::new(vec![vec![Down, Release], vec![Confirm], vec![Close]]);
        let mut menu = MenuController::new(&mut surface, RecordingMusic::default()).unwrap();

        assert!(menu.run().unwrap());
        assert_eq!(menu.music().calls, vec![Play, Stop]);
    }
}
