//! Screen state machine for the bottom-screen menus.
//!
//! Raw touch contact is funneled through one [`ButtonEdge`] per logical
//! button; transitions fire on `Released` only, so a tap must complete
//! before anything happens. Hit-testing is screen-contextual: the same
//! panel rectangle resolves to different buttons (or none) depending on
//! which screen is up.

use serde::{Deserialize, Serialize};

use crate::input::{ButtonEdge, ButtonPhase, RawInput, TouchRegion};
use crate::render::{BackgroundArt, background_for};
use crate::sim::Mode;

/// Which screen the bottom display is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    LanguageMenu,
    MainMenu,
    OnePlayerGame,
    TwoPlayerGame,
}

impl Screen {
    /// True while a match is on the top screen.
    pub fn in_game(self) -> bool {
        matches!(self, Screen::OnePlayerGame | Screen::TwoPlayerGame)
    }
}

/// Menu language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Spanish,
    Basque,
}

/// Logical menu buttons across all screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuButton {
    LangEnglish,
    LangSpanish,
    LangBasque,
    OnePlayer,
    TwoPlayer,
    Restart,
    Back,
}

const BUTTON_COUNT: usize = 7;

impl MenuButton {
    const ALL: [MenuButton; BUTTON_COUNT] = [
        MenuButton::LangEnglish,
        MenuButton::LangSpanish,
        MenuButton::LangBasque,
        MenuButton::OnePlayer,
        MenuButton::TwoPlayer,
        MenuButton::Restart,
        MenuButton::Back,
    ];

    fn index(self) -> usize {
        match self {
            MenuButton::LangEnglish => 0,
            MenuButton::LangSpanish => 1,
            MenuButton::LangBasque => 2,
            MenuButton::OnePlayer => 3,
            MenuButton::TwoPlayer => 4,
            MenuButton::Restart => 5,
            MenuButton::Back => 6,
        }
    }

    /// Panel rectangle this button occupies on `screen`, if any.
    fn region_on(self, screen: Screen) -> Option<TouchRegion> {
        match (screen, self) {
            (Screen::LanguageMenu, MenuButton::LangEnglish) => {
                Some(TouchRegion::new(64, 40, 128, 24))
            }
            (Screen::LanguageMenu, MenuButton::LangSpanish) => {
                Some(TouchRegion::new(64, 80, 128, 24))
            }
            (Screen::LanguageMenu, MenuButton::LangBasque) => {
                Some(TouchRegion::new(64, 120, 128, 24))
            }
            (Screen::MainMenu, MenuButton::OnePlayer) => Some(TouchRegion::new(64, 48, 128, 32)),
            (Screen::MainMenu, MenuButton::TwoPlayer) => Some(TouchRegion::new(64, 104, 128, 32)),
            (s, MenuButton::Restart) if s.in_game() => Some(TouchRegion::new(16, 160, 96, 24)),
            (s, MenuButton::Back) if s.in_game() => Some(TouchRegion::new(144, 160, 96, 24)),
            _ => None,
        }
    }
}

/// Side effects for the app layer to execute after a menu update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// Hand the renderer a new background selection
    ShowBackground(BackgroundArt),
    /// Create a fresh match in the given mode
    StartGame(Mode),
    /// Re-init the current match (scores to zero, `ended` cleared)
    RestartGame,
    /// Drop the match and clear its sprites
    LeaveGame,
}

/// The menu/screen state machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuMachine {
    screen: Screen,
    language: Language,
    buttons: [ButtonEdge; BUTTON_COUNT],
}

impl Default for MenuMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuMachine {
    /// Boot into the language menu, like every revision that had one.
    pub fn new() -> Self {
        Self {
            screen: Screen::LanguageMenu,
            language: Language::default(),
            buttons: [ButtonEdge::default(); BUTTON_COUNT],
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Advance every button tracker one tick and apply at most one
    /// transition. Returns the side effects to execute, in order.
    pub fn update(&mut self, raw: &RawInput) -> Vec<MenuCommand> {
        let touch = raw.active_touch();
        let screen = self.screen;

        let mut fired = None;
        for button in MenuButton::ALL {
            let active = match (button.region_on(screen), touch) {
                (Some(region), Some(point)) => region.contains(point),
                _ => false,
            };
            if self.buttons[button.index()].advance(active) == ButtonPhase::Released
                && fired.is_none()
            {
                fired = Some(button);
            }
        }

        match fired {
            Some(button) => self.apply(button),
            None => Vec::new(),
        }
    }

    fn apply(&mut self, button: MenuButton) -> Vec<MenuCommand> {
        let mut commands = Vec::new();
        match (self.screen, button) {
            (Screen::LanguageMenu, MenuButton::LangEnglish) => {
                self.language = Language::English;
                self.enter(Screen::MainMenu, &mut commands);
            }
            (Screen::LanguageMenu, MenuButton::LangSpanish) => {
                self.language = Language::Spanish;
                self.enter(Screen::MainMenu, &mut commands);
            }
            (Screen::LanguageMenu, MenuButton::LangBasque) => {
                self.language = Language::Basque;
                self.enter(Screen::MainMenu, &mut commands);
            }
            (Screen::MainMenu, MenuButton::OnePlayer) => {
                self.enter(Screen::OnePlayerGame, &mut commands);
                commands.push(MenuCommand::StartGame(Mode::OnePlayer));
            }
            (Screen::MainMenu, MenuButton::TwoPlayer) => {
                self.enter(Screen::TwoPlayerGame, &mut commands);
                commands.push(MenuCommand::StartGame(Mode::TwoPlayer));
            }
            (s, MenuButton::Restart) if s.in_game() => {
                commands.push(MenuCommand::RestartGame);
            }
            (s, MenuButton::Back) if s.in_game() => {
                commands.push(MenuCommand::LeaveGame);
                self.enter(Screen::MainMenu, &mut commands);
            }
            _ => {}
        }
        commands
    }

    /// Switch screens: drop in-flight taps (the new screen reads the panel
    /// fresh) and queue its background art.
    fn enter(&mut self, screen: Screen, commands: &mut Vec<MenuCommand>) {
        log::info!("screen {:?} -> {:?}", self.screen, screen);
        self.screen = screen;
        for edge in &mut self.buttons {
            edge.reset();
        }
        commands.push(MenuCommand::ShowBackground(background_for(
            screen,
            self.language,
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Keys, TouchPoint};

    fn touching(x: i32, y: i32) -> RawInput {
        RawInput {
            pressed: Keys::TOUCH,
            held: Keys::TOUCH,
            released: Keys::empty(),
            touch: Some(TouchPoint { x, y }),
        }
    }

    fn idle() -> RawInput {
        RawInput::default()
    }

    /// Two ticks of contact, then lift the stylus; the transition fires on
    /// the lift tick.
    fn tap(menu: &mut MenuMachine, x: i32, y: i32) -> Vec<MenuCommand> {
        assert!(menu.update(&touching(x, y)).is_empty());
        assert!(menu.update(&touching(x, y)).is_empty());
        let commands = menu.update(&idle());
        menu.update(&idle());
        commands
    }

    #[test]
    fn language_select_enters_main_menu() {
        let mut menu = MenuMachine::new();
        let commands = tap(&mut menu, 100, 130);
        assert_eq!(menu.screen(), Screen::MainMenu);
        assert_eq!(menu.language(), Language::Basque);
        assert_eq!(
            commands,
            vec![MenuCommand::ShowBackground(BackgroundArt::MainMenuBasque)]
        );
    }

    #[test]
    fn main_menu_starts_the_selected_mode() {
        let mut menu = MenuMachine::new();
        tap(&mut menu, 100, 50); // English
        let commands = tap(&mut menu, 100, 60);
        assert_eq!(menu.screen(), Screen::OnePlayerGame);
        assert_eq!(
            commands,
            vec![
                MenuCommand::ShowBackground(BackgroundArt::GameField),
                MenuCommand::StartGame(Mode::OnePlayer),
            ]
        );

        let mut menu = MenuMachine::new();
        tap(&mut menu, 100, 50);
        let commands = tap(&mut menu, 100, 110);
        assert_eq!(menu.screen(), Screen::TwoPlayerGame);
        assert!(commands.contains(&MenuCommand::StartGame(Mode::TwoPlayer)));
    }

    #[test]
    fn restart_stays_on_the_game_screen() {
        let mut menu = MenuMachine::new();
        tap(&mut menu, 100, 50);
        tap(&mut menu, 100, 60);
        let commands = tap(&mut menu, 20, 170);
        assert_eq!(menu.screen(), Screen::OnePlayerGame);
        assert_eq!(commands, vec![MenuCommand::RestartGame]);
    }

    #[test]
    fn back_returns_to_main_menu() {
        let mut menu = MenuMachine::new();
        tap(&mut menu, 100, 50);
        tap(&mut menu, 100, 110);
        let commands = tap(&mut menu, 150, 170);
        assert_eq!(menu.screen(), Screen::MainMenu);
        assert_eq!(
            commands,
            vec![
                MenuCommand::LeaveGame,
                MenuCommand::ShowBackground(BackgroundArt::MainMenuEnglish),
            ]
        );
    }

    #[test]
    fn same_point_means_different_buttons_per_screen() {
        // (100, 60) is the English row on the language menu but the
        // one-player row on the main menu.
        let mut menu = MenuMachine::new();
        tap(&mut menu, 100, 60);
        assert_eq!(menu.screen(), Screen::MainMenu);
        assert_eq!(menu.language(), Language::English);
        tap(&mut menu, 100, 60);
        assert_eq!(menu.screen(), Screen::OnePlayerGame);
    }

    #[test]
    fn press_alone_does_not_transition() {
        let mut menu = MenuMachine::new();
        for _ in 0..50 {
            assert!(menu.update(&touching(100, 50)).is_empty());
            assert_eq!(menu.screen(), Screen::LanguageMenu);
        }
    }

    #[test]
    fn touches_outside_any_region_are_ignored() {
        let mut menu = MenuMachine::new();
        assert!(tap(&mut menu, 5, 5).is_empty());
        assert!(tap(&mut menu, -20, 400).is_empty());
        assert_eq!(menu.screen(), Screen::LanguageMenu);
    }

    #[test]
    fn game_screens_ignore_menu_regions() {
        let mut menu = MenuMachine::new();
        tap(&mut menu, 100, 50);
        tap(&mut menu, 100, 60);
        // The one-player row rectangle means nothing in-game.
        assert!(tap(&mut menu, 100, 60).is_empty());
        assert_eq!(menu.screen(), Screen::OnePlayerGame);
    }
}
