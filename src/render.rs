//! Rendering-collaborator descriptors.
//!
//! The console's sprite and background engines live behind the platform
//! boundary. The core hands them a fixed set of sprite placements once per
//! tick (after physics and menu logic settle) plus a background selection
//! on screen transitions; they never read game state directly.

use serde::{Deserialize, Serialize};

use crate::consts::SCREEN_WIDTH;
use crate::menu::{Language, Screen};
use crate::sim::GameState;

/// The five sprite slots of a running match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteId {
    Ball,
    PaddleLeft,
    PaddleRight,
    ScoreLeft,
    ScoreRight,
}

/// One sprite-engine write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpritePlacement {
    pub id: SpriteId,
    pub x: i32,
    pub y: i32,
    pub visible: bool,
    /// Tile frame index; score sprites carry the score as their digit frame.
    pub frame: u8,
}

/// Opaque handles to the background images the renderer owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackgroundArt {
    LanguageMenu,
    MainMenuEnglish,
    MainMenuSpanish,
    MainMenuBasque,
    GameField,
}

/// Menu art lookup keyed by (screen, language). Replaces the switch
/// ladders the original grew per revision.
pub fn background_for(screen: Screen, language: Language) -> BackgroundArt {
    match (screen, language) {
        (Screen::LanguageMenu, _) => BackgroundArt::LanguageMenu,
        (Screen::MainMenu, Language::English) => BackgroundArt::MainMenuEnglish,
        (Screen::MainMenu, Language::Spanish) => BackgroundArt::MainMenuSpanish,
        (Screen::MainMenu, Language::Basque) => BackgroundArt::MainMenuBasque,
        (Screen::OnePlayerGame | Screen::TwoPlayerGame, _) => BackgroundArt::GameField,
    }
}

/// Everything the renderer consumes for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameOutput {
    /// Sprite writes; empty outside gameplay screens
    pub placements: Vec<SpritePlacement>,
    /// Set on the tick a screen transition occurred
    pub background: Option<BackgroundArt>,
}

/// Post-tick sprite snapshot for an active match. The ball slot stays in
/// the list when hidden so the engine can blank it.
pub fn game_sprites(state: &GameState) -> Vec<SpritePlacement> {
    let half = SCREEN_WIDTH as i32 / 2;
    vec![
        SpritePlacement {
            id: SpriteId::Ball,
            x: state.ball.pos.x as i32,
            y: state.ball.pos.y as i32,
            visible: state.ended.is_none(),
            frame: 0,
        },
        SpritePlacement {
            id: SpriteId::PaddleLeft,
            x: state.left.x as i32,
            y: state.left.y as i32,
            visible: true,
            frame: 0,
        },
        SpritePlacement {
            id: SpriteId::PaddleRight,
            x: state.right.x as i32,
            y: state.right.y as i32,
            visible: true,
            frame: 0,
        },
        SpritePlacement {
            id: SpriteId::ScoreLeft,
            x: half - 40,
            y: 8,
            visible: true,
            frame: state.left.score,
        },
        SpritePlacement {
            id: SpriteId::ScoreRight,
            x: half + 8,
            y: 8,
            visible: true,
            frame: state.right.score,
        },
    ]
}
