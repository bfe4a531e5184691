use std::time::{Duration, Instant};

use crate::app::AppIntent;
use crate::app::AppState;
use crate::art::ArtKind;
use crate::configuration::ConfigurationIntent;
use crate::game::{DifficultyLevel, GameIntent};
use crate::runtime::{Runtime, SystemClock};
use crate::storage::FileStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Game,
    Configuration,
    HighScores,
}

/// UI shell around the engine runtime. Everything here is presentation
/// state; game rules are reached only through `dispatch`.
pub struct App {
    runtime: Runtime<FileStorage, SystemClock>,
    should_quit: bool,
    screen: Screen,
    card_cursor: usize,
    art_cursor: usize,
    name_input: String,
}

impl App {
    pub fn new(runtime: Runtime<FileStorage, SystemClock>) -> Self {
        Self {
            runtime,
            should_quit: false,
            screen: Screen::Game,
            card_cursor: 0,
            art_cursor: 0,
            name_input: String::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    pub fn dispatch(&mut self, intent: AppIntent) {
        self.runtime.dispatch(intent);
    }

    /// Fire engine timers that have come due.
    pub fn run_due(&mut self) {
        self.runtime.run_due();
    }

    /// How long the driver may sleep before the next engine timer.
    pub fn time_to_next_deadline(&self) -> Option<Duration> {
        self.runtime
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn show_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    /// Toggle between the game screen and a secondary screen.
    pub fn toggle_screen(&mut self, screen: Screen) {
        self.screen = if self.screen == screen {
            Screen::Game
        } else {
            screen
        };
    }

    // -- Card grid cursor ---------------------------------------------------

    /// Grid width for the current deck; picked so every level renders as
    /// a compact near-rectangle.
    pub fn grid_columns(&self) -> usize {
        match self.state().game.level {
            DifficultyLevel::Easy => 6,
            DifficultyLevel::Normal => 5,
            DifficultyLevel::Hard => 6,
        }
    }

    pub fn card_cursor(&self) -> usize {
        let count = self.state().game.cards.len();
        if count == 0 {
            0
        } else {
            self.card_cursor.min(count - 1)
        }
    }

    pub fn move_card_cursor(&mut self, dx: isize, dy: isize) {
        let count = self.state().game.cards.len();
        if count == 0 {
            return;
        }
        let columns = self.grid_columns() as isize;
        let cursor = self.card_cursor() as isize + dx + dy * columns;
        self.card_cursor = cursor.clamp(0, count as isize - 1) as usize;
    }

    pub fn flip_at_cursor(&mut self) {
        let id = self.card_cursor();
        self.dispatch(AppIntent::Game(GameIntent::CardReturned(id)));
    }

    // -- Configuration screen ----------------------------------------------

    pub fn art_cursor(&self) -> usize {
        self.art_cursor.min(ArtKind::ALL.len() - 1)
    }

    pub fn move_art_cursor(&mut self, delta: isize) {
        let count = ArtKind::ALL.len() as isize;
        self.art_cursor = (self.art_cursor() as isize + delta).clamp(0, count - 1) as usize;
    }

    pub fn toggle_art_at_cursor(&mut self) {
        let art = ArtKind::ALL[self.art_cursor()];
        let intent = if self.state().configuration.is_selected(art) {
            ConfigurationIntent::UnselectArt(art)
        } else {
            ConfigurationIntent::SelectArt(art)
        };
        self.dispatch(AppIntent::Configuration(intent));
    }

    pub fn cycle_level(&mut self) {
        let next = self.state().configuration.difficulty_level.next();
        self.dispatch(AppIntent::Configuration(
            ConfigurationIntent::ChangeDifficultyLevel(next),
        ));
    }

    // -- High-score name entry ----------------------------------------------

    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    pub fn push_name_char(&mut self, ch: char) {
        if self.name_input.chars().count() < 24 {
            self.name_input.push(ch);
        }
    }

    pub fn pop_name_char(&mut self) {
        self.name_input.pop();
    }

    pub fn submit_name(&mut self) {
        let name = self.name_input.trim().to_string();
        self.name_input.clear();
        if name.is_empty() {
            self.dispatch(AppIntent::DismissNewHighScore);
        } else {
            self.dispatch(AppIntent::SubmitHighScore { name });
        }
    }

    pub fn cancel_name_entry(&mut self) {
        self.name_input.clear();
        self.dispatch(AppIntent::DismissNewHighScore);
    }
}
