use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::AppIntent;
use crate::game::GameIntent;
use crate::ui::app::{App, Screen};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // Modal prompts take the keyboard first; the name entry in
    // particular must swallow plain characters.
    if app.state().is_new_high_score_presented {
        match key.code {
            KeyCode::Enter => app.submit_name(),
            KeyCode::Esc => app.cancel_name_entry(),
            KeyCode::Backspace => app.pop_name_char(),
            KeyCode::Char(ch) => app.push_name_char(ch),
            _ => {}
        }
        return;
    }
    if app.state().is_level_change_confirmation_presented {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => app.dispatch(AppIntent::ConfirmLevelChange),
            KeyCode::Char('n') | KeyCode::Esc => app.dispatch(AppIntent::DismissLevelChange),
            _ => {}
        }
        return;
    }
    if app.state().is_two_players_results_presented {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dispatch(AppIntent::DismissTwoPlayersResults);
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.request_quit();
            return;
        }
        KeyCode::Char('c') => {
            app.toggle_screen(Screen::Configuration);
            return;
        }
        KeyCode::Char('s') => {
            app.toggle_screen(Screen::HighScores);
            return;
        }
        KeyCode::Esc => {
            app.show_screen(Screen::Game);
            return;
        }
        _ => {}
    }

    match app.screen() {
        Screen::Game => handle_game_key(app, key),
        Screen::Configuration => handle_configuration_key(app, key),
        Screen::HighScores => {}
    }
}

fn handle_game_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left => app.move_card_cursor(-1, 0),
        KeyCode::Right => app.move_card_cursor(1, 0),
        KeyCode::Up => app.move_card_cursor(0, -1),
        KeyCode::Down => app.move_card_cursor(0, 1),
        KeyCode::Char(' ') | KeyCode::Enter => app.flip_at_cursor(),
        KeyCode::Char('n') => app.dispatch(AppIntent::Game(GameIntent::NewGame)),
        KeyCode::Char('t') => app.dispatch(AppIntent::ToggleGameMode),
        KeyCode::Char('l') => app.cycle_level(),
        _ => {}
    }
}

fn handle_configuration_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.move_art_cursor(-1),
        KeyCode::Down => app.move_art_cursor(1),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_art_at_cursor(),
        KeyCode::Char('l') => app.cycle_level(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}
