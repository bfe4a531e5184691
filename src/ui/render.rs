use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::art::ArtKind;
use crate::game::{GameMode, Player};
use crate::scores::HighScore;
use crate::ui::app::{App, Screen};
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    ACCENT, CARD_BACK, CARD_FACE, CARD_MATCHED, CURSOR_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT,
    POPUP_BORDER,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.state();

    frame.render_widget(header_widget(state), header);
    frame.render_widget(Clear, body);
    match app.screen() {
        Screen::Game => frame.render_widget(game_widget(app), body),
        Screen::Configuration => frame.render_widget(configuration_widget(app), body),
        Screen::HighScores => frame.render_widget(high_scores_widget(state), body),
    }
    frame.render_widget(footer_widget(app.screen(), footer), footer);

    if state.is_new_high_score_presented {
        draw_popup(
            frame,
            body,
            "New High Score",
            vec![
                Line::from(format!("You won in {} moves!", state.game.moves)),
                Line::from(""),
                Line::from(format!("Name: {}_", app.name_input())),
                Line::from(""),
                Line::from("Enter: Save   Esc: Skip"),
            ],
        );
    } else if state.is_level_change_confirmation_presented {
        draw_popup(
            frame,
            body,
            "Change Difficulty",
            vec![
                Line::from("A game is in progress."),
                Line::from(format!(
                    "Restart at {} level?",
                    state.configuration.difficulty_level.label()
                )),
                Line::from(""),
                Line::from("y/Enter: Restart   n/Esc: Keep playing"),
            ],
        );
    } else if state.is_two_players_results_presented {
        draw_popup(frame, body, "Results", two_players_results_lines(state));
    }
}

fn header_widget(state: &AppState) -> Paragraph<'static> {
    let game = &state.game;
    let turn = match &game.mode {
        GameMode::SinglePlayer => String::new(),
        GameMode::TwoPlayers { current, .. } => format!("  │  {}", current.label()),
    };
    let line = Line::from(vec![
        Span::styled("Memoiry", Style::default().fg(ACCENT)),
        Span::styled(
            format!(
                "  │  {}  │  Moves: {}  │  Pairs: {}/{}{}",
                game.level.label(),
                game.moves,
                game.discovered_arts.len(),
                game.level.pairs_count(),
                turn,
            ),
            Style::default().fg(HEADER_TEXT),
        ),
    ]);
    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn game_widget(app: &App) -> Paragraph<'static> {
    let state = app.state();
    let columns = app.grid_columns();
    let cursor = app.card_cursor();
    let mut lines = vec![Line::from("")];

    for row in state.game.cards.chunks(columns) {
        let mut spans = vec![Span::raw("  ")];
        for card in row {
            let (text, color) = if !card.is_face_up {
                (" [ ? ] ".to_string(), CARD_BACK)
            } else if state.game.is_discovered(card.art) {
                (format!(" [ {} ] ", card.art.symbol()), CARD_MATCHED)
            } else {
                (format!(" [ {} ] ", card.art.symbol()), CARD_FACE)
            };
            let mut style = Style::default().fg(color);
            if card.id == cursor {
                style = style.bg(CURSOR_HIGHLIGHT).add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(text, style));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if state.game.is_game_over && !state.game.mode.is_two_players() {
        lines.push(Line::from(Span::styled(
            format!("  You won in {} moves!", state.game.moves),
            Style::default().fg(ACCENT),
        )));
    }

    Paragraph::new(lines)
}

fn configuration_widget(app: &App) -> Paragraph<'static> {
    let state = app.state();
    let cursor = app.art_cursor();
    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "  Difficulty: {}   (l to change)",
                state.configuration.difficulty_level.label()
            ),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(format!(
            "  Selected arts: {} (minimum 10)",
            state.configuration.selected_arts.len()
        )),
        Line::from(""),
    ];

    for (index, art) in ArtKind::ALL.into_iter().enumerate() {
        let selected = state.configuration.is_selected(art);
        let marker = if selected { "[x]" } else { "[ ]" };
        let mut style = Style::default().fg(if selected { CARD_FACE } else { CARD_BACK });
        if index == cursor {
            style = style.bg(CURSOR_HIGHLIGHT).add_modifier(Modifier::BOLD);
        }
        lines.push(Line::from(Span::styled(
            format!("  {} {} {}", marker, art.symbol(), art.label()),
            style,
        )));
    }

    Paragraph::new(lines)
}

fn high_scores_widget(state: &AppState) -> Paragraph<'static> {
    let mut lines = Vec::new();
    for level in crate::game::DifficultyLevel::ALL {
        lines.push(Line::from(Span::styled(
            format!("  {}", level.label()),
            Style::default().fg(ACCENT),
        )));
        let board = state.boards.board(level);
        if board.is_empty() {
            lines.push(Line::from("    No scores yet."));
        } else {
            for (rank, entry) in board.iter().enumerate() {
                lines.push(score_line(rank, entry));
            }
        }
        lines.push(Line::from(""));
    }
    Paragraph::new(lines)
}

fn score_line(rank: usize, entry: &HighScore) -> Line<'static> {
    Line::from(Span::styled(
        format!("    {:>2}. {:>3} moves  {}", rank + 1, entry.score, entry.name),
        Style::default().fg(HEADER_TEXT),
    ))
}

fn two_players_results_lines(state: &AppState) -> Vec<Line<'static>> {
    let GameMode::TwoPlayers {
        first_player_arts,
        second_player_arts,
        ..
    } = &state.game.mode
    else {
        return vec![Line::from("Game over.")];
    };
    let outcome = match state.game.mode.winner() {
        Some(Player::First) => "Player 1 wins!".to_string(),
        Some(Player::Second) => "Player 2 wins!".to_string(),
        None => "It's a draw!".to_string(),
    };
    vec![
        Line::from(outcome),
        Line::from(""),
        Line::from(format!("Player 1: {} pairs", first_player_arts.len())),
        Line::from(format!("Player 2: {} pairs", second_player_arts.len())),
        Line::from(""),
        Line::from("Enter: Close"),
    ]
}

fn footer_widget(screen: Screen, area: ratatui::layout::Rect) -> Paragraph<'static> {
    let hints = match screen {
        Screen::Game => " Arrows: Move │ Space: Flip │ n: New game │ t: 2 players │ l: Level │ c: Arts │ s: Scores │ q: Quit",
        Screen::Configuration => " Arrows: Move │ Space: Toggle art │ l: Level │ Esc: Back",
        Screen::HighScores => " Esc: Back",
    };
    let version = format!("v{} ", VERSION);

    let hints_width = hints.chars().count();
    let version_width = version.chars().count();
    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(hints_width)
        .saturating_sub(version_width);

    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let line = Line::from(vec![
        Span::styled(hints.to_string(), text_style),
        Span::styled(" ".repeat(padding), text_style),
        Span::styled(version, text_style),
    ]);

    Paragraph::new(line)
        .style(text_style)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}

fn draw_popup(
    frame: &mut Frame<'_>,
    body: ratatui::layout::Rect,
    title: &'static str,
    lines: Vec<Line<'static>>,
) {
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = content_width.saturating_add(4).max(30);
    let height = lines.len().saturating_add(2) as u16;
    let area = centered_rect_by_size(body, width, height);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Left).block(block),
        area,
    );
}
