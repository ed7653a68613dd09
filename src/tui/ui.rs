//! Stateless UI rendering for the match screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use strictly_tictactoe::{Cell, GameEngine, Player, Position, RoundStatus};

use super::app::App;
use crate::render::EMPTY_HISTORY;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board and sidebar
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app.engine());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(40)])
        .split(chunks[1]);

    draw_play_area(frame, body[0], app);
    draw_sidebar(frame, body[1], app);
    draw_controls(frame, chunks[2], app);
}

fn draw_header(frame: &mut Frame, area: Rect, engine: &GameEngine) {
    let title = Line::from(vec![
        Span::styled(
            format!("Round {}", engine.round()),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            "Strictly Tic-Tac-Toe",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    ]);
    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn draw_play_area(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(9)])
        .split(area);

    let engine = app.engine();
    let status_style = match engine.status() {
        RoundStatus::InProgress { to_move } => Style::default().fg(player_color(to_move)),
        RoundStatus::Won { player, .. } => Style::default()
            .fg(player_color(player))
            .add_modifier(Modifier::BOLD),
        RoundStatus::Draw => Style::default().fg(Color::Yellow),
    };
    let status_text = match app.notice() {
        Some(notice) => format!("{}  ({})", engine.status(), notice),
        None => engine.status().to_string(),
    };
    let status = Paragraph::new(status_text)
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, rows[0]);

    draw_board(frame, rows[1], app);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 24, 9);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); 3])
        .split(board_area);

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(7), Constraint::Length(1)].repeat(3))
            .split(*row_area);
        for col in 0..3 {
            if let Some(pos) = Position::from_row_col(row, col) {
                draw_cell(frame, cols[col * 2], app, pos);
            }
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let engine = app.engine();
    let (symbol, mut style) = match engine.board().at(pos) {
        Cell::Empty => (
            (pos.index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(player) => (
            player.to_string(),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
    };

    let border_style = if engine
        .winning_line()
        .is_some_and(|line| line.contains(pos.index()))
    {
        style = style.bg(Color::Green).fg(Color::Black);
        Style::default().fg(Color::Green)
    } else if pos == *app.cursor() && !engine.is_round_over() {
        style = style.add_modifier(Modifier::REVERSED);
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cell = Paragraph::new(Line::from(Span::styled(format!(" {} ", symbol), style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(cell, area);
}

fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    let scores = app.engine().scoreboard();
    let scoreboard = Paragraph::new(vec![
        score_line("Player X", *scores.x_wins(), player_color(Player::X)),
        score_line("Player O", *scores.o_wins(), player_color(Player::O)),
        score_line("Draws", *scores.ties(), Color::Yellow),
    ])
    .block(Block::default().title("Scoreboard").borders(Borders::ALL));
    frame.render_widget(scoreboard, chunks[0]);

    let items: Vec<ListItem> = if app.engine().history().is_empty() {
        vec![ListItem::new(EMPTY_HISTORY).style(Style::default().fg(Color::DarkGray))]
    } else {
        app.engine()
            .recent_history()
            .take(*app.history_limit())
            .map(|entry| {
                let color = entry
                    .outcome()
                    .winner()
                    .map_or(Color::Yellow, player_color);
                ListItem::new(Line::from(vec![
                    Span::raw(format!("Round {:<4}", entry.round())),
                    Span::styled(entry.outcome().to_string(), Style::default().fg(color)),
                ]))
            })
            .collect()
    };
    let history = List::new(items).block(Block::default().title("Match History").borders(Borders::ALL));
    frame.render_widget(history, chunks[1]);
}

fn draw_controls(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    for (key, action) in app.controls() {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::raw(format!(" {}  ", action)));
    }
    let controls = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(controls, area);
}

fn score_line(label: &str, value: u32, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{:<10}", label)),
        Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
