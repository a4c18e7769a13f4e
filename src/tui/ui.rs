//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::app::App;
use noughts_core::{Board, Mode, Player, Position, Square};
use std::rc::Rc;
use strum::IntoEnumIterator;

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = screen_chunks(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_modes(frame, chunks[1], app.session().mode());
    draw_board(frame, chunks[2], app.session().board(), app.cursor());

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new("Arrows/1-9: move | Enter/click: play | C: vs Computer | T: Two Player | R: reset | Q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[4]);

    if let Some(message) = app.notice().and_then(|outcome| outcome.announcement()) {
        draw_notice(frame, &message);
    }
}

fn draw_modes(frame: &mut Frame, area: Rect, selected: Mode) {
    let mut spans = Vec::new();
    for (i, mode) in Mode::iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        let style = if mode == selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", mode), style));
    }

    let modes = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Mode"));
    frame.render_widget(modes, area);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position) {
    let rows = board_rows(area);
    for sep in [rows[1], rows[3]] {
        draw_separator(frame, sep);
    }
    for row in [rows[0], rows[2], rows[4]] {
        let cols = row_cols(row);
        for sep in [cols[1], cols[3]] {
            draw_separator_vertical(frame, sep);
        }
    }
    for (pos, cell) in cell_areas(area) {
        draw_cell(frame, cell, board, cursor, pos);
    }
}

/// Returns the board square drawn at screen coordinates `(column, row)`.
pub fn cell_at(screen: Rect, column: u16, row: u16) -> Option<Position> {
    cell_areas(screen_chunks(screen)[2])
        .into_iter()
        .find(|(_, cell)| cell.contains(ScreenPosition::new(column, row)))
        .map(|(pos, _)| pos)
}

fn screen_chunks(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Mode buttons
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(area)
}

/// Three cell rows with separator lines between them.
fn board_rows(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(center_rect(area, 41, 11))
}

fn row_cols(row: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
        ])
        .split(row)
}

fn cell_areas(area: Rect) -> Vec<(Position, Rect)> {
    let rows = board_rows(area);
    Position::ALL
        .iter()
        .map(|&pos| (pos, row_cols(rows[pos.row() * 2])[pos.col() * 2]))
        .collect()
}

/// Occupied squares are drawn as disabled: the cursor on them is grey.
fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, pos: Position) {
    let square = board.get(pos);

    let (symbol, base_style) = match square {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = match (pos == cursor, square) {
        (false, _) => base_style,
        (true, Square::Empty) => base_style.bg(Color::White).fg(Color::Black),
        (true, Square::Occupied(_)) => base_style.bg(Color::DarkGray),
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

/// Modal "Game Over" box over the board.
fn draw_notice(frame: &mut Frame, message: &str) {
    let area = center_rect(frame.area(), 30, 7);
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Enter: OK", Style::default().fg(Color::DarkGray))),
    ];
    let dialog = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Game Over"));

    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
