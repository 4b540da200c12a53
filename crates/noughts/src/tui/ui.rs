//! Stateless UI rendering.
//!
//! [`draw`] paints the whole screen from [`App`] and returns the
//! [`Hitmap`] of everything it drew, so mouse clicks resolve against the
//! exact rectangles on screen.

use super::app::App;
use super::input::Hitmap;
use noughts_core::{Position, rules};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Width of one board cell, borders included.
pub const CELL_WIDTH: u16 = 9;
/// Height of one board cell, borders included.
pub const CELL_HEIGHT: u16 = 3;
const GAP: u16 = 1;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + GAP * 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + GAP * 2;
const TOGGLE_WIDTH: u16 = 14;
const RESTART_WIDTH: u16 = 13;

/// Renders the screen and returns the click targets.
pub fn draw(frame: &mut Frame, app: &App) -> Hitmap {
    let area = frame.area();
    let palette = app.palette();

    frame.render_widget(Block::default().style(palette.base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title + theme toggle
            Constraint::Length(1),            // Current theme
            Constraint::Length(1),            // Status
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Restart
            Constraint::Length(1),            // Help
        ])
        .split(area);

    let toggle = draw_header(frame, chunks[0], app);

    let theme_line = Line::from(vec![
        Span::raw("Current theme: "),
        Span::styled(
            app.theme().theme().to_string(),
            palette.base().add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(theme_line).alignment(Alignment::Center),
        chunks[1],
    );

    let status = Paragraph::new(app.game().status().to_string())
        .style(palette.accent())
        .alignment(Alignment::Center);
    frame.render_widget(status, chunks[2]);

    let cells = draw_board(frame, chunks[3], app);

    let restart = center_rect(chunks[4], RESTART_WIDTH, 3);
    let button = Paragraph::new("Restart")
        .style(palette.accent())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(palette.border()),
        );
    frame.render_widget(button, restart);

    let help = Paragraph::new("click or 1-9 play · arrows+enter · t theme · r restart · q quit")
        .style(palette.muted())
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);

    Hitmap {
        cells,
        toggle,
        restart,
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) -> Rect {
    let palette = app.palette();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(TOGGLE_WIDTH)])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from("Noughts - Tic Tac Toe"),
        Line::styled(app.theme().toggle_hint(), palette.muted()).alignment(Alignment::Right),
    ])
    .style(palette.accent())
    .alignment(Alignment::Left)
    .block(Block::default().borders(Borders::BOTTOM).border_style(palette.border()));
    frame.render_widget(title, cols[0]);

    let toggle = Paragraph::new(app.theme().toggle_label())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(palette.border()),
        );
    frame.render_widget(toggle, cols[1]);
    cols[1]
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> [Rect; 9] {
    let cells = board_cells(area);
    let winning = rules::winning_line(app.game().board()).map(|(_, line)| line);

    for pos in Position::ALL {
        let highlighted = winning.is_some_and(|line| line.contains(&pos));
        draw_cell(frame, cells[pos.index()], app, pos, highlighted);
    }
    cells
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position, highlighted: bool) {
    let palette = app.palette();
    let cell = app.game().board().get(pos);

    let (symbol, mut style) = match cell.mark() {
        Some(mark) => (mark.to_string(), palette.mark(mark)),
        None => ((pos.index() + 1).to_string(), palette.cell().patch(palette.muted())),
    };
    if highlighted {
        style = style.patch(palette.win());
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border())
        .style(style);
    if pos == app.cursor() {
        block = block
            .border_type(BorderType::Thick)
            .border_style(palette.accent());
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Screen rectangles of the nine cells for a board centred in `area`.
///
/// Cells that don't fit are clipped to `area`, possibly to nothing.
pub fn board_cells(area: Rect) -> [Rect; 9] {
    let board = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    std::array::from_fn(|i| {
        let (row, col) = ((i / 3) as u16, (i % 3) as u16);
        Rect::new(
            board.x + col * (CELL_WIDTH + GAP),
            board.y + row * (CELL_HEIGHT + GAP),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(area)
    })
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width.min(area.width),
        height.min(area.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_cells_do_not_overlap() {
        let cells = board_cells(Rect::new(0, 0, 80, 20));
        for (i, a) in cells.iter().enumerate() {
            assert_eq!((a.width, a.height), (CELL_WIDTH, CELL_HEIGHT));
            for b in &cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
        assert!(cells[0].x < cells[1].x && cells[1].x < cells[2].x);
        assert!(cells[0].y < cells[3].y && cells[3].y < cells[6].y);
    }

    #[test]
    fn test_board_cells_clip_to_small_area() {
        let area = Rect::new(0, 0, 10, 4);
        for cell in board_cells(area) {
            assert!(cell.is_empty() || area.intersection(cell) == cell);
        }
    }
}
