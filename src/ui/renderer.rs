use std::rc::Rc;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::BOARD_SIZE;
use crate::game::sequencer::SequencerState;
use crate::game::snapshot::{RenderCell, Snapshot};
use crate::game::Pos;
use crate::input::Cursor;

// Terminal columns/rows per grid cell
const CELL_WIDTH: u16 = 4;
const CELL_HEIGHT: u16 = 2;
const PANEL_WIDTH: u16 = 18;

const BOARD_WIDTH: u16 = BOARD_SIZE as u16 * CELL_WIDTH + 2;
const BOARD_HEIGHT: u16 = BOARD_SIZE as u16 * CELL_HEIGHT + 2;

pub fn ui(f: &mut Frame, snapshot: &Snapshot, cursor: &Cursor) {
    let chunks = columns(f.size());

    render_board(f, snapshot, cursor, chunks[2]);
    render_score(f, snapshot, chunks[1]);
    render_help(f, chunks[3]);
}

fn columns(size: Rect) -> Rc<[Rect]> {
    // Create a centered layout
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),               // Flexible top space
            Constraint::Length(BOARD_HEIGHT), // Game board height
            Constraint::Min(1),               // Flexible bottom space
        ])
        .split(size);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),              // Left margin
            Constraint::Length(PANEL_WIDTH), // Score panel
            Constraint::Length(BOARD_WIDTH), // Game board
            Constraint::Length(PANEL_WIDTH), // Help panel
            Constraint::Min(1),              // Right margin
        ])
        .split(vertical_chunks[1])
}

/// Where the grid (including its border) is drawn inside a frame of `size`.
pub fn board_area(size: Rect) -> Rect {
    columns(size)[2]
}

/// Maps a terminal position to the grid cell drawn there, if any.
pub fn cell_at(board_area: Rect, column: u16, row: u16) -> Option<Pos> {
    let left = board_area.x + 1;
    let top = board_area.y + 1;
    if column < left || row < top {
        return None;
    }

    let x = usize::from((column - left) / CELL_WIDTH);
    let y = usize::from((row - top) / CELL_HEIGHT);
    let pos = Pos::new(x, y);
    pos.in_bounds().then_some(pos)
}

fn render_board(f: &mut Frame, snapshot: &Snapshot, cursor: &Cursor, area: Rect) {
    // Cells in flight are drawn in the slot they are closest to
    let mut grid: [[Option<RenderCell>; BOARD_SIZE]; BOARD_SIZE] = [[None; BOARD_SIZE]; BOARD_SIZE];
    for cell in &snapshot.cells {
        let slot = cell.nearest_slot();
        if slot.in_bounds() {
            grid[slot.y][slot.x] = Some(*cell);
        }
    }

    let mut board_lines = Vec::new();
    for (y, row) in grid.iter().enumerate() {
        let mut glyph_spans = Vec::new();
        let mut pad_spans = Vec::new();
        for (x, cell) in row.iter().enumerate() {
            let pos = Pos::new(x, y);
            let style = slot_style(snapshot, cursor, pos);
            match cell {
                Some(cell) if cell.opacity >= 0.15 => {
                    let mut glyph_style = style.fg(cell.token.color());
                    if cell.opacity < 0.6 {
                        glyph_style = glyph_style.add_modifier(Modifier::DIM);
                    }
                    glyph_spans.push(Span::styled(format!(" {} ", cell.token.glyph()), glyph_style));
                }
                // Faded out, or waiting for a refill
                _ => glyph_spans.push(Span::styled("    ", style)),
            }
            pad_spans.push(Span::styled("    ", style));
        }
        board_lines.push(Line::from(glyph_spans));
        board_lines.push(Line::from(pad_spans));
    }

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default().borders(Borders::ALL).title("tcrush"));

    f.render_widget(board_widget, area);
}

fn slot_style(snapshot: &Snapshot, cursor: &Cursor, pos: Pos) -> Style {
    let mut style = if (pos.x + pos.y) % 2 == 0 {
        Style::default().bg(Color::Rgb(28, 28, 28))
    } else {
        Style::default().bg(Color::Rgb(40, 40, 40))
    };

    if let Some(hint) = snapshot.hint.filter(|hint| hint.covers(pos)) {
        let o = hint.opacity.clamp(0.0, 1.0);
        style = style.bg(Color::Rgb((255.0 * o) as u8, (165.0 * o) as u8, 0));
    }
    if snapshot.selected == Some(pos) {
        style = style.bg(Color::Green);
    }
    if cursor.pos == pos {
        style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
    }
    style
}

fn render_score(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let state = match snapshot.state {
        SequencerState::Idle => "Your move",
        SequencerState::SwapAnimating => "Swapping",
        SequencerState::Reverting => "No match",
        SequencerState::Cascading => "Cascade!",
        SequencerState::HintPulsing => "Hint",
    };

    let score_text = vec![
        Line::from(vec![Span::styled("SCORE", Style::default().fg(Color::Cyan))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(
            snapshot.score.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(state, Style::default().fg(Color::Yellow))]),
    ];

    let score_widget = Paragraph::new(score_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(score_widget, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::raw("Click two")]),
        Line::from(vec![Span::raw("neighbours")]),
        Line::from(vec![Span::raw("to swap")]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("Arrows: move")]),
        Line::from(vec![Span::raw("Space: pick")]),
        Line::from(vec![Span::raw("R: restart")]),
        Line::from(vec![Span::raw("Q: quit")]),
    ];

    let help_widget = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .alignment(Alignment::Center);

    f.render_widget(help_widget, area);
}
