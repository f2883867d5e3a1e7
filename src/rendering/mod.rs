use macroquad::prelude::*;

use crate::application::Session;
use crate::domain::Grid;
use crate::ui::{BUTTONS_Y, Button, CELL_SIZE, MARGIN};

/// Window fill behind the board and the control panel
pub fn background_color() -> Color {
    Color::from_rgba(128, 128, 128, 255)
}

/// Draw the board: one filled rectangle per cell plus a fixed border
pub fn draw_board(grid: &Grid) {
    let alive_color = Color::from_rgba(255, 255, 0, 255);
    let dead_color = Color::from_rgba(128, 128, 128, 255);
    let border_color = Color::from_rgba(192, 192, 192, 255);

    for (row, col, cell) in grid.iter_cells() {
        let x = MARGIN + col as f32 * CELL_SIZE;
        let y = MARGIN + row as f32 * CELL_SIZE;

        let fill = if cell.is_alive() { alive_color } else { dead_color };
        draw_rectangle(x, y, CELL_SIZE, CELL_SIZE, fill);
        draw_rectangle_lines(x, y, CELL_SIZE, CELL_SIZE, 1.0, border_color);
    }
}

/// Draw the control panel: buttons with hover feedback plus a status line
pub fn draw_controls(state: &Session, buttons: &[Button], mouse_pos: (f32, f32)) {
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let status = if state.is_running { "Running" } else { "Paused" };
    let line = format!(
        "{} | Generation: {} | Alive: {}",
        status,
        state.generation,
        state.grid.count_alive()
    );
    draw_text(&line, MARGIN, BUTTONS_Y - 8.0, 18.0, WHITE);
}
