use macroquad::prelude::*;

use crate::application::Session;
use crate::ui::{Button, CELL_SIZE, GRID_SIZE, MARGIN};

/// Process keyboard shortcuts functionally
pub fn process_keyboard_input(state: Session) -> Session {
    type KeyAction = (KeyCode, fn(Session) -> Session);

    let actions: [KeyAction; 3] = [
        (KeyCode::Space, Session::toggle_running),
        (KeyCode::R, Session::randomize),
        (KeyCode::C, Session::clear),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Process control button clicks functionally
pub fn process_button_clicks(
    state: Session,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) -> Session {
    buttons.iter().enumerate().fold(state, |s, (idx, btn)| {
        if !btn.is_clicked(mouse_pos) {
            return s;
        }
        match idx {
            0 => s.toggle_running(),
            1 => s.randomize(),
            2 => s.clear(),
            _ => s,
        }
    })
}

/// Toggle the cell under the cursor on a left click inside the board
pub fn handle_cell_toggle(mut state: Session, mouse_pos: (f32, f32)) -> Session {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return state;
    }

    if let Some((row, col)) = cell_at(mouse_pos) {
        // cell_at only yields coordinates inside the board
        let _ = state.grid.toggle(row, col);
    }
    state
}

/// Map a window position to the board cell under it. Positions over the
/// margins, the control panel, or outside the window map to None; clicks
/// with no valid cell are rejected here, before they reach the grid.
pub fn cell_at(pos: (f32, f32)) -> Option<(usize, usize)> {
    let col = (pos.0 - MARGIN) / CELL_SIZE;
    let row = (pos.1 - MARGIN) / CELL_SIZE;

    if row < 0.0 || col < 0.0 || row >= GRID_SIZE as f32 || col >= GRID_SIZE as f32 {
        return None;
    }
    Some((row as usize, col as usize))
}
