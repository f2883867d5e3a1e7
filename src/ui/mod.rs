mod button;

pub use button::Button;

/// Cells per board side (the board is square)
pub const GRID_SIZE: usize = 30;
/// Pixel size of one cell
pub const CELL_SIZE: f32 = 20.0;
/// Blank border around the board
pub const MARGIN: f32 = 20.0;

pub const BUTTON_WIDTH: f32 = 100.0;
pub const BUTTON_HEIGHT: f32 = 30.0;
pub const BUTTON_PADDING: f32 = 20.0;
pub const BUTTON_PANEL_HEIGHT: f32 = 60.0;
pub const BOTTOM_MARGIN: f32 = 20.0;

/// Square board area including its margins
pub const BOARD_SPAN: f32 = GRID_SIZE as f32 * CELL_SIZE + 2.0 * MARGIN;

pub const WINDOW_WIDTH: f32 = BOARD_SPAN;
pub const WINDOW_HEIGHT: f32 = BOARD_SPAN + BUTTON_PANEL_HEIGHT + BOTTOM_MARGIN;

/// Top edge of the button row inside the control panel
pub const BUTTONS_Y: f32 = BOARD_SPAN + MARGIN + 10.0;

/// Left edge of the button row (three buttons, centered)
pub const BUTTONS_X: f32 =
    (BOARD_SPAN - (3.0 * BUTTON_WIDTH + 2.0 * BUTTON_PADDING)) / 2.0;

/// Create the control buttons in their fixed layout
pub fn create_buttons() -> Vec<Button> {
    let step = BUTTON_WIDTH + BUTTON_PADDING;
    vec![
        Button::new(BUTTONS_X, BUTTONS_Y, BUTTON_WIDTH, BUTTON_HEIGHT, "Start/Stop"),
        Button::new(BUTTONS_X + step, BUTTONS_Y, BUTTON_WIDTH, BUTTON_HEIGHT, "Randomize"),
        Button::new(BUTTONS_X + 2.0 * step, BUTTONS_Y, BUTTON_WIDTH, BUTTON_HEIGHT, "Clear"),
    ]
}
