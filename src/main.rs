use conway_life::{Session, input, rendering, ui};
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: ui::WINDOW_WIDTH as i32,
        window_height: ui::WINDOW_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // The board side is a positive constant, so construction cannot fail
    let mut state = Session::new(ui::GRID_SIZE, ui::GRID_SIZE)
        .expect("board dimensions are positive");
    let buttons = ui::create_buttons();

    info!("starting paused with a {}x{} board", ui::GRID_SIZE, ui::GRID_SIZE);

    loop {
        let mouse_pos = mouse_position();

        // Drain this frame's input into the session
        state = input::process_button_clicks(state, &buttons, mouse_pos);
        state = input::handle_cell_toggle(state, mouse_pos);
        state = input::process_keyboard_input(state);

        // Advance the simulation (no-op while paused)
        state = state.tick(get_frame_time());

        // Render
        clear_background(rendering::background_color());
        rendering::draw_board(&state.grid);
        rendering::draw_controls(&state, &buttons, mouse_pos);

        next_frame().await;
    }
}
