use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::domain::{Grid, GridError, next_generation};

/// Generations advanced per second while running (one step every 100ms)
const DEFAULT_UPDATES_PER_SECOND: f32 = 10.0;

/// Session owns the state the driver loop threads through each frame:
/// the grid, the pause flag, the generation counter, and the randomness
/// source used by `randomize`. There is exactly one session per process.
pub struct Session {
    pub grid: Grid,
    pub is_running: bool,
    pub generation: u64,
    pub updates_per_second: f32,
    update_timer: f32,
    rng: StdRng,
}

impl Session {
    /// Create a new paused session with an all-dead grid
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        Ok(Self::with_rng(Grid::new(rows, cols)?, StdRng::from_os_rng()))
    }

    /// Create a session whose randomize calls are reproducible
    pub fn seeded(rows: usize, cols: usize, seed: u64) -> Result<Self, GridError> {
        Ok(Self::with_rng(
            Grid::new(rows, cols)?,
            StdRng::seed_from_u64(seed),
        ))
    }

    fn with_rng(grid: Grid, rng: StdRng) -> Self {
        Self {
            grid,
            is_running: false,
            generation: 0,
            updates_per_second: DEFAULT_UPDATES_PER_SECOND,
            update_timer: 0.0,
            rng,
        }
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Clear the grid and reset the generation counter
    pub fn clear(mut self) -> Self {
        self.grid.clear();
        self.generation = 0;
        self
    }

    /// Randomize the grid from the session's own source and reset the
    /// generation counter
    pub fn randomize(mut self) -> Self {
        self.grid.randomize(&mut self.rng);
        self.generation = 0;
        self
    }

    /// Advance the simulation by one frame. While paused this is a no-op;
    /// while running the grid steps one generation at the fixed cadence.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.grid = next_generation(&self.grid);
            self.generation += 1;
            self.update_timer = 0.0;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, presets};

    #[test]
    fn test_new_session_starts_paused_and_dead() {
        let session = Session::seeded(10, 10, 1).unwrap();
        assert!(!session.is_running);
        assert_eq!(session.generation, 0);
        assert_eq!(session.grid.count_alive(), 0);
    }

    #[test]
    fn test_invalid_dimensions_propagate() {
        assert!(Session::new(0, 10).is_err());
        assert!(Session::seeded(10, 0, 1).is_err());
    }

    #[test]
    fn test_tick_advances_while_running() {
        let mut session = Session::seeded(10, 10, 1).unwrap();
        presets::blinker().place_on(&mut session.grid, 4, 4);

        session = session.toggle_running().tick(0.2);
        assert_eq!(session.generation, 1);
        // The blinker stood up: (5,5) survives, (5,4) died
        assert_eq!(session.grid.get(5, 5), Ok(Cell::Alive));
        assert_eq!(session.grid.get(5, 4), Ok(Cell::Dead));
    }

    #[test]
    fn test_tick_is_a_noop_while_paused() {
        let mut session = Session::seeded(10, 10, 1).unwrap();
        presets::blinker().place_on(&mut session.grid, 4, 4);
        let before = session.grid.clone();

        session = session.tick(10.0);
        assert_eq!(session.generation, 0);
        assert_eq!(session.grid, before);
    }

    #[test]
    fn test_tick_accumulates_small_frames() {
        let mut session = Session::seeded(10, 10, 1).unwrap();
        presets::blinker().place_on(&mut session.grid, 4, 4);
        session = session.toggle_running();

        // Two 60fps-ish frames fall short of the 100ms cadence
        session = session.tick(0.04).tick(0.04);
        assert_eq!(session.generation, 0);

        session = session.tick(0.04);
        assert_eq!(session.generation, 1);
    }

    #[test]
    fn test_toggle_running_flips() {
        let session = Session::seeded(10, 10, 1).unwrap();
        let session = session.toggle_running();
        assert!(session.is_running);
        let session = session.toggle_running();
        assert!(!session.is_running);
    }

    #[test]
    fn test_clear_resets_grid_and_generation() {
        let mut session = Session::seeded(10, 10, 1).unwrap().randomize();
        presets::blinker().place_on(&mut session.grid, 4, 4);
        session = session.toggle_running().tick(0.2);
        assert!(session.generation > 0);

        session = session.clear();
        assert_eq!(session.grid.count_alive(), 0);
        assert_eq!(session.generation, 0);
        // Clearing does not pause a running session
        assert!(session.is_running);
    }

    #[test]
    fn test_randomize_draws_from_the_owned_seed() {
        let session = Session::seeded(30, 30, 42).unwrap().randomize();

        let mut expected = Grid::new(30, 30).unwrap();
        expected.randomize(&mut StdRng::seed_from_u64(42));
        assert_eq!(session.grid, expected);
    }

    #[test]
    fn test_mutations_apply_while_paused() {
        let mut session = Session::seeded(10, 10, 1).unwrap();
        assert!(!session.is_running);

        session.grid.toggle(3, 3).unwrap();
        assert_eq!(session.grid.get(3, 3), Ok(Cell::Alive));

        session = session.randomize().clear();
        assert_eq!(session.grid.count_alive(), 0);
    }
}
