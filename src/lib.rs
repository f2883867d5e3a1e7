// Domain layer - grid and transition rule
pub mod domain;

// Application layer - session coordination
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, GridError, Pattern, next_generation, presets};
pub use application::Session;
pub use ui::Button;
