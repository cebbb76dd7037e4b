//! Game of Life world.
//!
//! This module implements the bounded grid, the generation stepping rule and
//! the text rendering used by the console driver.

pub mod grid;
pub mod patterns;
pub mod render;
pub mod simulation;
pub mod stepper;

pub use grid::Grid;
pub use patterns::Pattern;
pub use render::render;
pub use simulation::{RunSummary, Simulation};
pub use stepper::{step, Fate, StepStats};
