//! Owned simulation state advanced one generation at a time.

use crate::grid::Grid;
use crate::patterns;
use crate::stepper::{self, StepStats};
use life_core::{Coord, Error, Result, RunMode, WorldConfig};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::ControlFlow;
use tracing::{debug, info, instrument};

pub struct Simulation {
    grid: Grid,
    generation: u64,
}

impl Simulation {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
        }
    }

    /// Seed a grid from configuration: the named pattern centred on an
    /// empty grid if one is configured, random cells otherwise
    pub fn from_config<R: Rng + ?Sized>(config: &WorldConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let grid = match &config.pattern {
            Some(name) => {
                let pattern =
                    patterns::find(name).ok_or_else(|| Error::UnknownPattern(name.clone()))?;
                let (rows, cols) = pattern.extent();
                let mut grid = Grid::new(config.width, config.height)?;
                let origin = Coord::new((config.height - rows) / 2, (config.width - cols) / 2);
                grid.place(pattern, origin)?;
                info!(pattern = pattern.name, %origin, "Seeded grid with pattern");
                grid
            }
            None => Grid::from_config(config, rng)?,
        };

        info!(
            width = grid.width(),
            height = grid.height(),
            population = grid.population(),
            "Created world"
        );
        Ok(Self::new(grid))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of steps taken so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the grid with its successor
    pub fn step(&mut self) -> StepStats {
        let (next, stats) = stepper::advance(&self.grid);
        self.grid = next;
        self.generation += 1;

        debug!(
            generation = self.generation,
            population = stats.population(),
            births = stats.births,
            underpopulation_deaths = stats.underpopulation_deaths,
            overpopulation_deaths = stats.overpopulation_deaths,
            "Advanced generation"
        );
        stats
    }

    /// Run until `mode` is exhausted or `on_frame` breaks.
    ///
    /// `on_frame` sees each generation before it is stepped.
    #[instrument(skip(self, on_frame))]
    pub fn run<F>(&mut self, mode: RunMode, mut on_frame: F) -> RunSummary
    where
        F: FnMut(&Grid, u64) -> ControlFlow<()>,
    {
        let start = self.generation;
        let mut last_stats = None;

        while mode.allows(self.generation - start) {
            if on_frame(&self.grid, self.generation).is_break() {
                break;
            }
            last_stats = Some(self.step());
        }

        let summary = self.summarize(start, last_stats);
        info!(
            generations = summary.generations,
            final_population = summary.final_population,
            extinct = summary.is_extinct(),
            still = summary.still,
            "Run complete"
        );
        summary
    }

    /// Summary of the steps taken since generation `start`, given the stats
    /// of the most recent step
    pub fn summarize(&self, start: u64, last_stats: Option<StepStats>) -> RunSummary {
        RunSummary {
            generations: self.generation - start,
            final_generation: self.generation,
            final_population: self.grid.population(),
            still: last_stats.map_or(false, |stats| stats.is_still()),
        }
    }
}

/// Outcome of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Steps taken during this run
    pub generations: u64,
    pub final_generation: u64,
    pub final_population: usize,
    /// The last step changed nothing
    pub still: bool,
}

impl RunSummary {
    pub fn is_extinct(&self) -> bool {
        self.final_population == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn blinker_world() -> Simulation {
        let config = WorldConfig {
            width: 7,
            height: 5,
            pattern: Some("blinker".to_string()),
            ..Default::default()
        };
        Simulation::from_config(&config, &mut ChaCha8Rng::seed_from_u64(0)).unwrap()
    }

    #[test]
    fn test_simulation_creation() {
        let config = WorldConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let sim = Simulation::from_config(&config, &mut rng).unwrap();
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.grid().width(), 20);
        assert_eq!(sim.grid().height(), 10);
    }

    #[test]
    fn test_pattern_is_centred() {
        let sim = blinker_world();
        let grid = sim.grid();

        assert_eq!(grid.population(), 3);
        assert!(grid.is_alive(Coord::new(2, 2)));
        assert!(grid.is_alive(Coord::new(2, 3)));
        assert!(grid.is_alive(Coord::new(2, 4)));
    }

    #[test]
    fn test_unknown_pattern() {
        let config = WorldConfig {
            pattern: Some("spaceship-factory".to_string()),
            ..Default::default()
        };
        let result = Simulation::from_config(&config, &mut ChaCha8Rng::seed_from_u64(0));
        assert!(matches!(result, Err(Error::UnknownPattern(_))));
    }

    #[test]
    fn test_pattern_larger_than_grid() {
        let config = WorldConfig {
            width: 2,
            height: 2,
            pattern: Some("glider".to_string()),
            ..Default::default()
        };
        let result = Simulation::from_config(&config, &mut ChaCha8Rng::seed_from_u64(0));
        assert!(matches!(result, Err(Error::OutOfBounds(_))));
    }

    #[test]
    fn test_step_advances_generation() {
        let mut sim = blinker_world();
        let initial = sim.grid().clone();

        sim.step();
        assert_eq!(sim.generation(), 1);
        assert_ne!(sim.grid(), &initial);

        sim.step();
        assert_eq!(sim.generation(), 2);
        assert_eq!(sim.grid(), &initial);
    }

    #[test]
    fn test_run_fixed_steps() {
        let mut sim = blinker_world();
        let mut frames = Vec::new();

        let summary = sim.run(RunMode::Steps(5), |_, generation| {
            frames.push(generation);
            ControlFlow::Continue(())
        });

        assert_eq!(frames, vec![0, 1, 2, 3, 4]);
        assert_eq!(summary.generations, 5);
        assert_eq!(summary.final_generation, 5);
        assert_eq!(summary.final_population, 3);
        assert!(!summary.still);
        assert!(!summary.is_extinct());
    }

    #[test]
    fn test_run_zero_steps() {
        let mut sim = blinker_world();
        let summary = sim.run(RunMode::Steps(0), |_, _| ControlFlow::Continue(()));

        assert_eq!(summary.generations, 0);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_run_unbounded_until_break() {
        let mut sim = blinker_world();

        let summary = sim.run(RunMode::Unbounded, |_, generation| {
            if generation == 50 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        assert_eq!(summary.generations, 50);
        assert_eq!(sim.generation(), 50);
    }

    #[test]
    fn test_run_reports_still_life() {
        let config = WorldConfig {
            pattern: Some("block".to_string()),
            ..Default::default()
        };
        let mut sim = Simulation::from_config(&config, &mut ChaCha8Rng::seed_from_u64(0)).unwrap();

        let summary = sim.run(RunMode::Steps(3), |_, _| ControlFlow::Continue(()));
        assert!(summary.still);
        assert_eq!(summary.final_population, 4);
    }

    #[test]
    fn test_run_reports_extinction() {
        let config = WorldConfig {
            spawn_probability: 0.0,
            ..Default::default()
        };
        let mut sim = Simulation::from_config(&config, &mut ChaCha8Rng::seed_from_u64(0)).unwrap();

        let summary = sim.run(RunMode::Steps(1), |_, _| ControlFlow::Continue(()));
        assert!(summary.is_extinct());
        assert!(summary.still);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = WorldConfig::default();
        let mut first = Simulation::from_config(&config, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        let mut second = Simulation::from_config(&config, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();

        first.run(RunMode::Steps(20), |_, _| ControlFlow::Continue(()));
        second.run(RunMode::Steps(20), |_, _| ControlFlow::Continue(()));
        assert_eq!(first.grid(), second.grid());
    }
}
