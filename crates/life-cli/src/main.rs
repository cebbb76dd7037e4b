//! Console driver: renders successive generations at a fixed frame rate.

mod console;
mod telemetry;

use anyhow::{Context, Result};
use console::Console;
use life_core::{LifeConfig, RunConfig};
use life_world::{RunSummary, Simulation};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::future::Future;
use std::io::Write;
use tokio::signal;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info, instrument, warn};

/// Environment variable naming a JSON configuration file
const CONFIG_ENV: &str = "LIFE_CONFIG";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    telemetry::init_telemetry()?;

    // Load configuration
    let config = load_config()?;

    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!(seed, "Starting Game of Life");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut simulation = Simulation::from_config(&config.world, &mut rng)
        .context("failed to create world")?;
    let mut console = Console::new(std::io::stdout(), config.render.clone());

    run_loop(&mut simulation, &mut console, &config.run, shutdown_signal()).await?;

    Ok(())
}

/// First command-line argument, then `LIFE_CONFIG`, then built-in defaults
fn load_config() -> Result<LifeConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV).ok());

    match path {
        Some(path) => {
            debug!(%path, "Using configuration file");
            LifeConfig::from_json_file(&path)
                .with_context(|| format!("failed to load configuration from {}", path))
        }
        None => {
            info!("No configuration file given, using defaults");
            Ok(LifeConfig::default())
        }
    }
}

/// Draw, step, then wait for the next frame until the run mode is exhausted
/// or `shutdown` resolves.
///
/// Async counterpart of `Simulation::run`, paced by a timer and interruptible.
#[instrument(skip_all, fields(mode = ?run.mode, frame_interval_ms = run.frame_interval_ms))]
async fn run_loop<W, S>(
    simulation: &mut Simulation,
    console: &mut Console<W>,
    run: &RunConfig,
    shutdown: S,
) -> Result<RunSummary>
where
    W: Write,
    S: Future<Output = ()>,
{
    let mut frames = interval(Duration::from_millis(run.frame_interval_ms.max(1)));
    frames.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(shutdown);

    let start = simulation.generation();
    let mut last_stats = None;

    while run.mode.allows(simulation.generation() - start) {
        tokio::select! {
            biased;
            _ = &mut shutdown => {
                warn!(generation = simulation.generation(), "Run interrupted");
                break;
            }
            _ = frames.tick() => {}
        }

        console
            .present(simulation.grid())
            .context("failed to draw frame")?;
        last_stats = Some(simulation.step());
    }

    let summary = simulation.summarize(start, last_stats);
    info!(
        generations = summary.generations,
        final_population = summary.final_population,
        extinct = summary.is_extinct(),
        "Game of Life finished"
    );
    Ok(summary)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
