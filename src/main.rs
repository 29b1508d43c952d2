//! Terminal driver: renders the universe to stdout and advances it on a
//! wall-clock schedule until the requested generation count is reached.

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use toroidal_life::{Algorithm, SeedStrategy, Simulation, UniverseConfig};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SeedKind {
    Reference,
    Empty,
    Random,
}

#[derive(Parser, Debug)]
#[command(name = "life", about = "Conway's Game of Life on a torus")]
struct Args {
    #[arg(long, default_value_t = 64)]
    width: u32,

    #[arg(long, default_value_t = 64)]
    height: u32,

    #[arg(long, value_enum, default_value_t = SeedKind::Reference)]
    seed: SeedKind,

    /// RNG seed for `--seed random`
    #[arg(long, default_value_t = 0)]
    rng_seed: u64,

    /// Alive probability for `--seed random`
    #[arg(long, default_value_t = 0.3)]
    density: f64,

    /// Stop after this many generations (runs forever when omitted)
    #[arg(long)]
    generations: Option<u64>,

    /// Generations per second, clamped to 1..=60
    #[arg(long, default_value_t = 10.0)]
    speed: f32,

    /// Frame interval in milliseconds
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Compute rows in parallel
    #[arg(long)]
    parallel: bool,
}

impl Args {
    fn seed_strategy(&self) -> SeedStrategy {
        match self.seed {
            SeedKind::Reference => SeedStrategy::Reference,
            SeedKind::Empty => SeedStrategy::Empty,
            SeedKind::Random => SeedStrategy::Random { seed: self.rng_seed, density: self.density },
        }
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let config = UniverseConfig::default()
        .with_dimensions(args.width, args.height)
        .with_seed(args.seed_strategy());
    let mut sim = Simulation::from_config(&config)
        .context("failed to build universe")?
        .with_speed(args.speed);
    if args.parallel {
        sim.set_algorithm(Algorithm::Parallel);
    }

    tracing::info!(
        width = args.width,
        height = args.height,
        seed = config.seed.name(),
        algorithm = sim.algorithm.name(),
        "starting simulation"
    );

    let frame = Duration::from_millis(args.frame_ms);
    let mut stdout = std::io::stdout().lock();
    let mut last = Instant::now();

    loop {
        // Home the cursor and redraw in place
        write!(stdout, "\x1b[H\x1b[2J{}", sim.snapshot()).context("failed to write frame")?;
        writeln!(stdout, "generation {}", sim.generation).context("failed to write frame")?;
        stdout.flush().context("failed to flush frame")?;

        if args.generations.is_some_and(|limit| sim.generation >= limit) {
            break;
        }

        std::thread::sleep(frame);
        let now = Instant::now();
        sim = sim.tick(now.duration_since(last).as_secs_f32());
        last = now;
    }

    tracing::info!(
        generations = sim.generation,
        live = sim.universe().live_count(),
        last_step_ms = sim.last_step_time_ms,
        "simulation finished"
    );
    Ok(())
}
