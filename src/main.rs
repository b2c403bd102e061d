//! Turbo Road headless driver
//!
//! Runs the simulation in demo mode and writes one JSON snapshot per line to
//! stdout, for piping into a renderer or for soak testing. Logging goes to
//! stderr via `RUST_LOG`.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use turbo_road::consts::TICKS_PER_SECOND;
use turbo_road::sim::{GamePhase, Session, TickInput, tick};
use turbo_road::{FrameClock, GameConfig};

#[derive(Parser)]
#[command(name = "turbo-road")]
#[command(
    about = "Vertical-scrolling arcade driving game (headless demo driver)",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// JSON config file (screen size, sprite sizes, seed, ...)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the spawner seed
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// Emit a snapshot every N ticks (phase changes are always emitted)
    #[arg(long, default_value_t = 60)]
    every: u64,

    /// Stop after this many crashes
    #[arg(long, default_value_t = 3)]
    runs: u32,

    /// Pace ticks in real time instead of running flat out
    #[arg(long)]
    realtime: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    let mut session = Session::new(&config).context("Invalid game config")?;
    log::info!("Turbo Road (headless) starting with seed {}", config.seed);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut run = DemoRun::new(cli.every, cli.runs);
    let mut clock = FrameClock::default();
    let mut last_frame = Instant::now();

    while run.ticks_run < cli.ticks && !session.quit_requested() {
        let due = if cli.realtime {
            std::thread::sleep(clock.step());
            let now = Instant::now();
            let elapsed = now.duration_since(last_frame);
            last_frame = now;
            clock.ticks_for(elapsed)
        } else {
            1
        };

        for _ in 0..due {
            run.step(&mut session, &mut out)?;
            if session.quit_requested() {
                break;
            }
        }
    }
    out.flush()?;

    log::info!(
        "Finished after {} ticks ({:.1}s of game time): {} crashes, best score {}",
        run.ticks_run,
        run.ticks_run as f64 / TICKS_PER_SECOND as f64,
        run.crashes,
        run.best
    );
    Ok(())
}

/// Demo-mode bookkeeping across crashes and restarts
struct DemoRun {
    every: u64,
    runs: u32,
    ticks_run: u64,
    crashes: u32,
    best: u64,
}

impl DemoRun {
    fn new(every: u64, runs: u32) -> Self {
        Self {
            every: every.max(1),
            runs,
            ticks_run: 0,
            crashes: 0,
            best: 0,
        }
    }

    /// Tick once in demo mode, writing a snapshot on every phase change
    /// and every `every` ticks. A crash restarts the run until `runs` is
    /// used up, then asks the session to quit.
    fn step<W: Write>(&mut self, session: &mut Session, out: &mut W) -> Result<()> {
        let demo = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        let before = session.phase();
        tick(session, &demo);
        self.ticks_run += 1;
        self.best = self.best.max(session.score());

        if session.phase() != before || self.ticks_run % self.every == 0 {
            write_snapshot(out, session)?;
        }

        if session.phase() == GamePhase::Stopped {
            self.crashes += 1;
            log::info!("Run {} over with score {}", self.crashes, session.score());
            if self.crashes >= self.runs {
                session.request_quit();
                return Ok(());
            }
            let reset = TickInput {
                reset: true,
                ..Default::default()
            };
            tick(session, &reset);
            // Stopped -> Running
            write_snapshot(out, session)?;
        }
        Ok(())
    }
}

fn write_snapshot<W: Write>(out: &mut W, session: &Session) -> Result<()> {
    serde_json::to_writer(&mut *out, &session.snapshot())?;
    writeln!(out)?;
    Ok(())
}
