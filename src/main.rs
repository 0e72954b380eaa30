use std::{thread, time::Duration};

use anyhow::{ensure, Context, Result};
use clap::Parser;
use itertools::Itertools;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::args::Args;
use crate::gol::Conway;

mod args;
mod gol;
mod patterns;

fn mk_pool(threads: usize) -> Result<rayon::ThreadPool> {
    Ok(rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()?)
}

/// Largest side length the driver will allocate a grid for.
const MAX_SIZE: usize = 1 << 14;

fn new_grid(args: &Args) -> Result<Conway> {
    ensure!(
        args.size >= 3,
        "a {}x{} grid has no interior cells",
        args.size,
        args.size
    );
    ensure!(
        args.size <= MAX_SIZE,
        "grid size {} is larger than the maximum of {}",
        args.size,
        MAX_SIZE
    );
    Ok(Conway::new(args.size))
}

fn seed(grid: &mut Conway, args: &Args) -> Result<()> {
    ensure!(
        args.origins.len() <= args.patterns.len(),
        "{} origins given for {} patterns",
        args.origins.len(),
        args.patterns.len()
    );
    for (i, name) in args.patterns.iter().enumerate() {
        let pattern = patterns::find(name)?;
        let origin = args
            .origins
            .get(i)
            .copied()
            .unwrap_or_else(|| pattern.centered(grid.size()));
        pattern
            .place(grid, origin)
            .with_context(|| format!("failed to place {}", pattern.name))?;
        debug!(pattern = pattern.name, %origin, "placed pattern");
    }
    for &pt in &args.toggles {
        ensure!(
            pt.x < grid.size() && pt.y < grid.size(),
            "cannot toggle {} outside a {}x{} grid",
            pt,
            grid.size(),
            grid.size()
        );
        grid.toggle(pt.x, pt.y);
        debug!(cell = %pt, alive = grid.get(pt.x, pt.y), "toggled cell");
    }
    Ok(())
}

/// Advances `grid` by `args.ticks` generations. With auto-play on, waits
/// `args.interval_ms` between generations like a ticking timer would.
fn run(grid: &mut Conway, args: &Args) {
    let interval = Duration::from_millis(args.interval_ms);
    for generation in 1..=args.ticks {
        grid.tick();
        debug!(generation, alive = grid.alive(), "tick");
        if args.autoplay && generation < args.ticks {
            thread::sleep(interval);
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let threads = args.threads.unwrap_or_else(num_cpus::get);
    ensure!(threads > 0, "need at least one thread");

    let mut grid = new_grid(&args)?;
    seed(&mut grid, &args)?;
    info!(size = grid.size(), alive = grid.alive(), threads, "seeded grid");

    mk_pool(threads)
        .context("failed to create threadpool")?
        .install(|| run(&mut grid, &args));

    info!(generations = args.ticks, alive = grid.alive(), "finished");
    debug!(
        "live cells: {}",
        grid.cells().filter(|(_, a)| *a).map(|(p, _)| p).join(" ")
    );
    Ok(())
}
