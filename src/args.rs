use clap::Parser;

use crate::gol::Point;

#[derive(Parser, Debug)]
#[command(
    name = "farewell-life",
    about = "Conway's Game of Life on a fixed, non-wrapping grid"
)]
pub struct Args {
    /// Side length of the square grid
    #[arg(short, long, default_value_t = 64)]
    pub size: usize,
    /// Seed pattern to place; repeat to place several
    #[arg(short, long = "pattern", default_value = "glider")]
    pub patterns: Vec<String>,
    /// Top-left origin (X,Y) for each pattern, in order; the rest are centred
    #[arg(long = "at")]
    pub origins: Vec<Point>,
    /// Generations to advance
    #[arg(short = 'n', long, default_value_t = 1)]
    pub ticks: u64,
    /// Keep ticking on a fixed interval instead of stepping straight through
    #[arg(short, long)]
    pub autoplay: bool,
    /// Delay between auto-play ticks
    #[arg(short, long, default_value_t = 100)]
    pub interval_ms: u64,
    /// Cells (X,Y) to flip after the patterns are placed; repeatable
    #[arg(long = "toggle")]
    pub toggles: Vec<Point>,
    /// Worker threads for each tick [default: number of CPUs]
    #[arg(short, long)]
    pub threads: Option<usize>,
    /// Log every generation
    #[arg(short, long)]
    pub verbose: bool,
}
