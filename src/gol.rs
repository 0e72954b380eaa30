use anyhow::{anyhow, Context, Result};
use itertools::iproduct;
use rayon::prelude::*;
use std::{
    fmt::Display,
    ops::{Add, Index, IndexMut},
    str::FromStr,
};

/// A square, non-wrapping Game of Life grid.
///
/// Cells are stored row-major (`y * size + x`). Only interior cells are
/// advanced by [`Conway::tick`]; the one-cell border keeps whatever was
/// written to it directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conway {
    buf: Vec<bool>,
    size: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}
impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
impl Add for Point {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.x += rhs.x;
        self.y += rhs.y;
        self
    }
}
impl From<(usize, usize)> for Point {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}
impl FromStr for Point {
    type Err = anyhow::Error;

    /// Parses `X,Y`.
    fn from_str(s: &str) -> Result<Self> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("expected X,Y but got `{}`", s))?;
        Ok(Self {
            x: x.trim().parse().with_context(|| format!("bad x in `{}`", s))?,
            y: y.trim().parse().with_context(|| format!("bad y in `{}`", s))?,
        })
    }
}

impl Conway {
    /// All cells start dead. A grid smaller than 3 has no interior, so
    /// ticking it does nothing.
    pub fn new(size: usize) -> Self {
        Conway {
            buf: vec![false; size * size],
            size,
        }
    }

    fn index_of(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.size && y < self.size,
            "cell ({}, {}) outside {}x{} grid",
            x,
            y,
            self.size,
            self.size
        );
        y * self.size + x
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.buf[self.index_of(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        let idx = self.index_of(x, y);
        self.buf[idx] = value;
    }

    pub fn toggle(&mut self, x: usize, y: usize) {
        let idx = self.index_of(x, y);
        self.buf[idx] = !self.buf[idx];
    }

    /// Live cells in the Moore neighbourhood of an interior cell.
    fn live_neighbours(&self, x: usize, y: usize) -> usize {
        debug_assert!(x >= 1 && y >= 1, "({}, {}) is not interior", x, y);
        iproduct!(y - 1..=y + 1, x - 1..=x + 1)
            .filter(|&(ny, nx)| (nx, ny) != (x, y))
            .filter(|&(ny, nx)| self.get(nx, ny))
            .count()
    }

    fn next_state(&self, x: usize, y: usize) -> bool {
        match self.live_neighbours(x, y) {
            2 => self.get(x, y),
            3 => true,
            _ => false,
        }
    }

    /// Advances interior cells by one generation.
    ///
    /// Every row of the next generation is computed against the current
    /// buffer, then swapped in whole. Rows are spread over the current rayon
    /// pool; each worker only writes its own row.
    pub fn tick(&mut self) {
        let size = self.size;
        if size < 3 {
            return;
        }
        let prev = &*self;
        let mut next = prev.buf.clone();
        next.par_chunks_mut(size)
            .enumerate()
            .filter(|(y, _)| (1..size - 1).contains(y))
            .for_each(|(y, row)| {
                for x in 1..size - 1 {
                    row[x] = prev.next_state(x, y);
                }
            });
        self.buf = next;
        tracing::trace!(size, alive = self.alive(), "advanced generation");
    }

    pub fn alive(&self) -> usize {
        self.buf.iter().filter(|v| **v).count()
    }

    /// Row-major walk over every cell.
    pub fn cells(&self) -> impl Iterator<Item = (Point, bool)> + '_ {
        self.buf.iter().enumerate().map(move |(i, b)| {
            (
                Point {
                    x: i % self.size,
                    y: i / self.size,
                },
                *b,
            )
        })
    }
}

impl Index<Point> for Conway {
    type Output = bool;
    fn index(&self, index: Point) -> &Self::Output {
        &self.buf[self.index_of(index.x, index.y)]
    }
}
impl IndexMut<Point> for Conway {
    fn index_mut(&mut self, index: Point) -> &mut Self::Output {
        let idx = self.index_of(index.x, index.y);
        &mut self.buf[idx]
    }
}
