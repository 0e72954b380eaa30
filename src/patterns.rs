use anyhow::{anyhow, ensure, Result};
use itertools::Itertools;

use crate::gol::{Conway, Point};

/// A named seed shape. Cells are `(x, y)` offsets from the top-left origin.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "r-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
];

pub fn find(name: &str) -> Result<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| {
            anyhow!(
                "unknown pattern `{}` (known: {})",
                name,
                PATTERNS.iter().map(|p| p.name).join(", ")
            )
        })
}

impl Pattern {
    pub fn width(&self) -> usize {
        self.cells.iter().map(|c| c.0 + 1).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.cells.iter().map(|c| c.1 + 1).max().unwrap_or(0)
    }

    /// Origin that puts the pattern in the middle of a `size` grid.
    pub fn centered(&self, size: usize) -> Point {
        Point {
            x: size.saturating_sub(self.width()) / 2,
            y: size.saturating_sub(self.height()) / 2,
        }
    }

    /// Sets the pattern's cells alive at `origin`. The whole shape must land
    /// on interior cells, otherwise the grid is left as it was.
    pub fn place(&self, grid: &mut Conway, origin: Point) -> Result<()> {
        let last = grid.size().saturating_sub(1);
        let fits = |start: usize, extent: usize| {
            start >= 1 && start.checked_add(extent).map_or(false, |end| end <= last)
        };
        ensure!(
            fits(origin.x, self.width()) && fits(origin.y, self.height()),
            "{} ({}x{}) at {} does not fit inside the interior of a {}x{} grid",
            self.name,
            self.width(),
            self.height(),
            origin,
            grid.size(),
            grid.size()
        );
        for &offset in self.cells {
            let pt = origin + Point::from(offset);
            grid.set(pt.x, pt.y, true);
        }
        Ok(())
    }
}
