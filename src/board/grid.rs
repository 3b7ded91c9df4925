//! The letter grid a word search runs over.
//!
//! A grid is an ordered matrix of tile labels. Labels are stored lowercase
//! and may hold several letters (`"qu"`, `"st"`, `"ie"`); a multi-letter
//! tile is always consumed whole. Only square, non-empty grids are
//! searchable, but any shape can be stored so that a malformed board can
//! be handed to the solver and simply produce no words.

use std::fmt;

use derive_new::new;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::alphabet::normalize;

/// Row/column offsets of the eight cells around a cell.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

/// Tile labels drawn by [`Grid::random`], with relative weights. There is
/// no bare `q`: it always comes as `qu`.
const TILE_WEIGHTS: [(&str, u32); 26] = [
    ("a", 9), ("b", 2), ("c", 2), ("d", 4), ("e", 12), ("f", 2), ("g", 3),
    ("h", 2), ("i", 9), ("j", 1), ("k", 1), ("l", 4), ("m", 2), ("n", 6),
    ("o", 8), ("p", 2), ("qu", 1), ("r", 6), ("s", 4), ("t", 6), ("u", 4),
    ("v", 2), ("w", 2), ("x", 1), ("y", 2), ("z", 1),
];

#[derive(new, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// The in-bounds cells 8-adjacent to this one on a `side` x `side` grid.
    pub fn neighbours(self, side: usize) -> impl Iterator<Item = Position> {
        DIRECTIONS.into_iter().filter_map(move |(dr, dc)| {
            let row = self.row.checked_add_signed(dr)?;
            let col = self.col.checked_add_signed(dc)?;
            if row < side && col < side {
                Some(Position::new(row, col))
            } else {
                None
            }
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Builds a grid from rows of tile labels, lowercasing every label.
    pub fn new<R, S>(rows: R) -> Grid
        where R: IntoIterator,
              R::Item: IntoIterator<Item = S>,
              S: AsRef<str> {
        Grid {
            rows: rows.into_iter()
                .map(|row| row.into_iter().map(|tile| normalize(tile.as_ref())).collect())
                .collect()
        }
    }

    pub fn empty() -> Grid {
        Default::default()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `Some(n)` when the grid is non-empty and every one of its `n` rows
    /// has exactly `n` tiles.
    pub fn side(&self) -> Option<usize> {
        let n = self.rows.len();
        if n > 0 && self.rows.iter().all(|row| row.len() == n) {
            Some(n)
        } else {
            None
        }
    }

    /// Label at `pos`. Panics when `pos` is outside the grid.
    pub fn tile(&self, pos: Position) -> &str {
        &self.rows[pos.row][pos.col]
    }

    /// A `side` x `side` board of weighted random tiles.
    pub fn random<R: Rng + ?Sized>(side: usize, rng: &mut R) -> Grid {
        Grid::new((0..side).map(|_| {
            (0..side).map(|_| random_tile(rng)).collect::<Vec<_>>()
        }))
    }

    /// Reproducible variant of [`Grid::random`].
    pub fn random_with_seed(side: usize, seed: u64) -> Grid {
        let mut rng = SmallRng::seed_from_u64(seed);
        Grid::random(side, &mut rng)
    }
}

fn random_tile<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    let total: u32 = TILE_WEIGHTS.iter().map(|(_, w)| w).sum();
    let mut pick = rng.gen_range(0..total);
    for (tile, weight) in TILE_WEIGHTS {
        if pick < weight {
            return tile;
        }
        pick -= weight;
    }
    unreachable!("pick is below the total weight")
}

impl<S: AsRef<str>> From<Vec<Vec<S>>> for Grid {
    fn from(rows: Vec<Vec<S>>) -> Self {
        Grid::new(rows)
    }
}

/// An absent grid is an empty one.
impl<T: Into<Grid>> From<Option<T>> for Grid {
    fn from(rows: Option<T>) -> Self {
        rows.map(Into::into).unwrap_or_default()
    }
}

impl From<Grid> for Vec<Vec<String>> {
    fn from(grid: Grid) -> Self {
        grid.rows
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.rows.iter()
            .flatten()
            .map(|tile| tile.chars().count())
            .max()
            .unwrap_or(1);
        for row in &self.rows {
            let cells = row.iter()
                .map(|tile| format!("{:<width$}", capitalize(tile), width = width))
                .collect::<Vec<_>>();
            writeln!(f, "{}", cells.join(" ").trim_end())?;
        }
        Ok(())
    }
}

fn capitalize(tile: &str) -> String {
    let mut chars = tile.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
