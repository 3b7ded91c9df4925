use std::collections::BTreeSet;

use crate::board::grid::{Grid, Position};
use crate::board::searchconfig::SearchConfig;
use crate::wordlist::trie::{NodeId, Trie};

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct SearchStats {
    pub(crate) cells_visited: u64,
    pub(crate) branches_pruned: u64,
}

/// Depth-first walk over one square grid.
///
/// `visited`, `path` and `word` always describe exactly the cells from the
/// current start cell to the current frame; every step undoes its own
/// changes before returning.
pub(crate) struct Search<'a> {
    grid: &'a Grid,
    trie: &'a Trie,
    side: usize,
    min_word_len: usize,
    max_path_len: usize,
    visited: Vec<bool>,
    path: Vec<Position>,
    word: String,
    pub(crate) found: BTreeSet<String>,
    pub(crate) stats: SearchStats,
}

impl<'a> Search<'a> {
    pub(crate) fn new(grid: &'a Grid, trie: &'a Trie, config: &SearchConfig, side: usize) -> Search<'a> {
        Search {
            grid,
            trie,
            side,
            min_word_len: config.min_word_len(),
            max_path_len: config.max_path_len(),
            visited: vec![false; side * side],
            path: Vec::with_capacity(side * side),
            word: String::new(),
            found: BTreeSet::new(),
            stats: SearchStats::default(),
        }
    }

    /// Runs one traversal from every cell, row by row.
    pub(crate) fn run(&mut self) {
        for row in 0..self.side {
            for col in 0..self.side {
                self.start(Position::new(row, col));
            }
        }
    }

    pub(crate) fn start(&mut self, pos: Position) {
        debug_assert!(self.path.is_empty() && self.word.is_empty());
        let root = self.trie.root();
        self.visit(pos, root);
    }

    fn visit(&mut self, pos: Position, node: NodeId) {
        let idx = pos.row * self.side + pos.col;
        debug_assert!(!self.visited[idx], "cell {:?} reused within one path", pos);

        let grid = self.grid;
        let label = grid.tile(pos);
        self.visited[idx] = true;
        self.path.push(pos);
        let mark = self.word.len();
        self.word.push_str(label);
        self.stats.cells_visited += 1;

        match self.trie.walk(node, label) {
            None => self.stats.branches_pruned += 1,
            Some(next) => {
                if self.trie.is_terminal(next) && self.word.chars().count() >= self.min_word_len {
                    self.found.insert(self.word.clone());
                }
                if self.path.len() < self.max_path_len {
                    for neighbour in pos.neighbours(self.side) {
                        if !self.visited[neighbour.row * self.side + neighbour.col] {
                            self.visit(neighbour, next);
                        }
                    }
                }
            }
        }

        self.word.truncate(mark);
        self.path.pop();
        self.visited[idx] = false;
    }
}
