//! Word search over a letter grid.
//!
//! [`Boggle`] owns a normalized [`Grid`], the admitted [`Dictionary`] and a
//! [`Trie`] built from it. [`Boggle::solve`] starts a depth-first traversal
//! from every cell, extends the candidate one whole tile at a time, drops a
//! branch as soon as the candidate is no longer a prefix of any word, and
//! returns every complete word met along the way, sorted and deduplicated.
//!
//! ```
//! use boggle_tools::Boggle;
//!
//! let boggle = Boggle::new(
//!     vec![vec!["A", "R", "T"], vec!["R", "A", "R"], vec!["T", "R", "A"]],
//!     vec!["art", "rat", "tar", "ara"],
//! );
//! assert_eq!(boggle.solve(), vec!["ara", "art", "rat", "tar"]);
//! ```

use std::panic::{self, AssertUnwindSafe};

use log::{debug, error};
use metrics::counter;

use crate::board::grid::Grid;
use crate::board::search::Search;
use crate::board::searchconfig::SearchConfig;
use crate::wordlist::dictionary::Dictionary;
use crate::wordlist::trie::Trie;

pub struct Boggle {
    grid: Grid,
    dictionary: Dictionary,
    trie: Trie,
    config: SearchConfig,
}

impl Boggle {
    pub fn new<G, D>(grid: G, dictionary: D) -> Boggle
        where G: Into<Grid>, D: Into<Dictionary> {
        Boggle::with_config(grid, dictionary, SearchConfig::new())
    }

    pub fn with_config<G, D>(grid: G, dictionary: D, config: SearchConfig) -> Boggle
        where G: Into<Grid>, D: Into<Dictionary> {
        let dictionary = dictionary.into();
        let trie = dictionary.to_trie();
        Boggle {
            grid: grid.into(),
            dictionary,
            trie,
            config,
        }
    }

    pub fn set_grid<G: Into<Grid>>(&mut self, grid: G) {
        self.grid = grid.into();
    }

    /// Replaces the word list and rebuilds the prefix index from scratch.
    pub fn set_dictionary<D: Into<Dictionary>>(&mut self, dictionary: D) {
        self.dictionary = dictionary.into();
        self.trie = self.dictionary.to_trie();
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Every dictionary word that can be traced on the grid through 8-adjacent
    /// cells without reusing a cell, in ascending order and without repeats.
    ///
    /// Never fails. An empty or non-square grid, or a dictionary with no
    /// admitted words, yields an empty list, and so does any fault inside
    /// the search itself.
    pub fn solve(&self) -> Vec<String> {
        counter!("boggle.solves", 1);
        match self.searchable_side() {
            Some(side) => self.guarded_search(side),
            None => vec![],
        }
    }

    fn searchable_side(&self) -> Option<usize> {
        if self.grid.is_empty() {
            debug!("empty grid, nothing to search");
            return None;
        }
        let side = match self.grid.side() {
            Some(side) => side,
            None => {
                debug!("grid with {} rows is not square, nothing to search", self.grid.rows().len());
                return None;
            }
        };
        if self.dictionary.is_empty() {
            debug!("no admitted dictionary words, nothing to search");
            return None;
        }
        Some(side)
    }

    fn guarded_search(&self, side: usize) -> Vec<String> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            let mut search = Search::new(&self.grid, &self.trie, &self.config, side);
            search.run();
            search
        }));

        match outcome {
            Ok(search) => {
                let stats = search.stats;
                debug!("searched {}x{} grid: {} cells visited, {} branches pruned, {} words found",
                       side, side, stats.cells_visited, stats.branches_pruned, search.found.len());
                counter!("boggle.cells_visited", stats.cells_visited);
                counter!("boggle.branches_pruned", stats.branches_pruned);
                counter!("boggle.words_found", search.found.len() as u64);
                search.found.into_iter().collect()
            }
            Err(_) => {
                error!("word search on a {}x{} grid aborted; returning no words", side, side);
                vec![]
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use crate::board::boggle::Boggle;
    use crate::board::grid::Grid;
    use crate::board::searchconfig::SearchConfig;
    use crate::wordlist::index::Index;

    fn art_grid() -> Vec<Vec<&'static str>> {
        vec![vec!["A", "R", "T"], vec!["R", "A", "R"], vec!["T", "R", "A"]]
    }

    #[test]
    fn builds_index_over_admitted_words_only() {
        let boggle = Boggle::new(art_grid(), vec!["ART", "ra", "r4t", "tar"]);
        assert_eq!(boggle.dictionary().len(), 2);
        assert!(boggle.trie().contains("art"));
        assert!(!boggle.trie().contains("ra"));
        assert_eq!(boggle.grid().rows()[0], vec!["a", "r", "t"]);
    }

    #[test]
    fn replacing_dictionary_rebuilds_index() {
        let mut boggle = Boggle::new(art_grid(), vec!["art"]);
        assert_eq!(boggle.solve(), vec!["art"]);

        boggle.set_dictionary(vec!["tar", "rat"]);
        assert!(!boggle.trie().contains("art"));
        assert!(!boggle.trie().has_prefix("ar"));
        assert_eq!(boggle.solve(), vec!["rat", "tar"]);
    }

    #[test]
    fn replacing_grid_keeps_index() {
        let mut boggle = Boggle::new(art_grid(), vec!["art", "ego"]);
        boggle.set_grid(vec![vec!["E", "G"], vec!["X", "O"]]);
        assert_eq!(boggle.solve(), vec!["ego"]);

        boggle.set_grid(None::<Grid>);
        assert!(boggle.solve().is_empty());
    }

    #[test]
    fn solve_is_repeatable() {
        let boggle = Boggle::new(art_grid(), vec!["art", "rat", "tar", "ara"]);
        let first = boggle.solve();
        assert_eq!(first, boggle.solve());
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn fault_inside_search_yields_no_words() {
        let boggle = Boggle::new(vec![vec!["a"]], vec!["aaa"]);
        // Claiming a larger side than the grid has makes the traversal index
        // past the last row.
        assert!(boggle.guarded_search(2).is_empty());
    }

    #[test]
    fn path_length_cap_limits_words() {
        let grid = vec![vec!["Qu", "A"], vec!["T", "R"]];
        let words = vec!["qua", "quart"];

        let unlimited = Boggle::new(grid.clone(), words.clone());
        assert_eq!(unlimited.solve(), vec!["qua", "quart"]);

        let capped = Boggle::with_config(grid, words, SearchConfig::builder().max_path_len(2).build());
        assert_eq!(capped.solve(), vec!["qua"]);
    }

    #[test]
    fn raised_minimum_length_hides_short_words() {
        let mut boggle = Boggle::new(art_grid(), vec!["art", "tart", "tara"]);
        boggle.set_config(SearchConfig::builder().min_word_len(4).build());
        assert_eq!(boggle.solve(), vec!["tara", "tart"]);
    }
}
