use typed_builder::TypedBuilder;

use crate::alphabet::MIN_WORD_LEN;

/// Tuning knobs for [`Boggle`](crate::board::boggle::Boggle).
///
/// The defaults reproduce the plain exhaustive search.
#[derive(TypedBuilder, Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Shortest word reported. Values below three are treated as three.
    #[builder(default = MIN_WORD_LEN)]
    pub min_word_len: usize,
    /// Longest path, in cells, a single word may use. Unlimited by default;
    /// set it to bound recursion depth on very large boards.
    #[builder(default, setter(strip_option))]
    pub max_path_len: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig::builder().build()
    }
}

impl SearchConfig {
    pub fn new() -> SearchConfig {
        Default::default()
    }

    pub(crate) fn min_word_len(&self) -> usize {
        self.min_word_len.max(MIN_WORD_LEN)
    }

    pub(crate) fn max_path_len(&self) -> usize {
        self.max_path_len.unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::searchconfig::SearchConfig;

    #[test]
    fn defaults_to_three_letters_and_no_depth_cap() {
        let config = SearchConfig::new();
        assert_eq!(config.min_word_len, 3);
        assert_eq!(config.max_path_len, None);
        assert_eq!(config.max_path_len(), usize::MAX);
    }

    #[test]
    fn never_goes_below_three_letters() {
        let config = SearchConfig::builder().min_word_len(1).max_path_len(4).build();
        assert_eq!(config.min_word_len(), 3);
        assert_eq!(config.max_path_len(), 4);
        assert_eq!(SearchConfig::builder().min_word_len(5).build().min_word_len(), 5);
    }
}
