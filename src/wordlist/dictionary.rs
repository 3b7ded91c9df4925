use delegate::delegate;

use crate::alphabet::admit;
use crate::wordlist::index::Index;
use crate::wordlist::trie::Trie;

/// The admitted words of a caller-supplied word list: alphabetic only, at
/// least three letters, lowercased. Everything else is dropped silently.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    pub fn new<I, S>(candidates: I) -> Dictionary
        where I: IntoIterator<Item = S>, S: AsRef<str> {
        Dictionary {
            words: candidates.into_iter()
                .filter_map(|x| admit(x.as_ref()))
                .collect()
        }
    }

    pub fn empty() -> Dictionary {
        Default::default()
    }

    delegate! {
        to self.words {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn iter(&self) -> std::slice::Iter<'_, String>;
        }
    }

    /// Builds a fresh prefix index over every admitted word.
    pub fn to_trie(&self) -> Trie {
        let mut trie = Trie::new();
        trie.add_all(self.words.iter().map(String::as_str));
        trie
    }
}

impl<S: AsRef<str>> From<Vec<S>> for Dictionary {
    fn from(candidates: Vec<S>) -> Self {
        Dictionary::new(candidates)
    }
}

impl<S: AsRef<str>> From<&[S]> for Dictionary {
    fn from(candidates: &[S]) -> Self {
        Dictionary::new(candidates)
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for Dictionary {
    fn from(candidates: [S; N]) -> Self {
        Dictionary::new(candidates)
    }
}

/// An absent word list admits nothing.
impl<T: Into<Dictionary>> From<Option<T>> for Dictionary {
    fn from(candidates: Option<T>) -> Self {
        candidates.map(Into::into).unwrap_or_default()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
