use std::collections::btree_map;

use crate::alphabet::ALPHABET;
use crate::wordlist::trie::node::{NodeId, TrieNode};

/// Walks the children of one node: a-z first, then every other letter in
/// code point order.
#[derive(Debug)]
pub(crate) struct TrieCursor<'a> {
    idx: usize,
    node: &'a TrieNode,
    other: btree_map::Iter<'a, char, NodeId>,
}

impl<'a> Iterator for TrieCursor<'a> {
    type Item = (char, NodeId);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < ALPHABET.len() {
            let idx = self.idx;
            self.idx += 1;
            if let Some(child) = self.node.children[idx] {
                return Some((ALPHABET[idx] as char, child));
            }
        }
        self.other.next().map(|(c, child)| (*c, *child))
    }
}

impl<'a> IntoIterator for &'a TrieNode {
    type Item = (char, NodeId);
    type IntoIter = TrieCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        TrieCursor { idx: 0, node: self, other: self.other.iter() }
    }
}
