use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

use crate::alphabet::{get_idx, ALPHABET};

/// Handle to a node stored in a [`Trie`](crate::wordlist::trie::Trie).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);
}

/// Children for a-z live in a fixed table; any other letter falls back to
/// an ordered map.
#[derive(Default)]
pub(crate) struct TrieNode {
    pub(crate) children: [Option<NodeId>; ALPHABET.len()],
    pub(crate) other: BTreeMap<char, NodeId>,
    pub(crate) letter: char,
    pub(crate) is_terminal: bool,
    pub(crate) depth: usize,
}

impl TrieNode {
    pub(crate) fn new(letter: char, depth: usize) -> TrieNode {
        TrieNode {
            letter,
            depth,
            ..Default::default()
        }
    }

    pub(crate) fn get_child(&self, c: char) -> Option<NodeId> {
        match get_idx(c) {
            Some(idx) => self.children[idx],
            None => self.other.get(&c).copied(),
        }
    }

    pub(crate) fn set_child(&mut self, c: char, child: NodeId) {
        match get_idx(c) {
            Some(idx) => self.children[idx] = Some(child),
            None => {
                self.other.insert(c, child);
            }
        }
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("letter", &self.letter)
            .field("depth", &self.depth)
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.into_iter()
                .map(|(c, _)| c)
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}
