use std::fmt::{Debug, Formatter};

use crate::wordlist::index::Index;
use crate::wordlist::trie::node::{NodeId, TrieNode};

/// Prefix tree over a fixed set of words.
///
/// Nodes live in one vector and refer to their children by [`NodeId`], so
/// the whole tree is owned by the `Trie` and dropped with it. The root is
/// always `NodeId::ROOT`.
pub struct Trie {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}

impl Index for Trie {
    fn insert(&mut self, word: &str) {
        let mut current = NodeId::ROOT;
        for c in word.chars() {
            current = self.get_or_create_child(current, c);
        }

        let end = &mut self.nodes[current.0];
        if !end.is_terminal {
            end.is_terminal = true;
            self.words += 1;
        }
    }

    fn contains(&self, word: &str) -> bool {
        self.walk(NodeId::ROOT, word)
            .map(|x| self.is_terminal(x))
            .unwrap_or(false)
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        self.walk(NodeId::ROOT, prefix).is_some()
    }
}

impl Trie {
    pub fn new() -> Trie {
        Trie {
            nodes: vec![TrieNode::default()],
            words: 0,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Follows `s` one character at a time starting at `from`. Returns the
    /// node reached, or `None` as soon as a character has no child.
    pub fn walk(&self, from: NodeId, s: &str) -> Option<NodeId> {
        s.chars().try_fold(from, |node, c| self.node(node).get_child(c))
    }

    pub fn is_terminal(&self, id: NodeId) -> bool {
        self.node(id).is_terminal
    }

    /// Every stored word, a-z branches first.
    pub fn words(&self) -> Vec<String> {
        let mut results = Vec::with_capacity(self.words);
        let mut path = String::new();
        self.collect_words(NodeId::ROOT, &mut path, &mut results);
        results
    }

    fn collect_words(&self, id: NodeId, path: &mut String, results: &mut Vec<String>) {
        let node = self.node(id);
        if node.is_terminal {
            results.push(path.clone());
        }
        for (c, child) in node {
            path.push(c);
            self.collect_words(child, path, results);
            path.pop();
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0]
    }

    fn get_or_create_child(&mut self, parent: NodeId, c: char) -> NodeId {
        if let Some(child) = self.node(parent).get_child(c) {
            return child;
        }
        let child = NodeId(self.nodes.len());
        let depth = self.node(parent).depth + 1;
        self.nodes.push(TrieNode::new(c, depth));
        self.nodes[parent.0].set_child(c, child);
        child
    }
}

impl<'f> FromIterator<&'f str> for Trie {
    fn from_iter<I: IntoIterator<Item = &'f str>>(items: I) -> Self {
        let mut trie = Trie::new();
        trie.add_all(items);
        trie
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            l.entry(node);
            node.into_iter().for_each(|(_, child)| stack.push(child));
        }
        l.finish()
    }
}


#[cfg(test)]
mod tests {
    use crate::wordlist::index::Index;
    use crate::wordlist::trie::Trie;

    #[test]
    fn finds_words_in_trie() {
        let words = vec!["hello", "help", "goodbye", "good"];
        let mut trie = Trie::new();
        trie.add_all(words.iter().copied());
        words.iter().for_each(|word| assert!(trie.contains(word)));
    }

    #[test]
    fn doesnt_finds_words_not_in_trie() {
        let words = vec!["hello", "help", "goodbye", "good"];
        let bad_words = vec!["he", "h", "lol", "banana", "helper", "", "HELLO"];
        let mut trie = Trie::new();
        trie.add_all(words.iter().copied());
        bad_words.iter().for_each(|word| assert!(!trie.contains(word), "{:?}", word));
    }

    #[test]
    fn answers_prefix_queries() {
        let trie: Trie = vec!["hello", "help", "good"].into_iter().collect();

        assert!(trie.has_prefix(""));
        assert!(trie.has_prefix("h"));
        assert!(trie.has_prefix("hel"));
        assert!(trie.has_prefix("help"));
        assert!(!trie.has_prefix("helps"));
        assert!(!trie.has_prefix("x"));
        assert!(!trie.has_prefix("goo d"));
    }

    #[test]
    fn empty_trie_has_every_word_as_empty_prefix_only() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert!(trie.has_prefix(""));
        assert!(!trie.has_prefix("a"));
        assert!(!trie.contains(""));
    }

    #[test]
    fn insert_is_idempotent() {
        let mut trie = Trie::new();
        trie.insert("quart");
        trie.insert("quart");
        trie.insert("qua");
        assert_eq!(trie.len(), 2);
        assert_eq!(trie.words(), vec!["qua", "quart"]);
    }

    #[test]
    fn walk_extends_a_prefix_from_any_node() {
        let trie: Trie = vec!["quart", "quartz"].into_iter().collect();
        let qu = trie.walk(trie.root(), "qu").unwrap();
        let quart = trie.walk(qu, "art").unwrap();

        assert!(trie.is_terminal(quart));
        assert_eq!(trie.walk(quart, ""), Some(quart));
        assert!(trie.walk(qu, "q").is_none());
    }

    #[test]
    fn stores_letters_outside_a_to_z() {
        let trie: Trie = vec!["café", "cafe", "éte"].into_iter().collect();
        assert!(trie.contains("café"));
        assert!(trie.contains("éte"));
        assert!(!trie.contains("caf"));
        assert_eq!(trie.words(), vec!["cafe", "café", "éte"]);
    }
}
