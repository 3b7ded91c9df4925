/// Exact-word and prefix membership over a set of words.
pub trait Index {
    fn insert(&mut self, word: &str);
    fn contains(&self, word: &str) -> bool;
    fn has_prefix(&self, prefix: &str) -> bool;

    fn add_all<'a, I>(&mut self, items: I)
        where I: IntoIterator<Item = &'a str> {
        items.into_iter().for_each(|x| self.insert(x));
    }
}
