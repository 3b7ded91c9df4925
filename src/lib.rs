pub mod alphabet;
pub mod board;
pub mod error;
pub mod logging;
pub mod wordlist;

pub use board::boggle::Boggle;
pub use board::grid::{Grid, Position};
pub use board::searchconfig::SearchConfig;
pub use error::Error;
pub use wordlist::dictionary::Dictionary;
pub use wordlist::index::Index;
pub use wordlist::trie::Trie;
