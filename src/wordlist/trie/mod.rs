pub mod trie;

mod iterators;
mod node;

pub use node::NodeId;
pub use trie::Trie;
