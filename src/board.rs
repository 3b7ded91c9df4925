pub mod boggle;
pub mod grid;
pub mod parse;
pub mod searchconfig;

mod search;
