pub mod tiles;

pub use tiles::{SuggestTilesRequest, SuggestTilesResponse};
