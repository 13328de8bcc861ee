use crate::models::Tile;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/generate-tiles`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SuggestTilesRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "categoryName is required"))]
    pub category_name: String,

    /// Sentence template the tiles complete, e.g. "I want ___".
    pub stem: Option<String>,

    /// Names already on the board, as the client formats them.
    pub existing_tiles: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestTilesResponse {
    pub tiles: Vec<Tile>,
}
