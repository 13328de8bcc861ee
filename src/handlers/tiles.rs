use crate::dtos::{SuggestTilesRequest, SuggestTilesResponse};
use crate::error::AppError;
use crate::services::parse::parse_tiles;
use crate::services::prompt::build_tile_prompt;
use crate::services::providers::{FinishReason, GenerationParams};
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use validator::Validate;

/// `POST /api/generate-tiles`: ask the language model for new tile
/// suggestions for a category.
pub async fn suggest_tiles(
    State(state): State<AppState>,
    Json(payload): Json<SuggestTilesRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(|e| {
        tracing::warn!(error = %e, "Rejected tile suggestion request");
        AppError::from(e)
    })?;

    let prompt = build_tile_prompt(
        &payload.category_name,
        payload.stem.as_deref(),
        payload.existing_tiles.as_deref(),
    );

    let params = GenerationParams {
        temperature: Some(state.config.generation.temperature),
        max_output_tokens: Some(state.config.generation.max_output_tokens),
    };

    let reply = state.text_provider.generate(&prompt, &params).await?;

    if reply.finish_reason == FinishReason::Length {
        tracing::warn!("Model reply truncated at the output token limit");
    }

    let text = match reply.text {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Err(AppError::EmptyCompletion),
    };

    let tiles = parse_tiles(&text).map_err(|e| {
        tracing::warn!(text = %e.text(), "Failed to parse model reply: {}", e);
        AppError::from(e)
    })?;

    tracing::info!(
        category = %payload.category_name,
        tile_count = tiles.len(),
        input_tokens = reply.input_tokens,
        output_tokens = reply.output_tokens,
        "Tile suggestions generated"
    );

    Ok(Json(SuggestTilesResponse { tiles }))
}

/// Any method other than POST; OPTIONS preflights are answered by the
/// CORS layer before reaching the router.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
