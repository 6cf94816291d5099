//! Deck endpoints

use axum::{extract::State, http::header, response::IntoResponse, Json};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/deck
pub async fn list(State(state): State<AppState>) -> Result<Json<DeckResponse>> {
    let words = state.deck.load()?;
    let count = words.len();
    Ok(Json(DeckResponse { words, count }))
}

/// POST /api/deck/words
pub async fn add_word(
    State(state): State<AppState>,
    Json(req): Json<AddWordRequest>,
) -> Result<Json<AddWordResponse>> {
    let word = WordPair::new(&req.en, &req.de)
        .ok_or_else(|| ApiError::BadRequest("Both sides of a pair must be non-empty".to_string()))?;

    state.deck.add(&word).await?;
    let count = state.deck.load()?.len();

    Ok(Json(AddWordResponse { word, count }))
}

/// GET /api/deck/export
pub async fn export(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let csv = state.deck.export()?;
    Ok(([(header::CONTENT_TYPE, "text/csv")], csv))
}
