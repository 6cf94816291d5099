//! Session endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// POST /api/sessions
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<Json<CreateSessionResponse>> {
    let deck = state.deck.load()?;
    let created = state.sessions.create(deck, &req).await?;
    Ok(Json(created))
}

/// GET /api/sessions/:id
pub async fn summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSummary>> {
    Ok(Json(state.sessions.summary(id).await?))
}

/// GET /api/sessions/:id/card
pub async fn card(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CardView>> {
    Ok(Json(state.sessions.card(id).await?))
}

/// POST /api/sessions/:id/answer
pub async fn answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>> {
    Ok(Json(state.sessions.answer(id, &req.answer).await?))
}

/// POST /api/sessions/:id/choice
pub async fn choose(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ChoiceRequest>,
) -> Result<Json<ChoiceResponse>> {
    Ok(Json(state.sessions.choose(id, &req.selected).await?))
}

/// POST /api/sessions/:id/rate
pub async fn rate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RateRequest>,
) -> Result<Json<Progress>> {
    Ok(Json(state.sessions.rate(id, req.knew_it).await?))
}

/// POST /api/sessions/:id/reveal
pub async fn reveal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RevealResponse>> {
    Ok(Json(state.sessions.reveal(id).await?))
}

/// POST /api/sessions/:id/skip
pub async fn skip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Progress>> {
    Ok(Json(state.sessions.skip(id).await?))
}
