//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up the app over a temporary deck file
//! - Factory functions for request bodies
//!
//! Tests are self-contained; no external services are required.

pub mod fixtures;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tempfile::TempDir;

use wortschatz_backend::routes;
use wortschatz_backend::services::auth::AuthService;
use wortschatz_backend::services::deck::DeckStore;
use wortschatz_backend::services::session::SessionManager;
use wortschatz_backend::AppState;

/// Test context holding the app router and its backing deck directory.
pub struct TestContext {
    app: Router,
    // Keeps the temporary deck directory alive for the test's duration.
    _deck_dir: TempDir,
}

impl TestContext {
    /// Context with the sample deck seeded and the auth gate disabled.
    pub fn new() -> Self {
        Self::build(Some(fixtures::SAMPLE_DECK_CSV), AuthService::disabled())
    }

    /// Context whose API is gated behind `password`.
    pub fn with_password(password: &str) -> Self {
        Self::build(
            Some(fixtures::SAMPLE_DECK_CSV),
            AuthService::with_password(password),
        )
    }

    /// Context with no deck file on disk, so the starter deck applies.
    pub fn with_missing_deck() -> Self {
        Self::build(None, AuthService::disabled())
    }

    /// Context with an explicit deck file body.
    pub fn with_deck(csv: &str) -> Self {
        Self::build(Some(csv), AuthService::disabled())
    }

    fn build(csv: Option<&str>, auth: AuthService) -> Self {
        let deck_dir = tempfile::tempdir().expect("Failed to create deck dir");
        let deck_path = deck_dir.path().join("deck.csv");
        if let Some(csv) = csv {
            std::fs::write(&deck_path, csv).expect("Failed to seed deck file");
        }

        let state = AppState {
            auth: Arc::new(auth),
            deck: Arc::new(DeckStore::new(deck_path)),
            sessions: Arc::new(SessionManager::new()),
        };

        Self {
            app: build_test_router(state),
            _deck_dir: deck_dir,
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Format authorization header value.
    pub fn auth_header_value(token: &str) -> String {
        format!("Bearer {}", token)
    }
}

/// Build the test router with all routes.
fn build_test_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/api/deck", get(routes::deck::list))
        .route("/api/deck/words", post(routes::deck::add_word))
        .route("/api/deck/export", get(routes::deck::export))
        .route("/api/sessions", post(routes::session::create))
        .route("/api/sessions/:id", get(routes::session::summary))
        .route("/api/sessions/:id/card", get(routes::session::card))
        .route("/api/sessions/:id/answer", post(routes::session::answer))
        .route("/api/sessions/:id/choice", post(routes::session::choose))
        .route("/api/sessions/:id/rate", post(routes::session::rate))
        .route("/api/sessions/:id/reveal", post(routes::session::reveal))
        .route("/api/sessions/:id/skip", post(routes::session::skip))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            routes::auth::auth_middleware,
        ));

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/api/auth/login", post(routes::auth::login))
        .merge(protected_routes)
        .with_state(state)
}
