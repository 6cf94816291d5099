pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::services::auth::AuthService;
use crate::services::deck::DeckStore;
use crate::services::session::SessionManager;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub deck: Arc<DeckStore>,
    pub sessions: Arc<SessionManager>,
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let auth = AuthService::from_env();
    let deck = DeckStore::from_env();
    tracing::info!(
        "Deck file {}: {} pairs",
        deck.path().display(),
        deck.load()?.len()
    );

    let state = AppState {
        auth: Arc::new(auth),
        deck: Arc::new(deck),
        sessions: Arc::new(SessionManager::new()),
    };

    // Build router with protected routes
    let protected_routes = Router::new()
        // Deck routes
        .route("/api/deck", get(routes::deck::list))
        .route("/api/deck/words", post(routes::deck::add_word))
        .route("/api/deck/export", get(routes::deck::export))
        // Session routes
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

    // Build full router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/auth/login", post(routes::auth::login))
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
