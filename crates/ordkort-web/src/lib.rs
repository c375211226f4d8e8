//! Ordkort Web
//!
//! Browser-facing HTTP server tying the pipeline together: topic picking,
//! article search and retrieval, flashcard extraction and filtering,
//! discussion chat, and feedback.

#![warn(missing_docs)]

pub mod cards;
pub mod config;
pub mod handlers;

use config::WebConfig;
use handlers::{create_router, AppState};
use ordkort_extractor::ExtractorConfig;
use ordkort_llm::OllamaChatProvider;
use ordkort_session::TeacherSession;
use ordkort_wiki::WikiClient;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tracing::info;

/// Web server error
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),
}

/// Start the HTTP server
///
/// Initializes tracing, wires the provider, wiki client, and session into
/// shared state, and serves until the process is stopped.
pub async fn start_server(config: WebConfig) -> Result<(), WebError> {
    tracing_subscriber::fmt::init();

    info!("Starting Ordkort web server");
    info!("Bind address: {}", config.bind_addr());
    info!("Model: {} @ {}", config.model, config.ollama_endpoint);
    info!("Article language: {}", config.wiki_language);

    let llm = Arc::new(
        OllamaChatProvider::new(&config.ollama_endpoint, &config.model)
            .with_temperature(config.temperature),
    );

    let state = AppState {
        session: Arc::new(Mutex::new(TeacherSession::from_arc(Arc::clone(&llm)))),
        llm,
        wiki: Arc::new(WikiClient::new(&config.wiki_language)),
        extractor_config: ExtractorConfig::from(config.extractor.clone()),
    };

    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Listening on {}", config.bind_addr());

    axum::serve(listener, app).await?;

    Ok(())
}
