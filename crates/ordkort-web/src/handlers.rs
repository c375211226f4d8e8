//! HTTP request handlers for the web surface.
//!
//! Thin adapters between axum and the session/extractor/wiki layers; the
//! pipeline itself knows nothing about HTTP.

use crate::cards::build_flashcard_html;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use ordkort_domain::traits::ChatModel;
use ordkort_extractor::{ExtractorConfig, SentenceFailure};
use ordkort_session::{suggest_topics, SessionError, TeacherSession};
use ordkort_wiki::{WikiClient, WikiError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Notice shown when no topic was entered
const MISSING_TOPIC_NOTICE: &str = "⚠️ Ange ett ämne!";

/// Notice shown when a search came back empty
const NO_HITS_NOTICE: &str = "⚠️ Inga artiklar hittades. Prova ett annat ämne.";

/// Shared application state
///
/// One session per server process; concurrent browsers share it, which
/// matches the single-learner design. The session mutex is held across the
/// LLM calls a request triggers, so mutation paths cannot race.
pub struct AppState<L: ChatModel> {
    /// The learner's session
    pub session: Arc<Mutex<TeacherSession<L>>>,
    /// Provider handle for calls outside the session (topic suggestion)
    pub llm: Arc<L>,
    /// Wikipedia client
    pub wiki: Arc<WikiClient>,
    /// Extraction tuning
    pub extractor_config: ExtractorConfig,
}

impl<L: ChatModel> Clone for AppState<L> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            llm: Arc::clone(&self.llm),
            wiki: Arc::clone(&self.wiki),
            extractor_config: self.extractor_config.clone(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Liveness status
    pub status: String,
}

/// Suggested topics
#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    /// Topics to offer in the picker
    pub topics: Vec<String>,
}

/// Query string for `/search`
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Topic to search for
    #[serde(default)]
    pub topic: String,
}

/// Search results, or a learner-facing notice
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Candidate article titles
    pub titles: Vec<String>,
    /// Notice to show instead of results, if any
    pub notice: Option<String>,
}

/// Request body for `/article`
#[derive(Debug, Deserialize)]
pub struct LoadArticleRequest {
    /// Article title to fetch and process
    pub title: String,
}

/// Outcome of loading an article and extracting vocabulary
#[derive(Debug, Default, Serialize)]
pub struct ArticleResponse {
    /// Notice to show instead of results, if any
    pub notice: Option<String>,
    /// The fetched article text, for the learner to read
    pub article: String,
    /// Number of entries extracted
    pub entry_count: usize,
    /// Number of sentences the segmenter produced
    pub sentences_total: usize,
    /// Sentences whose response could not be used
    pub failures: Vec<SentenceFailure>,
}

/// The currently stored article text
#[derive(Debug, Serialize)]
pub struct ArticleTextResponse {
    /// Article text, empty before anything was loaded
    pub article: String,
}

/// Current flashcards, rendered and listed
#[derive(Debug, Serialize)]
pub struct CardsResponse {
    /// Card markup for display
    pub html: String,
    /// Terms for the keep/discard selection list
    pub terms: Vec<String>,
}

/// Request body for `/cards/filter`
#[derive(Debug, Deserialize)]
pub struct FilterRequest {
    /// Terms the learner wants to keep
    pub keep: Vec<String>,
}

/// Request body for `/chat`
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The learner's message
    pub message: String,
}

/// Discussion reply
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// The teacher's reply
    pub reply: String,
}

/// Feedback over the learner's messages
#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    /// Joined feedback blocks
    pub feedback: String,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Wikipedia transport or decode failure
    Wiki(WikiError),
    /// LLM-backed session failure
    Session(SessionError),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Wiki(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
            AppError::Session(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<WikiError> for AppError {
    fn from(e: WikiError) -> Self {
        AppError::Wiki(e)
    }
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        AppError::Session(e)
    }
}

/// GET /health - liveness check
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// GET /topics - topics to offer in the picker
async fn topics<L>(State(state): State<AppState<L>>) -> Json<TopicsResponse>
where
    L: ChatModel + Send + Sync + 'static,
    L::Error: std::fmt::Display + Send,
{
    let topics = suggest_topics(Arc::clone(&state.llm)).await;
    Json(TopicsResponse { topics })
}

/// GET /search?topic= - candidate article titles for a topic
///
/// A blank topic is input validation, not a fault: the learner gets a
/// notice and no state changes.
async fn search<L>(
    State(state): State<AppState<L>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError>
where
    L: ChatModel + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    let topic = params.topic.trim();
    if topic.is_empty() {
        return Ok(Json(SearchResponse {
            titles: Vec::new(),
            notice: Some(MISSING_TOPIC_NOTICE.to_string()),
        }));
    }

    match state.wiki.search(topic).await {
        Ok(titles) if titles.is_empty() => Ok(Json(SearchResponse {
            titles,
            notice: Some(NO_HITS_NOTICE.to_string()),
        })),
        Ok(titles) => Ok(Json(SearchResponse {
            titles,
            notice: None,
        })),
        Err(e) => match e.user_notice() {
            Some(notice) => Ok(Json(SearchResponse {
                titles: Vec::new(),
                notice: Some(notice),
            })),
            None => Err(AppError::Wiki(e)),
        },
    }
}

/// POST /article - fetch an article and run extraction over it
///
/// Ambiguous/not-found outcomes come back as notices with a 200; only
/// transport faults become error responses.
async fn load_article<L>(
    State(state): State<AppState<L>>,
    Json(request): Json<LoadArticleRequest>,
) -> Result<Json<ArticleResponse>, AppError>
where
    L: ChatModel + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    let text = match state.wiki.fetch_article(&request.title).await {
        Ok(text) => text,
        Err(e) => {
            return match e.user_notice() {
                Some(notice) => Ok(Json(ArticleResponse {
                    notice: Some(notice),
                    ..Default::default()
                })),
                None => Err(AppError::Wiki(e)),
            };
        }
    };

    let mut session = state.session.lock().await;
    session.set_article(text);
    let report = session.process_article(&state.extractor_config).await;

    Ok(Json(ArticleResponse {
        notice: None,
        article: session.article().to_string(),
        entry_count: report.entries.len(),
        sentences_total: report.sentences_total,
        failures: report.failures,
    }))
}

/// GET /article - the stored article text, for display alongside the chat
async fn current_article<L>(State(state): State<AppState<L>>) -> Json<ArticleTextResponse>
where
    L: ChatModel + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    let session = state.session.lock().await;
    Json(ArticleTextResponse {
        article: session.article().to_string(),
    })
}

/// GET /cards - render the current flashcard set
async fn cards<L>(State(state): State<AppState<L>>) -> Json<CardsResponse>
where
    L: ChatModel + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    let session = state.session.lock().await;
    Json(CardsResponse {
        html: build_flashcard_html(session.flashcards().current()),
        terms: session.flashcards().terms(),
    })
}

/// POST /cards/filter - keep only the selected terms
async fn filter_cards<L>(
    State(state): State<AppState<L>>,
    Json(request): Json<FilterRequest>,
) -> Json<CardsResponse>
where
    L: ChatModel + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    let keep: HashSet<String> = request.keep.into_iter().collect();

    let mut session = state.session.lock().await;
    session.flashcards_mut().filter_keep(&keep);

    Json(CardsResponse {
        html: build_flashcard_html(session.flashcards().current()),
        terms: session.flashcards().terms(),
    })
}

/// POST /chat - one discussion turn with the AI teacher
async fn chat<L>(
    State(state): State<AppState<L>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError>
where
    L: ChatModel + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    let mut session = state.session.lock().await;
    let reply = session.discuss(&request.message).await?;
    Ok(Json(ChatResponse { reply }))
}

/// GET /feedback - correctness feedback over the learner's messages
async fn feedback<L>(State(state): State<AppState<L>>) -> Result<Json<FeedbackResponse>, AppError>
where
    L: ChatModel + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    let session = state.session.lock().await;
    let feedback = session.feedback().await?;
    Ok(Json(FeedbackResponse { feedback }))
}

/// Create the axum router with all routes
pub fn create_router<L>(state: AppState<L>) -> Router
where
    L: ChatModel + Send + Sync + 'static,
    L::Error: std::fmt::Display + Send,
{
    Router::new()
        .route("/health", get(health))
        .route("/topics", get(topics::<L>))
        .route("/search", get(search::<L>))
        .route("/article", get(current_article::<L>).post(load_article::<L>))
        .route("/cards", get(cards::<L>))
        .route("/cards/filter", post(filter_cards::<L>))
        .route("/chat", post(chat::<L>))
        .route("/feedback", get(feedback::<L>))
        .with_state(state)
}
