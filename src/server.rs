// 🌐 Web surface - the single page, its form endpoints, and a JSON snapshot API
// Every request runs one journal action (or none) and re-renders from the store

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::html::render_page;
use crate::journal::{Action, Journal, Outcome};
use crate::mutators::{ItemForm, ProgressForm};
use crate::view::Tab;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    journal: Arc<Mutex<Journal>>,
}

impl AppState {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal: Arc::new(Mutex::new(journal)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Journal>, ServerError> {
        self.journal.lock().map_err(|_| ServerError::LockPoisoned)
    }
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("journal state is unavailable")]
    LockPoisoned,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");
        let body = Json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(self.to_string()),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    tab: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HeroForm {
    #[serde(default)]
    url: String,
}

#[derive(Debug, Deserialize)]
struct StoryForm {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
struct TotalsResponse {
    #[serde(flatten)]
    totals: crate::render::TotalsView,
    lines: Vec<String>,
}

// ============================================================================
// Page Handlers
// ============================================================================

/// GET / - The whole page, optionally switching tab first
async fn serve_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, ServerError> {
    let mut journal = state.lock()?;
    if let Some(tab) = query.tab {
        journal.apply(Action::SelectTab(tab));
    }
    Ok(Html(render_page(&journal, None)))
}

/// Run one action, then redirect back to `section` or re-render with the notice
fn run_action(state: &AppState, action: Action, section: Tab) -> Result<Response, ServerError> {
    let mut journal = state.lock()?;
    journal.tabs.activate(section);

    match journal.apply(action) {
        Outcome::Applied(_) => {
            Ok(Redirect::to(&format!("/?tab={}", section.id())).into_response())
        }
        outcome @ Outcome::Rejected(_) => {
            let page = render_page(&journal, outcome.notice().as_deref());
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response())
        }
    }
}

/// POST /progress
async fn add_progress(
    State(state): State<AppState>,
    Form(form): Form<ProgressForm>,
) -> Result<Response, ServerError> {
    run_action(&state, Action::AddProgress(form), Tab::Progress)
}

/// POST /budget
async fn add_budget(
    State(state): State<AppState>,
    Form(form): Form<ItemForm>,
) -> Result<Response, ServerError> {
    run_action(&state, Action::AddBudget(form), Tab::Budget)
}

/// POST /wishlist
async fn add_wish(
    State(state): State<AppState>,
    Form(form): Form<ItemForm>,
) -> Result<Response, ServerError> {
    run_action(&state, Action::AddWish(form), Tab::WishList)
}

/// POST /hero/update
async fn update_hero(
    State(state): State<AppState>,
    Form(form): Form<HeroForm>,
) -> Result<Response, ServerError> {
    run_action(&state, Action::UpdateHero(form.url), Tab::Home)
}

/// POST /hero/reset
async fn reset_hero(State(state): State<AppState>) -> Result<Response, ServerError> {
    run_action(&state, Action::ResetHero, Tab::Home)
}

/// POST /hero/remove
async fn remove_hero(State(state): State<AppState>) -> Result<Response, ServerError> {
    run_action(&state, Action::RemoveHero, Tab::Home)
}

/// POST /story
async fn update_story(
    State(state): State<AppState>,
    Form(form): Form<StoryForm>,
) -> Result<Response, ServerError> {
    run_action(&state, Action::UpdateStory(form.text), Tab::BuildStory)
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/progress - Progress updates in insertion order
async fn get_progress(State(state): State<AppState>) -> Result<impl IntoResponse, ServerError> {
    let journal = state.lock()?;
    Ok(Json(ApiResponse::ok(journal.store.progress().to_vec())))
}

/// GET /api/budget
async fn get_budget(State(state): State<AppState>) -> Result<impl IntoResponse, ServerError> {
    let journal = state.lock()?;
    Ok(Json(ApiResponse::ok(journal.store.budget().to_vec())))
}

/// GET /api/budget/totals
async fn get_budget_totals(State(state): State<AppState>) -> Result<impl IntoResponse, ServerError> {
    let journal = state.lock()?;
    let totals = journal.budget_totals();
    let lines = totals.lines();
    Ok(Json(ApiResponse::ok(TotalsResponse { totals, lines })))
}

/// GET /api/wishlist
async fn get_wishlist(State(state): State<AppState>) -> Result<impl IntoResponse, ServerError> {
    let journal = state.lock()?;
    Ok(Json(ApiResponse::ok(journal.store.wishlist().to_vec())))
}

/// GET /api/gallery
async fn get_gallery(State(state): State<AppState>) -> Result<impl IntoResponse, ServerError> {
    let journal = state.lock()?;
    Ok(Json(ApiResponse::ok(journal.gallery())))
}

// ============================================================================
// Router
// ============================================================================

pub fn router(state: AppState, static_dir: &str) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/progress", get(get_progress))
        .route("/budget", get(get_budget))
        .route("/budget/totals", get(get_budget_totals))
        .route("/wishlist", get(get_wishlist))
        .route("/gallery", get(get_gallery))
        .with_state(state.clone());

    Router::new()
        .route("/", get(serve_page))
        .route("/progress", post(add_progress))
        .route("/budget", post(add_budget))
        .route("/wishlist", post(add_wish))
        .route("/hero/update", post(update_hero))
        .route("/hero/reset", post(reset_hero))
        .route("/hero/remove", post(remove_hero))
        .route("/story", post(update_story))
        .with_state(state)
        .nest("/api", api_routes)
        .nest_service("/images", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
